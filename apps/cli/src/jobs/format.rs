//! Display formatting helpers for job cards.
//!
//! These feed the terminal renderer only; nothing here goes back over the
//! wire. Unparseable inputs fall back to neutral text rather than erroring.

use chrono::{DateTime, NaiveDate};

/// Qualitative tier of a backend match score, used to pick a badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    /// Tier boundaries: ≥80 excellent, ≥60 good, ≥40 fair, else low.
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            MatchTier::Excellent
        } else if score >= 60.0 {
            MatchTier::Good
        } else if score >= 40.0 {
            MatchTier::Fair
        } else {
            MatchTier::Low
        }
    }
}

/// Compact salary text for dense views: lakhs above ₹1L, thousands above
/// ₹1K, raw rupees below.
pub fn compact_salary(amount: f64) -> String {
    if amount > 100_000.0 {
        format!("₹{:.1}L", amount / 100_000.0)
    } else if amount > 1000.0 {
        format!("₹{}K", (amount / 1000.0).round() as i64)
    } else {
        format!("₹{amount}")
    }
}

/// Renders a posting date as "12 Mar 2024". Absent or unparseable dates
/// display as "Recently posted".
pub fn format_job_date(date: Option<&str>) -> String {
    const FALLBACK: &str = "Recently posted";

    let Some(raw) = date else {
        return FALLBACK.to_string();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return FALLBACK.to_string();
    }

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%m-%Y"));

    match parsed {
        Ok(day) => day.format("%-d %b %Y").to_string(),
        Err(_) => FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_tier_boundaries() {
        assert_eq!(MatchTier::for_score(92.0), MatchTier::Excellent);
        assert_eq!(MatchTier::for_score(80.0), MatchTier::Excellent);
        assert_eq!(MatchTier::for_score(79.9), MatchTier::Good);
        assert_eq!(MatchTier::for_score(60.0), MatchTier::Good);
        assert_eq!(MatchTier::for_score(40.0), MatchTier::Fair);
        assert_eq!(MatchTier::for_score(39.9), MatchTier::Low);
        assert_eq!(MatchTier::for_score(0.0), MatchTier::Low);
    }

    #[test]
    fn test_compact_salary_uses_lakh_above_one_lakh() {
        assert_eq!(compact_salary(250_000.0), "₹2.5L");
        assert_eq!(compact_salary(120_000.0), "₹1.2L");
    }

    #[test]
    fn test_compact_salary_uses_thousands_in_between() {
        assert_eq!(compact_salary(45_000.0), "₹45K");
        assert_eq!(compact_salary(45_600.0), "₹46K");
    }

    #[test]
    fn test_compact_salary_raw_below_one_thousand() {
        assert_eq!(compact_salary(800.0), "₹800");
    }

    #[test]
    fn test_date_formats_iso_inputs() {
        assert_eq!(format_job_date(Some("2024-03-12")), "12 Mar 2024");
        assert_eq!(
            format_job_date(Some("2024-03-12T09:30:00+05:30")),
            "12 Mar 2024"
        );
    }

    #[test]
    fn test_date_falls_back_when_missing_or_garbled() {
        assert_eq!(format_job_date(None), "Recently posted");
        assert_eq!(format_job_date(Some("")), "Recently posted");
        assert_eq!(format_job_date(Some("soon")), "Recently posted");
    }
}
