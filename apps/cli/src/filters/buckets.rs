//! Value bucketing for continuous job attributes.
//!
//! A bucket table is an ascending sequence of (inclusive upper bound, label)
//! pairs plus an open-ended final label. Labels double as facet values, so
//! their exact text is part of the filtering contract.

const ENTRY_LEVEL: &str = "Entry Level (0 years)";

const EXPERIENCE_BANDS: &[(f64, &str)] = &[
    (2.0, "Junior (1-2 years)"),
    (5.0, "Mid-level (3-5 years)"),
    (8.0, "Senior (6-8 years)"),
];
const EXPERIENCE_OPEN: &str = "Lead (8+ years)";

const SALARY_BANDS: &[(f64, &str)] = &[
    (30_000.0, "Under ₹30K"),
    (50_000.0, "₹30K - ₹50K"),
    (75_000.0, "₹50K - ₹75K"),
    (100_000.0, "₹75K - ₹100K"),
];
const SALARY_OPEN: &str = "Above ₹100K";

/// Returns the label of the first bound the value does not exceed, or the
/// open-ended label once every bound is exceeded. Total for non-negative
/// input.
pub fn bucket(value: f64, bands: &[(f64, &'static str)], open_label: &'static str) -> &'static str {
    for (upper, label) in bands {
        if value <= *upper {
            return label;
        }
    }
    open_label
}

/// Experience bucket. Exactly 0 years is its own band, not part of "≤2".
pub fn experience_band(years: f64) -> &'static str {
    if years == 0.0 {
        return ENTRY_LEVEL;
    }
    bucket(years, EXPERIENCE_BANDS, EXPERIENCE_OPEN)
}

/// Monthly wage bucket.
pub fn salary_band(wage: f64) -> &'static str {
    bucket(wage, SALARY_BANDS, SALARY_OPEN)
}
