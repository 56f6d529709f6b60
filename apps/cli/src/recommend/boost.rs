//! Skill Boost Heuristic.
//!
//! Estimates how much acquiring a skill would lift a candidate's match rate,
//! as a percentage in [20,40]. Known skills use fixed values; unknown skills
//! fall back to a deterministic hash so the same skill always shows the same
//! number. Cosmetic only: the value feeds a display label, nothing ranks on
//! it.

/// Fixed boost values for commonly requested skills. Keyed by the trimmed,
/// lowercased skill name.
fn known_boost(key: &str) -> Option<u32> {
    let value = match key {
        "react" => 32,
        "python" => 28,
        "javascript" => 35,
        "sql" => 25,
        "java" => 30,
        "django" => 27,
        "spring boot" => 33,
        "data analysis" => 29,
        "power bi" => 26,
        "html/css" => 24,
        "postgresql" => 31,
        "machine learning" => 38,
        "node.js" => 34,
        "mongodb" => 29,
        "aws" => 36,
        "docker" => 33,
        "kubernetes" => 37,
        "typescript" => 32,
        "angular" => 30,
        "vue" => 28,
        _ => return None,
    };
    Some(value)
}

/// Boost percentage for a skill, always in [20,40].
///
/// The fallback hashes the ORIGINAL string (not the lookup key) over its
/// UTF-16 code units with 32-bit wrapping arithmetic: per unit,
/// `h = h*31 + unit`, one Murmur-style multiply, one xor-shift. Output
/// depends only on the character codes, so it is stable across processes.
pub fn skill_boost(skill: &str) -> u32 {
    let lowered = skill.to_lowercase();
    if let Some(value) = known_boost(lowered.trim()) {
        return value;
    }

    let mut hash: i32 = 0;
    for unit in skill.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
        hash = hash.wrapping_mul(0x5bd1_e995);
        hash ^= ((hash as u32) >> 15) as i32;
    }

    hash.unsigned_abs() % 21 + 20
}
