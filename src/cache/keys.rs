//! Key Derivation Module
//!
//! Pure functions that build namespaced cache keys. Identifiers are
//! lower-cased so lookups are case-insensitive.

/// Namespace for upstream profile data
pub const PROFILE_SOURCE: &str = "github";

/// Namespace for generated insight text
pub const INSIGHTS_FEATURE: &str = "ai";

/// Namespace for head-to-head verdicts
pub const COMPARISON_FEATURE: &str = "compare";

// == Profile Key ==
/// Builds `github:<id>:profile`.
pub fn profile_key(id: &str) -> String {
    format!("{}:{}:profile", PROFILE_SOURCE, id.to_lowercase())
}

// == Insights Key ==
/// Builds `ai:<id>:insights`.
pub fn insights_key(id: &str) -> String {
    format!("{}:{}:insights", INSIGHTS_FEATURE, id.to_lowercase())
}

// == Comparison Key ==
/// Builds `compare:<min>:<max>:verdict`.
///
/// The identifiers are sorted after lower-casing, so `a` vs `b` and `b` vs `a`
/// share one entry.
pub fn comparison_key(a: &str, b: &str) -> String {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    format!("{}:{}:{}:verdict", COMPARISON_FEATURE, first, second)
}
