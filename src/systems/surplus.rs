//! Surplus split among cooperating participants.
//!
//! Simplified Shapley value: only the grand coalition produces synergy, every
//! smaller coalition is worth the sum of its members' standalone values. Under
//! that assumption each participant's Shapley value collapses to
//!
//! ```text
//! φ_i = v({i}) + (v(N) - Σ_j v({j})) / n
//! ```
//!
//! Synergy may be negative; shares then drop below standalone values.

use std::collections::BTreeMap;

use crate::mechanics::econ::{Bundle, bundle_value};

/// v(N) - Σ v({i}).
#[inline]
pub fn total_synergy(standalone: &BTreeMap<String, f64>, grand_value: f64) -> f64 {
    grand_value - standalone.values().sum::<f64>()
}

/// Splits `grand_value` so that shares sum to it. Empty input -> empty output.
pub fn calculate_shapley_values_simplified(
    standalone: &BTreeMap<String, f64>,
    grand_value: f64,
) -> BTreeMap<String, f64> {
    let n = standalone.len();
    if n == 0 {
        return BTreeMap::new();
    }

    let per_head = total_synergy(standalone, grand_value) / n as f64;
    let shares: BTreeMap<String, f64> = standalone
        .iter()
        .map(|(id, v)| (id.clone(), v + per_head))
        .collect();
    debug_assert_eq!(shares.len(), n);

    log::debug!("split {grand_value} among {n}, synergy per head {per_head}");
    shares
}

/// Splits the value of the pooled bundles, using each participant's own
/// bundle value as its standalone value.
pub fn split_trade_surplus(
    holdings: &BTreeMap<String, Bundle>,
    grand_value: f64,
) -> BTreeMap<String, f64> {
    let standalone = holdings
        .iter()
        .map(|(id, bundle)| (id.clone(), bundle_value(bundle)))
        .collect();
    calculate_shapley_values_simplified(&standalone, grand_value)
}
