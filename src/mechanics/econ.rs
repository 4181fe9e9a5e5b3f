/// Economy mechanics: bundle valuation and donation bookkeeping.
use std::collections::BTreeMap;

use crate::catalog::{ItemKey, ItemKind};

/// Item id -> quantity. A missing entry means zero.
pub type Bundle = BTreeMap<String, f64>;

/// Quantity held of `kind`; 0 when absent.
#[inline]
pub fn quantity(bundle: &Bundle, kind: &str) -> f64 {
    bundle.get(kind).copied().unwrap_or(0.0)
}

/// Σ quantity * unit value. Donation entries count at their base value.
#[inline]
pub fn bundle_value(bundle: &Bundle) -> f64 {
    bundle
        .iter()
        .map(|(kind, qty)| qty * ItemKey::parse(kind).unit_value())
        .sum()
}

/// Value of the donation entries only; everything else is skipped.
#[inline]
pub fn donation_value(bundle: &Bundle) -> f64 {
    bundle
        .iter()
        .filter_map(|(kind, qty)| {
            let key = ItemKey::parse(kind);
            key.donation.then(|| qty * key.unit_value())
        })
        .sum()
}

/// Bundle value without Score and ScoreDonation (the player's "item value").
#[inline]
pub fn item_value(bundle: &Bundle) -> f64 {
    bundle
        .iter()
        .filter_map(|(kind, qty)| {
            let key = ItemKey::parse(kind);
            (key.kind() != Some(ItemKind::Score)).then(|| qty * key.unit_value())
        })
        .sum()
}

/// Score + ScoreDonation held.
#[inline]
pub fn score_total(bundle: &Bundle) -> f64 {
    quantity(bundle, "Score") + quantity(bundle, "ScoreDonation")
}

/// What a receiver stores: donation entries merged into their base kind.
pub fn fold_donations(bundle: &Bundle) -> Bundle {
    let mut out = Bundle::new();
    for (kind, qty) in bundle {
        let key = ItemKey::parse(kind);
        *out.entry(key.base_str().to_owned()).or_insert(0.0) += qty;
    }
    out
}

/// Adds `other` into `into`, entry by entry.
pub fn merge(into: &mut Bundle, other: &Bundle) {
    for (kind, qty) in other {
        *into.entry(kind.clone()).or_insert(0.0) += qty;
    }
}
