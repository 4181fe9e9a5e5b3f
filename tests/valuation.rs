// tests/valuation.rs
use proptest::prelude::*;
use sidcon_economy::catalog::{BIG_GROUP, ItemKind, SMALL_GROUP};
use sidcon_economy::mechanics::econ::merge;
use sidcon_economy::{
    Bundle, base_kind, bundle_value, display_color, display_name, donation_value,
    is_donation_variant, unit_value,
};

fn bundle(entries: &[(&str, f64)]) -> Bundle {
    entries.iter().map(|(k, q)| (k.to_string(), *q)).collect()
}

/* ──────────────────────────────────────────────────────────────────────────
1) Catalog lookups are total
────────────────────────────────────────────────────────────────────────── */

#[test]
fn unit_values_match_the_table() {
    let table = [
        ("Food", 1.0),
        ("Culture", 1.0),
        ("Industry", 1.0),
        ("Energy", 1.5),
        ("Information", 1.5),
        ("Biotech", 1.5),
        ("Hypertech", 3.0),
        ("Ship", 1.0),
        ("Score", 3.0),
        ("WildSmall", 1.0),
        ("WildBig", 1.5),
        ("ArbitrarySmall", 1.0),
        ("ArbitraryBig", 1.5),
    ];
    for (kind, value) in table {
        assert_eq!(unit_value(kind), value, "{kind}");
        assert_eq!(unit_value(&format!("{kind}Donation")), value, "{kind}Donation");
    }
}

#[test]
fn unknown_kinds_never_fail() {
    assert_eq!(unit_value(""), 0.0);
    assert_eq!(unit_value("food"), 0.0);
    assert_eq!(display_name("Spice"), "unknown");
    assert_eq!(display_color("Spice"), "black");
    assert_eq!(display_name("FoodDonation"), display_name("Food"));
    assert_eq!(display_color("FoodDonation"), display_color("Food"));
}

#[test]
fn donation_suffix_convention() {
    assert!(is_donation_variant("ShipDonation"));
    assert!(!is_donation_variant("Ship"));
    assert_eq!(base_kind("ShipDonation"), "Ship");
    assert_eq!(base_kind("Ship"), "Ship");
}

#[test]
fn substitution_groups() {
    assert_eq!(SMALL_GROUP, [ItemKind::Food, ItemKind::Culture, ItemKind::Industry]);
    assert_eq!(BIG_GROUP, [ItemKind::Energy, ItemKind::Information, ItemKind::Biotech]);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Bundle and donation values
────────────────────────────────────────────────────────────────────────── */

#[test]
fn empty_bundle_is_worth_nothing() {
    assert_eq!(bundle_value(&Bundle::new()), 0.0);
    assert_eq!(donation_value(&Bundle::new()), 0.0);
}

#[test]
fn bundle_value_is_idempotent() {
    let b = bundle(&[("Food", 3.0), ("Information", 2.5), ("WildBig", 1.0), ("Mystery", 4.0)]);
    let first = bundle_value(&b);
    assert_eq!(first, bundle_value(&b));
    assert_eq!(first, 3.0 + 3.75 + 1.5);
}

#[test]
fn donation_value_ignores_plain_entries() {
    assert_eq!(donation_value(&bundle(&[("Food", 5.0)])), 0.0);
    assert_eq!(donation_value(&bundle(&[("FoodDonation", 3.0)])), 3.0 * unit_value("Food"));
    let mixed = bundle(&[("HypertechDonation", 1.0), ("Hypertech", 10.0), ("SpiceDonation", 2.0)]);
    assert_eq!(donation_value(&mixed), 3.0);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Bundle values under splitting and merging
────────────────────────────────────────────────────────────────────────── */

const IDS: [&str; 10] = [
    "Food",
    "Energy",
    "Hypertech",
    "WildBig",
    "Score",
    "FoodDonation",
    "BiotechDonation",
    "HypertechDonation",
    "Spice",
    "SpiceDonation",
];

proptest! {
    #[test]
    fn split_and_merged_bundles_keep_their_value(
        entries in prop::collection::btree_map(prop::sample::select(IDS.to_vec()), 0.0f64..100.0, 0..10),
        share in 0.0f64..=1.0,
    ) {
        let whole: Bundle = entries.iter().map(|(k, q)| (k.to_string(), *q)).collect();
        let left: Bundle = entries.iter().map(|(k, q)| (k.to_string(), q * share)).collect();
        let right: Bundle = entries.iter().rev().map(|(k, q)| (k.to_string(), q * (1.0 - share))).collect();

        let mut merged = Bundle::new();
        merge(&mut merged, &right);
        merge(&mut merged, &left);

        let eps = 1e-9 * (1.0 + bundle_value(&whole));
        prop_assert!((bundle_value(&merged) - bundle_value(&whole)).abs() <= eps);
        prop_assert!((bundle_value(&left) + bundle_value(&right) - bundle_value(&whole)).abs() <= eps);
        prop_assert!(donation_value(&whole) <= bundle_value(&whole) + eps);
        prop_assert!(donation_value(&merged) <= bundle_value(&merged) + eps);
    }
}
