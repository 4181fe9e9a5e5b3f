//! Cost adjustments: the favor buff and discounting of future income.

use crate::catalog::{ItemKind, Species, base_kind};
use crate::rules::Rules;

/// A rule that can move a cost. Modifiers compose by folding in order.
pub trait CostModifier {
    fn adjust_cost(&self, cost: f64, item_kind: &str) -> f64;
}

/// Everything the favor discount looks at for one participant.
#[derive(Clone, Copy, Debug)]
pub struct BuffContext<'r> {
    /// Global switch pushed by the server.
    pub buff_enabled: bool,
    /// `None` when the species id is not one we know.
    pub species: Option<Species>,
    /// Units of the buff resource held.
    pub favor_held: f64,
    pub rules: &'r Rules,
}

impl BuffContext<'_> {
    /// Switch on, species not exempt, some buff resource held.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.buff_enabled
            && self.species != Some(self.rules.exempt_species)
            && self.favor_held > 0.0
    }

    #[inline]
    fn is_exempt_kind(&self, item_kind: &str) -> bool {
        ItemKind::parse(base_kind(item_kind)) == Some(self.rules.exempt_kind)
    }
}

impl CostModifier for BuffContext<'_> {
    fn adjust_cost(&self, cost: f64, item_kind: &str) -> f64 {
        discounted_cost(cost, self, item_kind)
    }
}

/// `base_cost - discount` for an eligible participant on a non-exempt kind.
/// Not clamped: callers never pass a cost below the discount.
#[inline]
pub fn discounted_cost(base_cost: f64, ctx: &BuffContext<'_>, item_kind: &str) -> f64 {
    if ctx.is_eligible() && !ctx.is_exempt_kind(item_kind) {
        base_cost - ctx.rules.favor_discount
    } else {
        base_cost
    }
}

/// Folds `base_cost` through every modifier in order.
pub fn apply_modifiers(base_cost: f64, item_kind: &str, mods: &[&dyn CostModifier]) -> f64 {
    mods.iter()
        .fold(base_cost, |cost, m| m.adjust_cost(cost, item_kind))
}

/// Σ_{k=0}^{turns-1} r^-k = (1 - r^-turns) / (1 - r^-1), r = `rules.interest_base`.
#[inline]
pub fn discount_rate(turns: i32, rules: &Rules) -> f64 {
    let r = rules.interest_base;
    (1.0 - r.powi(-turns)) / (1.0 - r.powi(-1))
}

/// Present value of `interest` paid every turn for `turns` turns.
#[inline]
pub fn discounted_interest(interest: f64, turns: i32, rules: &Rules) -> f64 {
    interest * discount_rate(turns, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(rules: &Rules, enabled: bool, species: Species, favor: f64) -> BuffContext<'_> {
        BuffContext { buff_enabled: enabled, species: Some(species), favor_held: favor, rules }
    }

    #[test]
    fn eligible_participant_pays_one_less() {
        let rules = Rules::default();
        let c = ctx(&rules, true, Species::Zeth, 2.0);
        assert_eq!(discounted_cost(4.0, &c, "Energy"), 3.0);
        assert_eq!(discounted_cost(4.0, &c, "Hypertech"), 4.0);
        assert_eq!(discounted_cost(4.0, &c, "HypertechDonation"), 4.0);
    }

    #[test]
    fn each_condition_blocks_the_discount() {
        let rules = Rules::default();
        assert!(!ctx(&rules, false, Species::Zeth, 2.0).is_eligible());
        assert!(!ctx(&rules, true, Species::Kjasjavikalimm, 2.0).is_eligible());
        assert!(!ctx(&rules, true, Species::Zeth, 0.0).is_eligible());
    }

    #[test]
    fn unknown_species_is_not_exempt() {
        let rules = Rules::default();
        let c = BuffContext { buff_enabled: true, species: None, favor_held: 1.0, rules: &rules };
        assert!(c.is_eligible());
    }

    #[test]
    fn modifiers_fold_in_order() {
        let rules = Rules::default();
        let a = ctx(&rules, true, Species::Eni, 1.0);
        let b = ctx(&rules, true, Species::Kit, 1.0);
        assert_eq!(apply_modifiers(5.0, "Food", &[&a, &b]), 3.0);
        assert_eq!(apply_modifiers(5.0, "Food", &[]), 5.0);
    }

    #[test]
    fn discount_rate_matches_closed_form() {
        let rules = Rules::default();
        assert_eq!(discount_rate(0, &rules), 0.0);
        assert!((discount_rate(1, &rules) - 1.0).abs() < 1e-12);
        let two = 1.0 + 1.0 / 1.23;
        assert!((discount_rate(2, &rules) - two).abs() < 1e-12);
        assert!((discounted_interest(3.0, 2, &rules) - 3.0 * two).abs() < 1e-12);
    }

    #[test]
    fn interest_base_comes_from_rules() {
        let rules = Rules::from_json(r#"{ "interest_base": 2.0 }"#).unwrap();
        // 1 + 1/2 + 1/4
        assert!((discount_rate(3, &rules) - 1.75).abs() < 1e-12);
        assert!((discount_rate(3, &rules) - discount_rate(3, Rules::stock())).abs() > 0.1);
        assert!((discounted_interest(2.0, 3, &rules) - 3.5).abs() < 1e-12);
    }
}
