//! Exchanges between concrete blocks and their wild / arbitrary tokens.
//!
//! These are bundle-to-bundle rewrites; nothing here touches a live game.
//! [`apply_exchange`] is the only place holdings are checked.

use crate::catalog::{ItemKind, Size};
use crate::error::{EconomyError, Result};
use crate::mechanics::econ::{Bundle, quantity};

fn illegal(kind: &str) -> EconomyError {
    log::warn!("rejected `{kind}` in exchange");
    EconomyError::IllegalItem(kind.to_owned())
}

/// Concrete blocks and wild tokens -> the arbitrary token of their group.
pub fn to_arbitrary(items: &Bundle) -> Result<Bundle> {
    let mut out = Bundle::new();
    for (id, qty) in items {
        let kind = ItemKind::parse(id)
            .filter(|k| k.is_concrete() || matches!(k, ItemKind::WildSmall | ItemKind::WildBig))
            .ok_or_else(|| illegal(id))?;
        let Some(size) = kind.size() else {
            return Err(illegal(id));
        };
        *out.entry(size.arbitrary().as_str().to_owned()).or_insert(0.0) += qty;
    }
    Ok(out)
}

/// Wild tokens spent to obtain `wanted` concrete (or arbitrary) blocks.
pub fn wild_cost(wanted: &Bundle) -> Result<Bundle> {
    let mut out = Bundle::new();
    for (id, qty) in wanted {
        let wild = ItemKind::parse(id)
            .filter(|k| k.is_concrete() || matches!(k, ItemKind::ArbitrarySmall | ItemKind::ArbitraryBig))
            .and_then(ItemKind::size)
            .and_then(Size::wild)
            .ok_or_else(|| illegal(id))?;
        *out.entry(wild.as_str().to_owned()).or_insert(0.0) += qty;
    }
    Ok(out)
}

/// Quantities moved by an exchange must be finite and non-negative.
fn check_quantities(bundle: &Bundle) -> Result<()> {
    match bundle.iter().find(|(_, qty)| !qty.is_finite() || **qty < 0.0) {
        Some((id, qty)) => {
            log::warn!("rejected quantity {qty} of `{id}` in exchange");
            Err(EconomyError::WrongQuantity { required: 0.0, offered: *qty })
        }
        None => Ok(()),
    }
}

/// `storage - remove + add`, provided every removed quantity is held.
/// Negative or non-finite quantities on either side are rejected.
pub fn apply_exchange(storage: &Bundle, remove: &Bundle, add: &Bundle) -> Result<Bundle> {
    check_quantities(remove)?;
    check_quantities(add)?;
    for (id, needed) in remove {
        let held = quantity(storage, id);
        if held < *needed {
            return Err(EconomyError::InsufficientStorage {
                item: id.clone(),
                needed: *needed,
                held,
            });
        }
    }
    let mut out = storage.clone();
    for (id, qty) in remove {
        *out.entry(id.clone()).or_insert(0.0) -= qty;
    }
    for (id, qty) in add {
        *out.entry(id.clone()).or_insert(0.0) += qty;
    }
    Ok(out)
}

/// Checks a combination offered for an `Arbitrary*` converter input.
///
/// Only the group's wild token and the chosen `output_kind` may appear, and
/// together they must add up to `required`.
pub fn resolve_arbitrary_input(
    size: Size,
    required: f64,
    output_kind: &str,
    offered: &Bundle,
) -> Result<()> {
    let chosen = ItemKind::parse(output_kind)
        .filter(|k| k.is_concrete() && k.size() == Some(size))
        .ok_or_else(|| illegal(output_kind))?;
    let wild = size.wild();

    if let Some(extra) = offered
        .keys()
        .find(|id| ItemKind::parse(id).is_none_or(|k| k != chosen && Some(k) != wild))
    {
        return Err(illegal(extra));
    }

    let total = quantity(offered, chosen.as_str())
        + wild.map_or(0.0, |w| quantity(offered, w.as_str()));
    if total != required {
        return Err(EconomyError::WrongQuantity { required, offered: total });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(entries: &[(&str, f64)]) -> Bundle {
        entries.iter().map(|(k, q)| (k.to_string(), *q)).collect()
    }

    #[test]
    fn arbitrary_groups_by_size() {
        let out = to_arbitrary(&bundle(&[("Food", 1.0), ("WildSmall", 2.0), ("Biotech", 1.0), ("Ice", 1.0)])).unwrap();
        assert_eq!(out, bundle(&[("ArbitrarySmall", 3.0), ("ArbitraryBig", 1.0), ("ArbitraryWorld", 1.0)]));
        assert!(to_arbitrary(&bundle(&[("Ship", 1.0)])).is_err());
        assert!(to_arbitrary(&bundle(&[("ArbitrarySmall", 1.0)])).is_err());
    }

    #[test]
    fn wild_cost_rejects_world_blocks() {
        let out = wild_cost(&bundle(&[("Culture", 2.0), ("ArbitraryBig", 1.0)])).unwrap();
        assert_eq!(out, bundle(&[("WildSmall", 2.0), ("WildBig", 1.0)]));
        assert!(wild_cost(&bundle(&[("Water", 1.0)])).is_err());
    }

    #[test]
    fn exchange_checks_holdings() {
        let storage = bundle(&[("WildBig", 1.0)]);
        let err = apply_exchange(&storage, &bundle(&[("WildBig", 2.0)]), &bundle(&[("Energy", 2.0)]));
        assert!(matches!(err, Err(EconomyError::InsufficientStorage { .. })));
        let ok = apply_exchange(&storage, &bundle(&[("WildBig", 1.0)]), &bundle(&[("Energy", 1.0)])).unwrap();
        assert_eq!(ok, bundle(&[("WildBig", 0.0), ("Energy", 1.0)]));
    }

    #[test]
    fn exchange_rejects_negative_and_nan_quantities() {
        let storage = bundle(&[("Food", 1.0)]);
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                apply_exchange(&storage, &bundle(&[("Food", bad)]), &Bundle::new()),
                Err(EconomyError::WrongQuantity { .. })
            ));
            assert!(matches!(
                apply_exchange(&storage, &Bundle::new(), &bundle(&[("Energy", bad)])),
                Err(EconomyError::WrongQuantity { .. })
            ));
        }
    }

    #[test]
    fn arbitrary_input_validation() {
        let offer = bundle(&[("WildSmall", 1.0), ("Food", 2.0)]);
        assert!(resolve_arbitrary_input(Size::Small, 3.0, "Food", &offer).is_ok());
        assert!(matches!(
            resolve_arbitrary_input(Size::Small, 4.0, "Food", &offer),
            Err(EconomyError::WrongQuantity { .. })
        ));
        assert!(resolve_arbitrary_input(Size::Small, 3.0, "Culture", &offer).is_err());
        assert!(resolve_arbitrary_input(Size::Big, 3.0, "Food", &offer).is_err());
    }
}
