/// Item kinds: unit values, display metadata, donation variants, groups.
///
/// Every lookup here is total. An id the catalog does not know is worth 0,
/// is called "unknown" and is drawn black.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire suffix marking units pledged for donation ("FoodDonation").
pub const DONATION_SUFFIX: &str = "Donation";

/// Label used for ids the catalog does not know.
pub const UNKNOWN_NAME: &str = "unknown";

/// Color used for ids the catalog does not know.
pub const UNKNOWN_COLOR: &str = "black";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Food,
    Culture,
    Industry,
    Energy,
    Information,
    Biotech,
    Hypertech,
    Ship,
    Score,
    WildSmall,
    WildBig,
    ArbitrarySmall,
    ArbitraryBig,
    ArbitraryWorld,
    Favor,
    Jungle,
    Ice,
    Desert,
    Water,
}

/// Substitution group a kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    Big,
    World,
}

pub const SMALL_GROUP: [ItemKind; 3] = [ItemKind::Food, ItemKind::Culture, ItemKind::Industry];
pub const BIG_GROUP: [ItemKind; 3] = [ItemKind::Energy, ItemKind::Information, ItemKind::Biotech];
pub const WORLD_GROUP: [ItemKind; 4] = [ItemKind::Jungle, ItemKind::Ice, ItemKind::Desert, ItemKind::Water];

impl ItemKind {
    pub const ALL: [ItemKind; 19] = [
        ItemKind::Food,
        ItemKind::Culture,
        ItemKind::Industry,
        ItemKind::Energy,
        ItemKind::Information,
        ItemKind::Biotech,
        ItemKind::Hypertech,
        ItemKind::Ship,
        ItemKind::Score,
        ItemKind::WildSmall,
        ItemKind::WildBig,
        ItemKind::ArbitrarySmall,
        ItemKind::ArbitraryBig,
        ItemKind::ArbitraryWorld,
        ItemKind::Favor,
        ItemKind::Jungle,
        ItemKind::Ice,
        ItemKind::Desert,
        ItemKind::Water,
    ];

    /// Exact, case-sensitive match on the wire id. Donation ids are not
    /// kinds; go through [`ItemKey::parse`] for those.
    pub fn parse(id: &str) -> Option<Self> {
        let kind = match id {
            "Food" => ItemKind::Food,
            "Culture" => ItemKind::Culture,
            "Industry" => ItemKind::Industry,
            "Energy" => ItemKind::Energy,
            "Information" => ItemKind::Information,
            "Biotech" => ItemKind::Biotech,
            "Hypertech" => ItemKind::Hypertech,
            "Ship" => ItemKind::Ship,
            "Score" => ItemKind::Score,
            "WildSmall" => ItemKind::WildSmall,
            "WildBig" => ItemKind::WildBig,
            "ArbitrarySmall" => ItemKind::ArbitrarySmall,
            "ArbitraryBig" => ItemKind::ArbitraryBig,
            "ArbitraryWorld" => ItemKind::ArbitraryWorld,
            "Favor" => ItemKind::Favor,
            "Jungle" => ItemKind::Jungle,
            "Ice" => ItemKind::Ice,
            "Desert" => ItemKind::Desert,
            "Water" => ItemKind::Water,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Food => "Food",
            ItemKind::Culture => "Culture",
            ItemKind::Industry => "Industry",
            ItemKind::Energy => "Energy",
            ItemKind::Information => "Information",
            ItemKind::Biotech => "Biotech",
            ItemKind::Hypertech => "Hypertech",
            ItemKind::Ship => "Ship",
            ItemKind::Score => "Score",
            ItemKind::WildSmall => "WildSmall",
            ItemKind::WildBig => "WildBig",
            ItemKind::ArbitrarySmall => "ArbitrarySmall",
            ItemKind::ArbitraryBig => "ArbitraryBig",
            ItemKind::ArbitraryWorld => "ArbitraryWorld",
            ItemKind::Favor => "Favor",
            ItemKind::Jungle => "Jungle",
            ItemKind::Ice => "Ice",
            ItemKind::Desert => "Desert",
            ItemKind::Water => "Water",
        }
    }

    /// Scalar trade value of one unit.
    pub fn unit_value(self) -> f64 {
        match self {
            ItemKind::Food | ItemKind::Culture | ItemKind::Industry => 1.0,
            ItemKind::Energy | ItemKind::Information | ItemKind::Biotech => 1.5,
            ItemKind::Hypertech | ItemKind::Score => 3.0,
            ItemKind::Ship => 1.0,
            ItemKind::WildSmall | ItemKind::ArbitrarySmall => 1.0,
            ItemKind::WildBig | ItemKind::ArbitraryBig => 1.5,
            ItemKind::ArbitraryWorld
            | ItemKind::Favor
            | ItemKind::Jungle
            | ItemKind::Ice
            | ItemKind::Desert
            | ItemKind::Water => 0.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ItemKind::WildSmall => "Wild (small)",
            ItemKind::WildBig => "Wild (big)",
            ItemKind::ArbitrarySmall => "Any small",
            ItemKind::ArbitraryBig => "Any big",
            ItemKind::ArbitraryWorld => "Any world",
            other => other.as_str(),
        }
    }

    pub fn display_color(self) -> &'static str {
        match self {
            ItemKind::Food => "green",
            ItemKind::Culture => "gold",
            ItemKind::Industry => "saddlebrown",
            ItemKind::Energy => "dimgray",
            ItemKind::Information => "royalblue",
            ItemKind::Biotech => "darkgreen",
            ItemKind::Hypertech => "purple",
            ItemKind::Ship => "orange",
            ItemKind::Score => "goldenrod",
            ItemKind::WildSmall => "white",
            ItemKind::WildBig => "silver",
            ItemKind::ArbitrarySmall => "lightgray",
            ItemKind::ArbitraryBig => "gray",
            ItemKind::ArbitraryWorld => "slategray",
            ItemKind::Favor => "hotpink",
            ItemKind::Jungle => "forestgreen",
            ItemKind::Ice => "lightcyan",
            ItemKind::Desert => "sandybrown",
            ItemKind::Water => "deepskyblue",
        }
    }

    /// Group membership. Wild and arbitrary tokens belong to the group they
    /// stand in for.
    pub fn size(self) -> Option<Size> {
        match self {
            ItemKind::Food
            | ItemKind::Culture
            | ItemKind::Industry
            | ItemKind::WildSmall
            | ItemKind::ArbitrarySmall => Some(Size::Small),
            ItemKind::Energy
            | ItemKind::Information
            | ItemKind::Biotech
            | ItemKind::WildBig
            | ItemKind::ArbitraryBig => Some(Size::Big),
            ItemKind::Jungle
            | ItemKind::Ice
            | ItemKind::Desert
            | ItemKind::Water
            | ItemKind::ArbitraryWorld => Some(Size::World),
            ItemKind::Hypertech | ItemKind::Ship | ItemKind::Score | ItemKind::Favor => None,
        }
    }

    /// True for the concrete members of a substitution group.
    pub fn is_concrete(self) -> bool {
        self.size().is_some_and(|size| size.members().contains(&self))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Size {
    pub fn members(self) -> &'static [ItemKind] {
        match self {
            Size::Small => &SMALL_GROUP,
            Size::Big => &BIG_GROUP,
            Size::World => &WORLD_GROUP,
        }
    }

    /// Wild token that may replace any member as a converter input.
    /// World blocks have none.
    pub fn wild(self) -> Option<ItemKind> {
        match self {
            Size::Small => Some(ItemKind::WildSmall),
            Size::Big => Some(ItemKind::WildBig),
            Size::World => None,
        }
    }

    /// Placeholder used in converter inputs meaning "any member".
    pub fn arbitrary(self) -> ItemKind {
        match self {
            Size::Small => ItemKind::ArbitrarySmall,
            Size::Big => ItemKind::ArbitraryBig,
            Size::World => ItemKind::ArbitraryWorld,
        }
    }
}

/// Base of a wire id: a catalog kind or an id we carry through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseKind<'a> {
    Known(ItemKind),
    Unknown(&'a str),
}

/// Structured form of a wire id: `{ base, donation }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemKey<'a> {
    pub base: BaseKind<'a>,
    pub donation: bool,
}

impl<'a> ItemKey<'a> {
    pub fn parse(id: &'a str) -> Self {
        let (base, donation) = match id.strip_suffix(DONATION_SUFFIX) {
            Some(base) => (base, true),
            None => (id, false),
        };
        let base = match ItemKind::parse(base) {
            Some(kind) => BaseKind::Known(kind),
            None => BaseKind::Unknown(base),
        };
        Self { base, donation }
    }

    pub fn kind(&self) -> Option<ItemKind> {
        match self.base {
            BaseKind::Known(kind) => Some(kind),
            BaseKind::Unknown(_) => None,
        }
    }

    pub fn base_str(&self) -> &'a str {
        match self.base {
            BaseKind::Known(kind) => kind.as_str(),
            BaseKind::Unknown(id) => id,
        }
    }

    pub fn unit_value(&self) -> f64 {
        match self.base {
            BaseKind::Known(kind) => kind.unit_value(),
            BaseKind::Unknown(id) => {
                log::debug!("no unit value for item `{id}`, using 0");
                0.0
            }
        }
    }
}

impl fmt::Display for ItemKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_str())?;
        if self.donation {
            f.write_str(DONATION_SUFFIX)?;
        }
        Ok(())
    }
}

/// Unit value of a wire id. Donation ids are worth their base kind.
#[inline]
pub fn unit_value(kind: &str) -> f64 {
    ItemKey::parse(kind).unit_value()
}

#[inline]
pub fn display_name(kind: &str) -> &'static str {
    ItemKey::parse(kind).kind().map_or(UNKNOWN_NAME, ItemKind::display_name)
}

#[inline]
pub fn display_color(kind: &str) -> &'static str {
    ItemKey::parse(kind).kind().map_or(UNKNOWN_COLOR, ItemKind::display_color)
}

#[inline]
pub fn is_donation_variant(kind: &str) -> bool {
    kind.ends_with(DONATION_SUFFIX)
}

/// Strips the donation suffix, if any.
#[inline]
pub fn base_kind(kind: &str) -> &str {
    kind.strip_suffix(DONATION_SUFFIX).unwrap_or(kind)
}
