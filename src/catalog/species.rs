/// Playable species and their display metadata.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback zh label, also the label of `Species::None`.
pub const UNKNOWN_ZH_NAME: &str = "未知";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Caylion,
    Yengii,
    Im,
    Eni,
    Zeth,
    Unity,
    Faderan,
    Kit,
    Kjasjavikalimm,
    /// Seat without a species yet.
    None,
}

impl Species {
    pub const PLAYABLE: [Species; 9] = [
        Species::Caylion,
        Species::Yengii,
        Species::Im,
        Species::Eni,
        Species::Zeth,
        Species::Unity,
        Species::Faderan,
        Species::Kit,
        Species::Kjasjavikalimm,
    ];

    pub fn parse(id: &str) -> Option<Self> {
        let species = match id {
            "Caylion" => Species::Caylion,
            "Yengii" => Species::Yengii,
            "Im" => Species::Im,
            "Eni" => Species::Eni,
            "Zeth" => Species::Zeth,
            "Unity" => Species::Unity,
            "Faderan" => Species::Faderan,
            "Kit" => Species::Kit,
            "Kjasjavikalimm" => Species::Kjasjavikalimm,
            "None" => Species::None,
            _ => return None,
        };
        Some(species)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Caylion => "Caylion",
            Species::Yengii => "Yengii",
            Species::Im => "Im",
            Species::Eni => "Eni",
            Species::Zeth => "Zeth",
            Species::Unity => "Unity",
            Species::Faderan => "Faderan",
            Species::Kit => "Kit",
            Species::Kjasjavikalimm => "Kjasjavikalimm",
            Species::None => "None",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Species::Caylion => "lightgreen",
            Species::Yengii => "darkblue",
            Species::Im => "lightblue",
            Species::Eni => "blue",
            Species::Zeth => "purple",
            Species::Unity => "gray",
            Species::Faderan => "yellow",
            Species::Kit => "orange",
            Species::Kjasjavikalimm => "red",
            Species::None => "white",
        }
    }

    pub fn zh_name(self) -> &'static str {
        match self {
            Species::Caylion => "凯利安",
            Species::Yengii => "岩基艾",
            Species::Im => "艾恩卓尔",
            Species::Eni => "恩尼艾特",
            Species::Zeth => "泽思",
            Species::Unity => "联合体",
            Species::Faderan => "法德澜",
            Species::Kit => "凯特",
            Species::Kjasjavikalimm => "贾斯",
            Species::None => UNKNOWN_ZH_NAME,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total color lookup on a wire id; unknown ids are black.
pub fn species_color(id: &str) -> &'static str {
    Species::parse(id).map_or(super::UNKNOWN_COLOR, Species::color)
}

pub fn species_zh_name(id: &str) -> &'static str {
    Species::parse(id).map_or(UNKNOWN_ZH_NAME, Species::zh_name)
}
