//! Service tiers

use serde::{Deserialize, Serialize};

use crate::constants::TARIFF_NOT_SELECTED;

/// Named service tier. Unknown tags sent by the backend are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tariff {
    Free,
    Basic,
    Pro,
    Other(String),
}

impl Tariff {
    /// Tiers offered in the tariff chooser, in display order.
    pub const OFFERED: [Tariff; 3] = [Tariff::Free, Tariff::Basic, Tariff::Pro];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Other(tag) => tag,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Free => "Бесплатный",
            Self::Basic => "Базовый",
            Self::Pro => "Профессиональный",
            Self::Other(tag) => tag,
        }
    }

    /// Calculators are only available on the professional tier.
    pub fn grants_calculators(&self) -> bool {
        matches!(self, Self::Pro)
    }

    /// Display name for an optional tariff (`Не выбран` when unset).
    pub fn display_name_of(tariff: Option<&Tariff>) -> &str {
        tariff.map_or(TARIFF_NOT_SELECTED, Tariff::display_name)
    }
}

impl From<String> for Tariff {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "free" => Self::Free,
            "basic" => Self::Basic,
            "pro" => Self::Pro,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for Tariff {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<Tariff> for String {
    fn from(tariff: Tariff) -> Self {
        tariff.as_str().to_string()
    }
}

impl std::fmt::Display for Tariff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
