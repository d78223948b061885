//! Calculator catalogue

use serde::{Deserialize, Serialize};

use crate::impl_domain_tag_conversions;

/// Calculators offered by the backend under `/calculators/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorId {
    MoneyCode,
    LifeCode,
    DestinyPath,
    BirthDecoding,
    PythagorasSquare,
    Prognosis,
}

impl_domain_tag_conversions!(CalculatorId {
    MoneyCode => "money_code",
    LifeCode => "life_code",
    DestinyPath => "destiny_path",
    BirthDecoding => "birth_decoding",
    PythagorasSquare => "pythagoras_square",
    Prognosis => "prognosis",
});

impl CalculatorId {
    /// Catalogue order as shown in the picker.
    pub const ALL: [CalculatorId; 6] = [
        Self::MoneyCode,
        Self::LifeCode,
        Self::DestinyPath,
        Self::BirthDecoding,
        Self::PythagorasSquare,
        Self::Prognosis,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::MoneyCode => "💰 Денежный код",
            Self::LifeCode => "✨ Жизненный код",
            Self::DestinyPath => "🧭 Путь предназначения",
            Self::BirthDecoding => "📜 Расшифровка даты рождения",
            Self::PythagorasSquare => "🟩 Квадрат Пифагора",
            Self::Prognosis => "📈 Прогностика",
        }
    }

    /// Whether the result text embeds a psychomatrix table.
    pub fn renders_psychomatrix(self) -> bool {
        matches!(self, Self::PythagorasSquare)
    }
}

impl Default for CalculatorId {
    fn default() -> Self {
        Self::MoneyCode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_backend_paths() {
        assert_eq!(CalculatorId::PythagorasSquare.to_string(), "pythagoras_square");
        assert_eq!("destiny_path".parse::<CalculatorId>().unwrap(), CalculatorId::DestinyPath);
        assert_eq!(
            serde_json::to_string(&CalculatorId::BirthDecoding).unwrap(),
            "\"birth_decoding\""
        );
    }

    #[test]
    fn catalogue_starts_with_the_default() {
        assert_eq!(CalculatorId::ALL[0], CalculatorId::default());
        assert!(CalculatorId::ALL.iter().all(|c| !c.title().is_empty()));
    }
}
