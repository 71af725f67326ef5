use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Numeric range and granularity criteria are scored on.
///
/// The scale is an explicit configuration value carried alongside the model,
/// so the ordinal and percentage variants share one component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RatingScale {
    /// Ordinal 1-5 scale (the original scorecard variant).
    pub const ORDINAL: RatingScale = RatingScale {
        min: 1.0,
        max: 5.0,
        step: 1.0,
    };

    /// Percentage 0-100 scale.
    pub const PERCENT: RatingScale = RatingScale {
        min: 0.0,
        max: 100.0,
        step: 1.0,
    };

    /// Default rating for a freshly added criterion.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::ORDINAL
    }
}

/// Named scale variants selectable from the CLI.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ScaleKind {
    Ordinal,
    Percent,
}

impl ScaleKind {
    pub fn scale(&self) -> RatingScale {
        match self {
            Self::Ordinal => RatingScale::ORDINAL,
            Self::Percent => RatingScale::PERCENT,
        }
    }
}
