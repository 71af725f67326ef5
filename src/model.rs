use serde::{Deserialize, Serialize};

use crate::scale::RatingScale;

/// The perspective count is fixed for the lifetime of a model.
pub const PERSPECTIVE_COUNT: usize = 4;

/// A single named, rated sub-item within a perspective.
///
/// The name may be empty; the rating always sits within the configured
/// scale bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub rating: f64,
}

impl Criterion {
    /// Placeholder criterion: empty name, scale midpoint rating.
    pub fn placeholder(scale: &RatingScale) -> Self {
        Self {
            name: String::new(),
            rating: scale.midpoint(),
        }
    }
}

/// One of the four fixed viewpoints being scored.
///
/// `criteria` starts with exactly one placeholder and never empties; order
/// is insertion order and meaningful only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perspective {
    pub title: String,
    pub criteria: Vec<Criterion>,
}

impl Perspective {
    pub fn new(title: impl Into<String>, scale: &RatingScale) -> Self {
        Self {
            title: title.into(),
            criteria: vec![Criterion::placeholder(scale)],
        }
    }
}

/// The whole scorecard: one main topic, exactly four perspectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardModel {
    pub main_topic: String,
    pub perspectives: [Perspective; PERSPECTIVE_COUNT],
}

impl ScorecardModel {
    pub fn new(main_topic: impl Into<String>, scale: &RatingScale) -> Self {
        Self {
            main_topic: main_topic.into(),
            perspectives: std::array::from_fn(|i| {
                Perspective::new(format!("Perspective {}", i + 1), scale)
            }),
        }
    }
}
