use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::error::{ScResult, ScorecardError};
use crate::model::{Criterion, ScorecardModel, PERSPECTIVE_COUNT};
use crate::scale::RatingScale;

/// What to do with a parsed rating that falls outside the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingPolicy {
    /// Clamp to the scale bounds (matches the original select widget, which
    /// could never produce an out-of-range value).
    #[default]
    Clamp,
    /// Reject with `RatingOutOfBounds`.
    Strict,
}

/// Which field of a criterion an update targets.
#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum CriterionField {
    Name,
    Rating,
}

/// Per-perspective average row handed to the summary view and any chart
/// collaborator. `average` is `None` for a criteria-less perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveAverage {
    pub title: String,
    pub average: Option<f64>,
}

/// Single mutable source of truth for one editing session.
///
/// Mutations never touch the current snapshot: each one builds a fresh model
/// and swaps in a new `Arc`, so readers holding a prior snapshot never see a
/// partial update and `Arc::ptr_eq` changes exactly when a mutation succeeds.
pub struct ScorecardStore {
    snapshot: Arc<ScorecardModel>,
    scale: RatingScale,
    policy: RatingPolicy,
    version: u64,
}

impl ScorecardStore {
    pub fn new(main_topic: &str, scale: RatingScale) -> Self {
        Self {
            snapshot: Arc::new(ScorecardModel::new(main_topic, &scale)),
            scale,
            policy: RatingPolicy::default(),
            version: 0,
        }
    }

    /// Builds a store over a model assembled by the caller.
    pub fn from_model(model: ScorecardModel, scale: RatingScale) -> Self {
        Self {
            snapshot: Arc::new(model),
            scale,
            policy: RatingPolicy::default(),
            version: 0,
        }
    }

    pub fn with_policy(mut self, policy: RatingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current model snapshot. Cheap to hand out; stays valid across later
    /// mutations.
    pub fn snapshot(&self) -> Arc<ScorecardModel> {
        Arc::clone(&self.snapshot)
    }

    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    pub fn policy(&self) -> RatingPolicy {
        self.policy
    }

    /// Bumped once per committed mutation; lets the presentation layer poll
    /// for changes without comparing models.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn commit(&mut self, model: ScorecardModel) {
        self.snapshot = Arc::new(model);
        self.version += 1;
    }

    fn check_perspective(&self, index: usize) -> ScResult<()> {
        if index >= PERSPECTIVE_COUNT {
            return Err(ScorecardError::IndexOutOfRange {
                what: "perspective",
                index,
                len: PERSPECTIVE_COUNT,
            });
        }
        Ok(())
    }

    /// Replaces the main topic. No failure modes.
    pub fn set_main_topic(&mut self, topic: &str) {
        let mut model = (*self.snapshot).clone();
        model.main_topic = topic.to_string();
        self.commit(model);
    }

    /// Replaces the title of one perspective, leaving its siblings untouched.
    pub fn set_perspective_title(&mut self, index: usize, title: &str) -> ScResult<()> {
        self.check_perspective(index)?;
        let mut model = (*self.snapshot).clone();
        model.perspectives[index].title = title.to_string();
        self.commit(model);
        Ok(())
    }

    /// Appends a placeholder criterion to one perspective.
    pub fn add_criterion(&mut self, index: usize) -> ScResult<()> {
        self.check_perspective(index)?;
        let mut model = (*self.snapshot).clone();
        model.perspectives[index]
            .criteria
            .push(Criterion::placeholder(&self.scale));
        debug!(
            perspective = index,
            count = model.perspectives[index].criteria.len(),
            "criterion added"
        );
        self.commit(model);
        Ok(())
    }

    /// Updates one field of one criterion. Name is stored as given; rating is
    /// parsed from text and validated against the scale per the policy.
    pub fn set_criterion_field(
        &mut self,
        p_index: usize,
        c_index: usize,
        field: CriterionField,
        value: &str,
    ) -> ScResult<()> {
        self.check_perspective(p_index)?;
        let criteria_len = self.snapshot.perspectives[p_index].criteria.len();
        if c_index >= criteria_len {
            return Err(ScorecardError::IndexOutOfRange {
                what: "criterion",
                index: c_index,
                len: criteria_len,
            });
        }

        let mut model = (*self.snapshot).clone();
        let criterion = &mut model.perspectives[p_index].criteria[c_index];
        match field {
            CriterionField::Name => criterion.name = value.to_string(),
            CriterionField::Rating => criterion.rating = self.parse_rating(value)?,
        }
        self.commit(model);
        Ok(())
    }

    fn parse_rating(&self, value: &str) -> ScResult<f64> {
        let parsed: f64 = value
            .trim()
            .parse()
            .map_err(|_| ScorecardError::InvalidRating {
                value: value.to_string(),
            })?;
        if !parsed.is_finite() {
            return Err(ScorecardError::InvalidRating {
                value: value.to_string(),
            });
        }
        match self.policy {
            RatingPolicy::Clamp => Ok(self.scale.clamp(parsed)),
            RatingPolicy::Strict => {
                if self.scale.contains(parsed) {
                    Ok(parsed)
                } else {
                    Err(ScorecardError::RatingOutOfBounds {
                        value: parsed,
                        min: self.scale.min,
                        max: self.scale.max,
                    })
                }
            }
        }
    }

    /// Per-perspective mean ratings, rounded to two decimals.
    pub fn compute_averages(&self) -> Vec<PerspectiveAverage> {
        self.snapshot
            .perspectives
            .iter()
            .map(|p| {
                let average = if p.criteria.is_empty() {
                    None
                } else {
                    let sum: f64 = p.criteria.iter().map(|c| c.rating).sum();
                    Some(round2(sum / p.criteria.len() as f64))
                };
                PerspectiveAverage {
                    title: p.title.clone(),
                    average,
                }
            })
            .collect()
    }

    /// Single summary indicator: mean of the per-perspective averages that
    /// exist, rounded to two decimals.
    pub fn overall_average(&self) -> Option<f64> {
        let rows = self.compute_averages();
        let known: Vec<f64> = rows.iter().filter_map(|r| r.average).collect();
        if known.is_empty() {
            return None;
        }
        Some(round2(known.iter().sum::<f64>() / known.len() as f64))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
