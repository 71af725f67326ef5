use std::sync::Arc;

use tracing::warn;

use crate::error::ScResult;
use crate::model::ScorecardModel;
use crate::nav::{NavigationController, NavigationState};
use crate::scale::RatingScale;
use crate::store::{CriterionField, PerspectiveAverage, RatingPolicy, ScorecardStore};

/// One editing session: the store plus its navigation state, behind a single
/// surface for the presentation layer.
///
/// Rejected operations are logged and returned as `Err`; nothing panics
/// across the session boundary, and the model keeps its last valid snapshot.
pub struct ScorecardSession {
    store: ScorecardStore,
    nav: NavigationController,
}

impl ScorecardSession {
    pub fn new(main_topic: &str, scale: RatingScale) -> Self {
        Self {
            store: ScorecardStore::new(main_topic, scale),
            nav: NavigationController::new(),
        }
    }

    pub fn with_policy(mut self, policy: RatingPolicy) -> Self {
        self.store = self.store.with_policy(policy);
        self
    }

    // --- Read accessors ---

    pub fn model(&self) -> Arc<ScorecardModel> {
        self.store.snapshot()
    }

    pub fn scale(&self) -> RatingScale {
        self.store.scale()
    }

    pub fn version(&self) -> u64 {
        self.store.version()
    }

    pub fn nav_state(&self) -> NavigationState {
        self.nav.state()
    }

    pub fn edit_mode(&self) -> bool {
        self.nav.edit_mode()
    }

    pub fn averages(&self) -> Vec<PerspectiveAverage> {
        self.store.compute_averages()
    }

    pub fn overall_average(&self) -> Option<f64> {
        self.store.overall_average()
    }

    /// Average rows serialized for an external chart collaborator, which is
    /// handed this instead of the model.
    pub fn averages_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.store.compute_averages())
    }

    // --- Store entry points ---

    pub fn set_main_topic(&mut self, topic: &str) {
        self.store.set_main_topic(topic);
    }

    pub fn set_perspective_title(&mut self, index: usize, title: &str) -> ScResult<()> {
        self.store
            .set_perspective_title(index, title)
            .inspect_err(|e| warn!("title update rejected: {e}"))
    }

    pub fn add_criterion(&mut self, index: usize) -> ScResult<()> {
        self.store
            .add_criterion(index)
            .inspect_err(|e| warn!("criterion insert rejected: {e}"))
    }

    pub fn set_criterion_field(
        &mut self,
        p_index: usize,
        c_index: usize,
        field: CriterionField,
        value: &str,
    ) -> ScResult<()> {
        self.store
            .set_criterion_field(p_index, c_index, field, value)
            .inspect_err(|e| warn!("criterion update rejected: {e}"))
    }

    // --- Navigation entry points ---

    pub fn open_detail(&mut self, index: usize) -> ScResult<()> {
        self.nav
            .open_detail(index)
            .inspect_err(|e| warn!("detail selection rejected: {e}"))
    }

    pub fn open_summary(&mut self) {
        self.nav.open_summary();
    }

    pub fn back(&mut self) {
        self.nav.back();
    }

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.nav.toggle_edit_mode()
    }
}
