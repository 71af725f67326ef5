use std::sync::Arc;

use rstest::rstest;
use scorecard::error::ScorecardError;
use scorecard::scale::RatingScale;
use scorecard::store::{CriterionField, RatingPolicy, ScorecardStore};

fn ordinal_store() -> ScorecardStore {
    ScorecardStore::new("Strategy", RatingScale::ORDINAL)
}

#[test]
fn initial_model_shape() {
    let store = ordinal_store();
    let model = store.snapshot();

    assert_eq!(model.main_topic, "Strategy");
    assert_eq!(model.perspectives.len(), 4);
    for p in &model.perspectives {
        assert_eq!(p.criteria.len(), 1);
        assert_eq!(p.criteria[0].name, "");
        assert_eq!(p.criteria[0].rating, 3.0);
    }
}

#[test]
fn title_update_leaves_siblings_alone() {
    let mut store = ordinal_store();
    let before = store.snapshot();

    store.set_perspective_title(1, "Finance").unwrap();

    let after = store.snapshot();
    assert_eq!(after.perspectives[1].title, "Finance");
    for i in [0, 2, 3] {
        assert_eq!(after.perspectives[i].title, before.perspectives[i].title);
    }
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(store.version(), 1);
}

#[test]
fn topic_update_is_unconditional() {
    let mut store = ordinal_store();
    store.set_main_topic("");
    assert_eq!(store.snapshot().main_topic, "");
    assert_eq!(store.version(), 1);
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(usize::MAX)]
fn out_of_range_perspective_rejects_every_operation(#[case] index: usize) {
    let mut store = ordinal_store();
    let before = store.snapshot();

    assert!(matches!(
        store.set_perspective_title(index, "x").unwrap_err(),
        ScorecardError::IndexOutOfRange { .. }
    ));
    assert!(matches!(
        store.add_criterion(index).unwrap_err(),
        ScorecardError::IndexOutOfRange { .. }
    ));
    assert!(matches!(
        store
            .set_criterion_field(index, 0, CriterionField::Name, "x")
            .unwrap_err(),
        ScorecardError::IndexOutOfRange { .. }
    ));

    // Failed operations never commit: the snapshot is the same allocation.
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.version(), 0);
}

#[test]
fn add_criterion_grows_only_the_target() {
    let mut store = ordinal_store();
    store.add_criterion(2).unwrap();

    let model = store.snapshot();
    assert_eq!(model.perspectives[2].criteria.len(), 2);
    for i in [0, 1, 3] {
        assert_eq!(model.perspectives[i].criteria.len(), 1);
    }
}

#[test]
fn new_criterion_defaults_to_scale_midpoint() {
    let mut store = ScorecardStore::new("t", RatingScale::PERCENT);
    store.add_criterion(0).unwrap();

    let model = store.snapshot();
    assert_eq!(model.perspectives[0].criteria[1].rating, 50.0);
    assert_eq!(model.perspectives[0].criteria[1].name, "");
}

#[test]
fn criterion_name_is_stored_verbatim() {
    let mut store = ordinal_store();
    store
        .set_criterion_field(0, 0, CriterionField::Name, "  Liquidity  ")
        .unwrap();
    assert_eq!(store.snapshot().perspectives[0].criteria[0].name, "  Liquidity  ");
}

#[test]
fn criterion_rating_parses_from_text() {
    let mut store = ordinal_store();
    store
        .set_criterion_field(3, 0, CriterionField::Rating, "4")
        .unwrap();
    assert_eq!(store.snapshot().perspectives[3].criteria[0].rating, 4.0);
}

#[test]
fn non_numeric_rating_keeps_the_prior_value() {
    let mut store = ordinal_store();
    store
        .set_criterion_field(0, 0, CriterionField::Rating, "4")
        .unwrap();
    let before = store.snapshot();

    let err = store
        .set_criterion_field(0, 0, CriterionField::Rating, "four")
        .unwrap_err();
    assert!(matches!(err, ScorecardError::InvalidRating { .. }));
    assert_eq!(store.snapshot().perspectives[0].criteria[0].rating, 4.0);
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[rstest]
#[case("NaN")]
#[case("inf")]
#[case("-inf")]
fn non_finite_ratings_are_invalid(#[case] value: &str) {
    let mut store = ordinal_store();
    assert!(matches!(
        store
            .set_criterion_field(0, 0, CriterionField::Rating, value)
            .unwrap_err(),
        ScorecardError::InvalidRating { .. }
    ));
}

#[test]
fn criterion_index_out_of_range_names_the_criterion() {
    let mut store = ordinal_store();
    let err = store
        .set_criterion_field(0, 5, CriterionField::Name, "x")
        .unwrap_err();
    assert_eq!(
        err,
        ScorecardError::IndexOutOfRange {
            what: "criterion",
            index: 5,
            len: 1
        }
    );
}

#[test]
fn clamp_policy_pulls_ratings_into_bounds() {
    let mut store = ordinal_store();
    store
        .set_criterion_field(0, 0, CriterionField::Rating, "9")
        .unwrap();
    assert_eq!(store.snapshot().perspectives[0].criteria[0].rating, 5.0);

    store
        .set_criterion_field(0, 0, CriterionField::Rating, "-2")
        .unwrap();
    assert_eq!(store.snapshot().perspectives[0].criteria[0].rating, 1.0);
}

#[test]
fn strict_policy_rejects_out_of_bounds_ratings() {
    let mut store = ordinal_store().with_policy(RatingPolicy::Strict);
    let before = store.snapshot();

    let err = store
        .set_criterion_field(0, 0, CriterionField::Rating, "9")
        .unwrap_err();
    assert_eq!(
        err,
        ScorecardError::RatingOutOfBounds {
            value: 9.0,
            min: 1.0,
            max: 5.0
        }
    );
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn snapshots_outlive_later_mutations() {
    let mut store = ordinal_store();
    let old = store.snapshot();

    store.set_perspective_title(0, "Customers").unwrap();
    store.add_criterion(0).unwrap();

    // The old snapshot still shows the pre-mutation state.
    assert_eq!(old.perspectives[0].title, "Perspective 1");
    assert_eq!(old.perspectives[0].criteria.len(), 1);
}
