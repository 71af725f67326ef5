use scorecard::model::{Perspective, ScorecardModel};
use scorecard::scale::RatingScale;
use scorecard::store::{CriterionField, ScorecardStore};

/// Sets the ratings of one perspective, growing its criteria list as needed.
fn fill_ratings(store: &mut ScorecardStore, p_index: usize, ratings: &[f64]) {
    for (c_index, rating) in ratings.iter().enumerate() {
        if c_index > 0 {
            store.add_criterion(p_index).unwrap();
        }
        store
            .set_criterion_field(p_index, c_index, CriterionField::Rating, &rating.to_string())
            .unwrap();
    }
}

#[test]
fn ordinal_threes_average_to_three() {
    let mut store = ScorecardStore::new("t", RatingScale::ORDINAL);
    fill_ratings(&mut store, 0, &[3.0, 3.0, 3.0]);

    let rows = store.compute_averages();
    assert_eq!(rows[0].average, Some(3.0));
}

#[test]
fn percent_ratings_average_to_sixty_five() {
    let mut store = ScorecardStore::new("t", RatingScale::PERCENT);
    fill_ratings(&mut store, 1, &[50.0, 60.0, 70.0, 80.0]);

    let rows = store.compute_averages();
    assert_eq!(rows[1].average, Some(65.0));
}

#[test]
fn averages_round_to_two_decimals() {
    let mut store = ScorecardStore::new("t", RatingScale::ORDINAL);
    fill_ratings(&mut store, 0, &[2.0, 3.0, 3.0]); // 8/3 = 2.666...

    let rows = store.compute_averages();
    assert_eq!(rows[0].average, Some(2.67));
}

#[test]
fn rows_carry_the_perspective_titles() {
    let mut store = ScorecardStore::new("t", RatingScale::ORDINAL);
    store.set_perspective_title(2, "Processes").unwrap();

    let rows = store.compute_averages();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2].title, "Processes");
}

#[test]
fn overall_is_the_mean_of_perspective_averages() {
    let mut store = ScorecardStore::new("t", RatingScale::PERCENT);
    for (i, rating) in [50.0, 60.0, 70.0, 80.0].iter().enumerate() {
        fill_ratings(&mut store, i, &[*rating]);
    }

    assert_eq!(store.overall_average(), Some(65.0));
}

#[test]
fn empty_criteria_yield_the_no_data_sentinel() {
    // The store never empties a criteria list itself, but the query must not
    // divide by zero if handed such a model.
    let scale = RatingScale::PERCENT;
    let mut model = ScorecardModel::new("t", &scale);
    model.perspectives[3] = Perspective {
        title: "Hollow".to_string(),
        criteria: Vec::new(),
    };
    let store = ScorecardStore::from_model(model, scale);

    let rows = store.compute_averages();
    assert_eq!(rows[3].average, None);
    // The aggregate skips missing rows instead of poisoning the mean.
    assert_eq!(store.overall_average(), Some(50.0));
}

#[test]
fn all_empty_yields_no_overall() {
    let scale = RatingScale::ORDINAL;
    let mut model = ScorecardModel::new("t", &scale);
    for p in model.perspectives.iter_mut() {
        p.criteria.clear();
    }
    let store = ScorecardStore::from_model(model, scale);

    assert!(store.compute_averages().iter().all(|r| r.average.is_none()));
    assert_eq!(store.overall_average(), None);
}
