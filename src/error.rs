use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorecardError {
    #[error("Index Error: {what} index {index} is outside 0..{len}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Rating Error: '{value}' is not a finite number")]
    InvalidRating { value: String },

    #[error("Rating Error: {value} is outside the scale {min}..={max}")]
    RatingOutOfBounds { value: f64, min: f64, max: f64 },
}

pub type ScResult<T> = Result<T, ScorecardError>;
