use thiserror::Error;

/// A student record that cannot be turned into a merit score.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DataError {
    /// No recorded grade falls in a period with a non-zero weight, so the
    /// weighted average has an empty denominator.
    #[error("cannot score student {student}: no grade recorded in any weighted period")]
    UnscorableStudent { student: String },
}

/// An invalid track table or wish reference, rejected before any seat is taken.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown track {track:?} in the wish list of student {student}")]
    UnknownTrack { student: String, track: String },
    #[error("track {track:?} has a negative capacity ({capacity})")]
    NegativeCapacity { track: String, capacity: i64 },
}

/// Any failure of the scoring and allocation pipeline.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
