use thiserror::Error;

/// Failures detected before a statement ever reaches the database.
///
/// Database execution errors are not wrapped; they propagate unmodified
/// through `anyhow`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiloError {
    #[error("entity `{table}` has no mapped columns")]
    NoColumns { table: &'static str },

    #[error("entity `{table}` has no primary key column")]
    NoPrimaryKey { table: &'static str },

    #[error("entity `{table}` has {count} primary key columns, expected exactly one")]
    AmbiguousPrimaryKey { table: &'static str, count: usize },

    #[error("entity `{table}` has no non-key columns to update")]
    NothingToUpdate { table: &'static str },

    #[error("missing required configuration key `{0}`")]
    MissingConfigKey(&'static str),
}
