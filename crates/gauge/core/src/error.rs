//! Errors raised when decoding host data into gauge types.
//!
//! Aggregation itself never fails: missing or zero data degrades to a zero
//! contribution. The only fallible step is translating foreign encodings,
//! such as the host's numeric token dispositions.

/// The host reported a disposition outside the known set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispositionError {
    #[error("unknown token disposition code {0} (expected -2, -1, 0 or 1)")]
    UnknownCode(i64),

    #[error("unknown token disposition {0:?}")]
    UnknownName(String),

    #[error("token disposition is neither a code nor a name")]
    Malformed,
}
