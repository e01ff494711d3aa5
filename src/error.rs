/// Result type alias for fallible sequence operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the sequence operations.
///
/// Nothing in this crate catches these: they are returned to the caller of `apply`, of the
/// immediate function or of the pipe expression that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sequence is single-pass or has no known length, so it can not be walked backwards
    #[error("'{kind}' object is not reversible")]
    NotReversible { kind: &'static str },

    /// A reduction without an initial value was applied to an empty sequence
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduction,
}

impl Error {
    pub(crate) fn not_reversible(kind: &'static str) -> Self {
        log::debug!("rejecting '{kind}' sequence: not reversible");
        Self::NotReversible { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_reversible_names_the_sequence_kind() {
        let err = Error::not_reversible("map");

        assert_eq!(err, Error::NotReversible { kind: "map" });
        assert_eq!(err.to_string(), "'map' object is not reversible");
    }

    #[test]
    fn empty_reduction_message() {
        assert_eq!(
            Error::EmptyReduction.to_string(),
            "reduce of empty sequence with no initial value"
        );
    }
}
