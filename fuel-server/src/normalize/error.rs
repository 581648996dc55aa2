//! Normalizer error types.

/// The upstream body had the wrong overall shape for its resource.
///
/// Individual fields never produce this; they degrade to absent instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Expected a JSON object at the top level
    #[error("{resource}: expected a JSON object")]
    NotAnObject { resource: &'static str },

    /// Expected a JSON array at the top level
    #[error("{resource}: expected a JSON array")]
    NotAnArray { resource: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NormalizeError::NotAnObject {
            resource: "station details",
        };
        assert_eq!(err.to_string(), "station details: expected a JSON object");

        let err = NormalizeError::NotAnArray {
            resource: "radius search",
        };
        assert_eq!(err.to_string(), "radius search: expected a JSON array");
    }
}
