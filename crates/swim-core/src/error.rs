//! Error handling for the swimmesh message layer
//!
//! The wire codec has a single failure mode: an inbound event vector whose
//! shape does not match the variant it is decoded against. The error
//! message carries the variant name and is part of the wire-debugging
//! contract, so peers running different builds produce comparable logs.

/// Result type alias for message layer operations
pub type Result<T> = std::result::Result<T, StructureError>;

/// An inbound event vector does not have the shape of its target variant.
///
/// Raised when the vector's length or leading opcode differs from what the
/// target variant declares, or when a slot holds a value of the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{event} vector has invalid structure")]
pub struct StructureError {
    event: &'static str,
}

impl StructureError {
    /// Create a structure error scoped to the named event variant.
    pub fn new(event: &'static str) -> Self {
        Self { event }
    }

    /// Name of the variant the offending vector was decoded against.
    pub fn event(&self) -> &'static str {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_carries_variant_name() {
        let err = StructureError::new("PingEvent");
        assert_eq!(err.to_string(), "PingEvent vector has invalid structure");
        assert_eq!(err.event(), "PingEvent");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(StructureError::new("AckEvent"), StructureError::new("AckEvent"));
        assert_ne!(StructureError::new("AckEvent"), StructureError::new("PingEvent"));
    }
}
