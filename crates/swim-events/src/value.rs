//! Typed slots of the positional wire form
//!
//! `prepare` lays an event out as a flat `Vec<WireValue>` with the opcode
//! in slot zero; `restore` rebuilds the event from the same layout. How a
//! slot vector becomes bytes is delegated to a generic tagged serializer
//! (see [`crate::wire`] for the default one).

use crate::neighbour::NeighbourDescriptor;
use serde::{Deserialize, Serialize};
use swim_core::NodeStatus;
use uuid::Uuid;

/// One slot of an event's positional wire vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WireValue {
    /// Unsigned integer slot: opcodes, counters, ports, sizes, timestamps
    Uint(u64),
    /// String slot: hosts (IP literal or hostname)
    Str(String),
    /// UUID slot: node identifiers and probe keys
    Uuid(Uuid),
    /// Node status slot
    Status(NodeStatus),
    /// Opaque application payload slot, carried uninterpreted
    Payload(serde_json::Value),
    /// Anti-entropy snapshot slot: a sequence of neighbour records
    Neighbours(Vec<NeighbourDescriptor>),
}

impl WireValue {
    /// The integer held by this slot, if it is an integer slot.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            WireValue::Uint(n) => Some(*n),
            _ => None,
        }
    }

    /// The string held by this slot, if it is a string slot.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The UUID held by this slot, if it is a UUID slot.
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            WireValue::Uuid(id) => Some(*id),
            _ => None,
        }
    }

    /// The node status held by this slot, if it is a status slot.
    pub fn as_status(&self) -> Option<NodeStatus> {
        match self {
            WireValue::Status(status) => Some(*status),
            _ => None,
        }
    }

    /// The payload held by this slot, if it is a payload slot.
    pub fn as_payload(&self) -> Option<&serde_json::Value> {
        match self {
            WireValue::Payload(value) => Some(value),
            _ => None,
        }
    }

    /// The neighbour records held by this slot, if it is a snapshot slot.
    pub fn as_neighbours(&self) -> Option<&[NeighbourDescriptor]> {
        match self {
            WireValue::Neighbours(neighbours) => Some(neighbours),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variants() {
        assert_eq!(WireValue::Uint(42).as_uint(), Some(42));
        assert_eq!(WireValue::Str("host".into()).as_str(), Some("host"));
        assert_eq!(WireValue::Uuid(Uuid::nil()).as_uuid(), Some(Uuid::nil()));
        assert_eq!(
            WireValue::Status(NodeStatus::Alive).as_status(),
            Some(NodeStatus::Alive)
        );
    }

    #[test]
    fn test_accessors_reject_foreign_variants() {
        assert_eq!(WireValue::Str("42".into()).as_uint(), None);
        assert_eq!(WireValue::Uint(0).as_uuid(), None);
        assert_eq!(WireValue::Uint(0).as_status(), None);
        assert_eq!(WireValue::Uint(0).as_payload(), None);
        assert_eq!(WireValue::Uint(0).as_neighbours(), None);
    }
}
