//! Neighbour status records carried in anti-entropy snapshots

use serde::{Deserialize, Serialize};
use swim_core::{AccessMode, NodeStatus};
use uuid::Uuid;

/// One peer's known status, as exchanged in an anti-entropy snapshot.
///
/// Unlike events, descriptors travel as keyed records inside the single
/// snapshot slot of an `AntiEntropy` event; they carry no opcode and are
/// never dispatched on their own. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighbourDescriptor {
    /// Neighbour node id
    pub id: Uuid,
    /// Neighbour host
    pub host: String,
    /// Neighbour gossip port
    pub port: u16,
    /// Last known status
    pub status: NodeStatus,
    /// Whether the neighbour is reached directly or through an intermediary
    pub access: AccessMode,
    /// Neighbour's process restart counter
    pub restart_counter: u64,
    /// Neighbour's logical transaction counter
    pub tx: u64,
    /// Opaque application payload, carried uninterpreted
    pub payload: serde_json::Value,
    /// Time of the last update, milliseconds since the epoch
    pub updated_at: u64,
}

impl NeighbourDescriptor {
    /// Create a neighbour descriptor.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        host: impl Into<String>,
        port: u16,
        status: NodeStatus,
        access: AccessMode,
        restart_counter: u64,
        tx: u64,
        payload: serde_json::Value,
        updated_at: u64,
    ) -> Self {
        Self {
            id,
            host: host.into(),
            port,
            status,
            access,
            restart_counter,
            tx,
            payload,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> NeighbourDescriptor {
        NeighbourDescriptor::new(
            Uuid::from_u128(2),
            "127.0.0.1",
            5432,
            NodeStatus::Alive,
            AccessMode::Direct,
            2,
            2,
            json!({}),
            1_661_799_880_969,
        )
    }

    #[test]
    fn test_default_is_zero_valued() {
        let empty = NeighbourDescriptor::default();

        assert_eq!(empty.id, Uuid::nil());
        assert_eq!(empty.host, "");
        assert_eq!(empty.port, 0);
        assert_eq!(empty.status, NodeStatus::Unknown);
        assert_eq!(empty.access, AccessMode::Direct);
        assert_eq!(empty.restart_counter, 0);
        assert_eq!(empty.tx, 0);
        assert_eq!(empty.payload, serde_json::Value::Null);
        assert_eq!(empty.updated_at, 0);
    }

    #[test]
    fn test_keyed_record_round_trip() {
        let descriptor = descriptor();

        let record = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(record["host"], json!("127.0.0.1"));
        assert_eq!(record["status"], json!("Alive"));

        let restored: NeighbourDescriptor = serde_json::from_value(record).unwrap();
        assert_eq!(restored, descriptor);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut record = serde_json::to_value(descriptor()).unwrap();
        record.as_object_mut().unwrap().remove("updated_at");

        assert!(serde_json::from_value::<NeighbourDescriptor>(record).is_err());
    }

    #[test]
    fn test_foreign_status_is_rejected() {
        let mut record = serde_json::to_value(descriptor()).unwrap();
        record["status"] = json!("Flapping");

        assert!(serde_json::from_value::<NeighbourDescriptor>(record).is_err());
    }
}
