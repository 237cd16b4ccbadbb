//! Byte serialization bridge for prepared event vectors
//!
//! The codec stops at the positional [`WireValue`] form; turning that
//! form into bytes is delegated to a generic tagged serializer. This
//! module provides the default bridge used by the transport. The payload
//! slots carry arbitrary structured values, so the encoding must be
//! self-describing; JSON satisfies that and round-trips UUIDs, strings,
//! nested records, and status keywords exactly.

use crate::value::WireValue;

/// Serialize a prepared event vector to bytes.
pub fn encode(seq: &[WireValue]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(seq)
}

/// Deserialize bytes back into an event vector.
pub fn decode(bytes: &[u8]) -> Result<Vec<WireValue>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::EventCodec;
    use crate::event::{AntiEntropy, PingEvent};
    use crate::neighbour::NeighbourDescriptor;
    use serde_json::json;
    use swim_core::{AccessMode, NodeStatus};
    use uuid::Uuid;

    #[test]
    fn test_vector_survives_byte_round_trip() {
        let ping = PingEvent::new(
            Uuid::from_u128(1),
            "127.0.0.1",
            5376,
            7,
            0,
            Uuid::from_u128(2),
            42,
            1,
        );

        let bytes = encode(&ping.prepare()).unwrap();
        let seq = decode(&bytes).unwrap();

        assert_eq!(PingEvent::restore(&seq).unwrap(), ping);
    }

    #[test]
    fn test_snapshot_survives_byte_round_trip() {
        let snapshot = AntiEntropy::new(
            Uuid::from_u128(1),
            1,
            2,
            vec![NeighbourDescriptor::new(
                Uuid::from_u128(2),
                "127.0.0.1",
                5432,
                NodeStatus::Alive,
                AccessMode::Indirect,
                2,
                2,
                json!({"weights": [0.5, 0.25]}),
                1_661_799_880_969,
            )],
        );

        let bytes = encode(&snapshot.prepare()).unwrap();
        let seq = decode(&bytes).unwrap();

        assert_eq!(AntiEntropy::restore(&seq).unwrap(), snapshot);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        assert!(decode(b"\x00\x01\x02").is_err());
        assert!(decode(b"{\"not\": \"a vector\"}").is_err());
    }
}
