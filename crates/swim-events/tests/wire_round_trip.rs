//! End-to-end exercise of the message layer: typed event -> positional
//! vector -> bytes -> positional vector -> typed event, the way the
//! transport and failure detector drive it.

use serde_json::json;
use swim_events::{
    wire, AccessMode, AckEvent, AliveEvent, AntiEntropy, DeadEvent, Event, EventCodec, EventKind,
    IndirectAckEvent, IndirectPingEvent, JoinEvent, LeftEvent, NeighbourDescriptor,
    NewClusterSizeEvent, NodeStatus, PayloadEvent, PingEvent, ProbeAckEvent, ProbeEvent,
    SuspectEvent, WireValue,
};
use uuid::Uuid;

fn sender() -> Uuid {
    Uuid::from_u128(0xA1)
}

fn neighbour() -> Uuid {
    Uuid::from_u128(0xB2)
}

fn relay() -> Uuid {
    Uuid::from_u128(0xC3)
}

fn one_of_each() -> Vec<Event> {
    vec![
        PingEvent::new(sender(), "10.1.0.1", 5376, 4, 17, neighbour(), 1, 1_700_000_000_000).into(),
        AckEvent::new(neighbour(), 2, 40, sender(), 17, 1).into(),
        JoinEvent::new(sender(), 4, 18, "10.1.0.1", 5376).into(),
        AliveEvent::new(sender(), 4, 19, neighbour(), 2, 40, "10.1.0.2", 5377).into(),
        SuspectEvent::new(sender(), 4, 20, neighbour(), 2, 40).into(),
        LeftEvent::new(neighbour(), 2, 41).into(),
        DeadEvent::new(sender(), 4, 21, neighbour(), 2, 41).into(),
        PayloadEvent::new(sender(), 4, 22, json!({"service": "search", "shards": [0, 3]})).into(),
        AntiEntropy::new(
            sender(),
            4,
            23,
            vec![
                NeighbourDescriptor::new(
                    neighbour(),
                    "10.1.0.2",
                    5377,
                    NodeStatus::Alive,
                    AccessMode::Direct,
                    2,
                    41,
                    json!({"zone": "eu-1"}),
                    1_700_000_000_100,
                ),
                NeighbourDescriptor::new(
                    relay(),
                    "10.1.0.3",
                    5378,
                    NodeStatus::Suspect,
                    AccessMode::Indirect,
                    9,
                    5,
                    json!(null),
                    1_700_000_000_200,
                ),
            ],
        )
        .into(),
        ProbeEvent::new(sender(), "10.1.0.1", 5376, 4, 24, "10.1.0.9", 5380, Uuid::from_u128(7))
            .into(),
        ProbeAckEvent::new(
            relay(),
            "10.1.0.9",
            5380,
            NodeStatus::Alive,
            1,
            3,
            sender(),
            Uuid::from_u128(7),
        )
        .into(),
        NewClusterSizeEvent::new(sender(), 4, 25, 3, 4).into(),
        IndirectPingEvent::new(
            sender(),
            "10.1.0.1",
            5376,
            4,
            26,
            relay(),
            "10.1.0.3",
            5378,
            neighbour(),
            "10.1.0.2",
            5377,
            2,
            1_700_000_000_300,
        )
        .into(),
        IndirectAckEvent::new(
            neighbour(),
            "10.1.0.2",
            5377,
            2,
            42,
            NodeStatus::Alive,
            relay(),
            "10.1.0.3",
            5378,
            sender(),
            "10.1.0.1",
            5376,
            2,
        )
        .into(),
    ]
}

#[test]
fn every_variant_survives_the_full_pipeline() {
    for event in one_of_each() {
        let bytes = wire::encode(&event.prepare()).unwrap();
        let seq = wire::decode(&bytes).unwrap();
        let restored = Event::restore(&seq).unwrap();

        assert_eq!(restored, event);
    }
}

#[test]
fn inbound_dispatch_follows_the_leading_opcode() {
    // The transport's receive path: decode bytes, peek the opcode through
    // the registry, then restore the matching variant.
    let ping = PingEvent::new(sender(), "10.1.0.1", 5376, 4, 17, neighbour(), 1, 2);
    let bytes = wire::encode(&ping.prepare()).unwrap();

    let seq = wire::decode(&bytes).unwrap();
    let code = seq[0].as_uint().unwrap();
    assert_eq!(EventKind::from_code(code), Some(EventKind::Ping));

    let restored = PingEvent::restore(&seq).unwrap();
    assert_eq!(restored, ping);
}

#[test]
fn truncated_vector_is_rejected_after_decode() {
    let ack = AckEvent::new(sender(), 4, 17, neighbour(), 3, 1);
    let mut seq = ack.prepare();
    seq.truncate(5);

    let bytes = wire::encode(&seq).unwrap();
    let decoded = wire::decode(&bytes).unwrap();

    let err = AckEvent::restore(&decoded).unwrap_err();
    assert_eq!(err.to_string(), "AckEvent vector has invalid structure");
}

#[test]
fn foreign_opcode_is_rejected_for_every_variant() {
    // Restoring a variant from a vector whose leading opcode belongs to
    // any other kind must fail with that variant's own name, however
    // plausible the rest of the vector looks.
    for event in one_of_each() {
        let seq = event.prepare();

        for kind in EventKind::ALL {
            if kind == event.kind() {
                continue;
            }
            let mut reopened = seq.clone();
            reopened[0] = WireValue::Uint(kind.code());

            let err = restore_as(event.kind(), &reopened).unwrap_err();
            assert!(err.to_string().contains(event.kind().type_name()));
        }
    }
}

fn restore_as(kind: EventKind, seq: &[WireValue]) -> swim_events::Result<Event> {
    Ok(match kind {
        EventKind::Ping => PingEvent::restore(seq)?.into(),
        EventKind::Ack => AckEvent::restore(seq)?.into(),
        EventKind::Join => JoinEvent::restore(seq)?.into(),
        EventKind::Alive => AliveEvent::restore(seq)?.into(),
        EventKind::Suspect => SuspectEvent::restore(seq)?.into(),
        EventKind::Left => LeftEvent::restore(seq)?.into(),
        EventKind::Dead => DeadEvent::restore(seq)?.into(),
        EventKind::Payload => PayloadEvent::restore(seq)?.into(),
        EventKind::AntiEntropy => AntiEntropy::restore(seq)?.into(),
        EventKind::Probe => ProbeEvent::restore(seq)?.into(),
        EventKind::ProbeAck => ProbeAckEvent::restore(seq)?.into(),
        EventKind::NewClusterSize => NewClusterSizeEvent::restore(seq)?.into(),
        EventKind::IndirectPing => IndirectPingEvent::restore(seq)?.into(),
        EventKind::IndirectAck => IndirectAckEvent::restore(seq)?.into(),
    })
}
