//! Command registry mapping symbolic event kinds to wire opcodes
//!
//! The mapping is fixed at compile time and never extended at runtime.
//! Opcodes 11 and 12 are reserved and must not be reused for new kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic kind of a protocol event.
///
/// The set is closed: every kind a peer can put on the wire has a variant
/// here, and every variant has exactly one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Direct probe of a neighbour
    Ping,
    /// Answer to a direct probe
    Ack,
    /// Request to join the cluster
    Join,
    /// Refutation of suspicion: the named neighbour is alive
    Alive,
    /// Suspicion announcement for a neighbour
    Suspect,
    /// Graceful departure notice
    Left,
    /// Death announcement for a neighbour
    Dead,
    /// Application payload dissemination
    Payload,
    /// Full neighbour-status snapshot exchange
    AntiEntropy,
    /// Pre-join reachability probe
    Probe,
    /// Answer to a reachability probe
    ProbeAck,
    /// Cluster size change announcement
    NewClusterSize,
    /// Probe relayed through an intermediary
    IndirectPing,
    /// Answer to a relayed probe
    IndirectAck,
}

impl EventKind {
    /// Every known kind, in opcode order.
    pub const ALL: [EventKind; 14] = [
        EventKind::Ping,
        EventKind::Ack,
        EventKind::Join,
        EventKind::Alive,
        EventKind::Suspect,
        EventKind::Left,
        EventKind::Dead,
        EventKind::Payload,
        EventKind::AntiEntropy,
        EventKind::Probe,
        EventKind::ProbeAck,
        EventKind::NewClusterSize,
        EventKind::IndirectPing,
        EventKind::IndirectAck,
    ];

    /// Wire opcode for this kind.
    pub const fn code(self) -> u64 {
        match self {
            EventKind::Ping => 0,
            EventKind::Ack => 1,
            EventKind::Join => 2,
            EventKind::Alive => 3,
            EventKind::Suspect => 4,
            EventKind::Left => 5,
            EventKind::Dead => 6,
            EventKind::Payload => 7,
            EventKind::AntiEntropy => 8,
            EventKind::Probe => 9,
            EventKind::ProbeAck => 10,
            EventKind::NewClusterSize => 13,
            EventKind::IndirectPing => 14,
            EventKind::IndirectAck => 15,
        }
    }

    /// Kind carrying the given wire opcode, `None` for unknown or
    /// reserved codes.
    pub const fn from_code(code: u64) -> Option<EventKind> {
        match code {
            0 => Some(EventKind::Ping),
            1 => Some(EventKind::Ack),
            2 => Some(EventKind::Join),
            3 => Some(EventKind::Alive),
            4 => Some(EventKind::Suspect),
            5 => Some(EventKind::Left),
            6 => Some(EventKind::Dead),
            7 => Some(EventKind::Payload),
            8 => Some(EventKind::AntiEntropy),
            9 => Some(EventKind::Probe),
            10 => Some(EventKind::ProbeAck),
            13 => Some(EventKind::NewClusterSize),
            14 => Some(EventKind::IndirectPing),
            15 => Some(EventKind::IndirectAck),
            _ => None,
        }
    }

    /// Variant name used in decode error messages.
    pub const fn type_name(self) -> &'static str {
        match self {
            EventKind::Ping => "PingEvent",
            EventKind::Ack => "AckEvent",
            EventKind::Join => "JoinEvent",
            EventKind::Alive => "AliveEvent",
            EventKind::Suspect => "SuspectEvent",
            EventKind::Left => "LeftEvent",
            EventKind::Dead => "DeadEvent",
            EventKind::Payload => "PayloadEvent",
            EventKind::AntiEntropy => "AntiEntropy",
            EventKind::Probe => "ProbeEvent",
            EventKind::ProbeAck => "ProbeAckEvent",
            EventKind::NewClusterSize => "NewClusterSizeEvent",
            EventKind::IndirectPing => "IndirectPingEvent",
            EventKind::IndirectAck => "IndirectAckEvent",
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ping" => Ok(EventKind::Ping),
            "ack" => Ok(EventKind::Ack),
            "join" => Ok(EventKind::Join),
            "alive" => Ok(EventKind::Alive),
            "suspect" => Ok(EventKind::Suspect),
            "left" => Ok(EventKind::Left),
            "dead" => Ok(EventKind::Dead),
            "payload" => Ok(EventKind::Payload),
            "anti-entropy" => Ok(EventKind::AntiEntropy),
            "probe" => Ok(EventKind::Probe),
            "probe-ack" => Ok(EventKind::ProbeAck),
            "new-cluster-size" => Ok(EventKind::NewClusterSize),
            "indirect-ping" => Ok(EventKind::IndirectPing),
            "indirect-ack" => Ok(EventKind::IndirectAck),
            _ => Err(format!("Unknown event kind: {}", s)),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Ping => "ping",
            EventKind::Ack => "ack",
            EventKind::Join => "join",
            EventKind::Alive => "alive",
            EventKind::Suspect => "suspect",
            EventKind::Left => "left",
            EventKind::Dead => "dead",
            EventKind::Payload => "payload",
            EventKind::AntiEntropy => "anti-entropy",
            EventKind::Probe => "probe",
            EventKind::ProbeAck => "probe-ack",
            EventKind::NewClusterSize => "new-cluster-size",
            EventKind::IndirectPing => "indirect-ping",
            EventKind::IndirectAck => "indirect-ack",
        };
        write!(f, "{}", name)
    }
}
