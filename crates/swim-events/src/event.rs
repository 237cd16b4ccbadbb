//! Protocol event types
//!
//! One immutable record per protocol message kind. Every event carries the
//! sender's `id`, its `restart_counter` (bumped each process restart, so
//! peers can tell a live node from a crashed one reusing its identity) and
//! its `tx` (monotonic logical counter, so peers can discard stale or
//! duplicate messages).
//!
//! The `Default` value of each type is its canonical zero value: nil
//! UUIDs, empty strings, zero counters, `Unknown` status, empty snapshot.

use crate::neighbour::NeighbourDescriptor;
use crate::registry::EventKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use swim_core::NodeStatus;

/// Direct probe of a neighbour, answered by an [`AckEvent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PingEvent {
    /// Sender node id
    pub id: Uuid,
    /// Sender host
    pub host: String,
    /// Sender gossip port
    pub port: u16,
    /// Sender restart counter
    pub restart_counter: u64,
    /// Sender transaction counter
    pub tx: u64,
    /// Node being probed
    pub neighbour_id: Uuid,
    /// Probe attempt number within the current round
    pub attempt_number: u64,
    /// Send time, milliseconds since the epoch
    pub ts: u64,
}

impl PingEvent {
    /// Create a ping addressed to `neighbour_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        host: impl Into<String>,
        port: u16,
        restart_counter: u64,
        tx: u64,
        neighbour_id: Uuid,
        attempt_number: u64,
        ts: u64,
    ) -> Self {
        Self {
            id,
            host: host.into(),
            port,
            restart_counter,
            tx,
            neighbour_id,
            attempt_number,
            ts,
        }
    }
}

/// Answer to a [`PingEvent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AckEvent {
    /// Sender node id
    pub id: Uuid,
    /// Sender restart counter
    pub restart_counter: u64,
    /// Sender transaction counter
    pub tx: u64,
    /// Node whose ping is being answered
    pub neighbour_id: Uuid,
    /// Transaction counter of the ping being answered
    pub neighbour_tx: u64,
    /// Attempt number of the ping being answered
    pub attempt_number: u64,
}

impl AckEvent {
    /// Create an ack for the ping identified by `neighbour_tx`.
    pub fn new(
        id: Uuid,
        restart_counter: u64,
        tx: u64,
        neighbour_id: Uuid,
        neighbour_tx: u64,
        attempt_number: u64,
    ) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            neighbour_id,
            neighbour_tx,
            attempt_number,
        }
    }
}

/// Request to join the cluster, announcing the sender's address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinEvent {
    /// Sender node id
    pub id: Uuid,
    /// Sender restart counter
    pub restart_counter: u64,
    /// Sender transaction counter
    pub tx: u64,
    /// Host the sender gossips on
    pub host: String,
    /// Port the sender gossips on
    pub port: u16,
}

impl JoinEvent {
    /// Create a join announcement for the sender's gossip address.
    pub fn new(id: Uuid, restart_counter: u64, tx: u64, host: impl Into<String>, port: u16) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            host: host.into(),
            port,
        }
    }
}

/// Refutation of suspicion: the named neighbour is known to be alive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliveEvent {
    pub id: Uuid,
    pub restart_counter: u64,
    pub tx: u64,
    /// Node being vouched for
    pub neighbour_id: Uuid,
    pub neighbour_restart_counter: u64,
    pub neighbour_tx: u64,
    pub neighbour_host: String,
    pub neighbour_port: u16,
}

impl AliveEvent {
    /// Create an alive claim about `neighbour_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        restart_counter: u64,
        tx: u64,
        neighbour_id: Uuid,
        neighbour_restart_counter: u64,
        neighbour_tx: u64,
        neighbour_host: impl Into<String>,
        neighbour_port: u16,
    ) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            neighbour_id,
            neighbour_restart_counter,
            neighbour_tx,
            neighbour_host: neighbour_host.into(),
            neighbour_port,
        }
    }
}

/// Suspicion announcement: the named neighbour stopped answering probes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuspectEvent {
    pub id: Uuid,
    pub restart_counter: u64,
    pub tx: u64,
    /// Node under suspicion
    pub neighbour_id: Uuid,
    pub neighbour_restart_counter: u64,
    pub neighbour_tx: u64,
}

impl SuspectEvent {
    /// Create a suspicion claim about `neighbour_id`.
    pub fn new(
        id: Uuid,
        restart_counter: u64,
        tx: u64,
        neighbour_id: Uuid,
        neighbour_restart_counter: u64,
        neighbour_tx: u64,
    ) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            neighbour_id,
            neighbour_restart_counter,
            neighbour_tx,
        }
    }
}

/// Graceful departure notice from the sender itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeftEvent {
    pub id: Uuid,
    pub restart_counter: u64,
    pub tx: u64,
}

impl LeftEvent {
    /// Create a departure notice.
    pub fn new(id: Uuid, restart_counter: u64, tx: u64) -> Self {
        Self {
            id,
            restart_counter,
            tx,
        }
    }
}

/// Death announcement for a neighbour whose suspicion timed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeadEvent {
    pub id: Uuid,
    pub restart_counter: u64,
    pub tx: u64,
    /// Node declared dead
    pub neighbour_id: Uuid,
    pub neighbour_restart_counter: u64,
    pub neighbour_tx: u64,
}

impl DeadEvent {
    /// Create a death claim about `neighbour_id`.
    pub fn new(
        id: Uuid,
        restart_counter: u64,
        tx: u64,
        neighbour_id: Uuid,
        neighbour_restart_counter: u64,
        neighbour_tx: u64,
    ) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            neighbour_id,
            neighbour_restart_counter,
            neighbour_tx,
        }
    }
}

/// Application payload dissemination. The payload is carried
/// uninterpreted by the message layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadEvent {
    pub id: Uuid,
    pub restart_counter: u64,
    pub tx: u64,
    /// Opaque application data
    pub payload: serde_json::Value,
}

impl PayloadEvent {
    /// Create a payload event carrying `payload`.
    pub fn new(id: Uuid, restart_counter: u64, tx: u64, payload: serde_json::Value) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            payload,
        }
    }
}

/// Full neighbour-status snapshot, exchanged to reconcile membership
/// views that incremental gossip has let drift apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AntiEntropy {
    pub id: Uuid,
    pub restart_counter: u64,
    pub tx: u64,
    /// Known neighbours and their statuses. Ordering carries no meaning
    /// but is preserved on round trip.
    pub anti_entropy_data: Vec<NeighbourDescriptor>,
}

impl AntiEntropy {
    /// Create a snapshot event carrying `anti_entropy_data`.
    pub fn new(
        id: Uuid,
        restart_counter: u64,
        tx: u64,
        anti_entropy_data: Vec<NeighbourDescriptor>,
    ) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            anti_entropy_data,
        }
    }
}

/// Pre-join reachability probe, answered by a [`ProbeAckEvent`] with the
/// matching `probe_key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeEvent {
    pub id: Uuid,
    pub host: String,
    pub port: u16,
    pub restart_counter: u64,
    pub tx: u64,
    pub neighbour_host: String,
    pub neighbour_port: u16,
    /// Correlation token echoed back in the ack
    pub probe_key: Uuid,
}

impl ProbeEvent {
    /// Create a probe for the neighbour at `neighbour_host:neighbour_port`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        host: impl Into<String>,
        port: u16,
        restart_counter: u64,
        tx: u64,
        neighbour_host: impl Into<String>,
        neighbour_port: u16,
        probe_key: Uuid,
    ) -> Self {
        Self {
            id,
            host: host.into(),
            port,
            restart_counter,
            tx,
            neighbour_host: neighbour_host.into(),
            neighbour_port,
            probe_key,
        }
    }
}

/// Answer to a [`ProbeEvent`], echoing its `probe_key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeAckEvent {
    pub id: Uuid,
    pub host: String,
    pub port: u16,
    /// Status the responder claims for itself
    pub status: NodeStatus,
    pub restart_counter: u64,
    pub tx: u64,
    /// Node whose probe is being answered
    pub neighbour_id: Uuid,
    /// Correlation token from the probe
    pub probe_key: Uuid,
}

impl ProbeAckEvent {
    /// Create an ack for the probe identified by `probe_key`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        host: impl Into<String>,
        port: u16,
        status: NodeStatus,
        restart_counter: u64,
        tx: u64,
        neighbour_id: Uuid,
        probe_key: Uuid,
    ) -> Self {
        Self {
            id,
            host: host.into(),
            port,
            status,
            restart_counter,
            tx,
            neighbour_id,
            probe_key,
        }
    }
}

/// Announcement that the cluster size changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClusterSizeEvent {
    pub id: Uuid,
    pub restart_counter: u64,
    pub tx: u64,
    pub old_cluster_size: u64,
    pub new_cluster_size: u64,
}

impl NewClusterSizeEvent {
    /// Create a cluster size change announcement.
    pub fn new(
        id: Uuid,
        restart_counter: u64,
        tx: u64,
        old_cluster_size: u64,
        new_cluster_size: u64,
    ) -> Self {
        Self {
            id,
            restart_counter,
            tx,
            old_cluster_size,
            new_cluster_size,
        }
    }
}

/// Probe relayed through an intermediary when a direct probe of the
/// neighbour was inconclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndirectPingEvent {
    pub id: Uuid,
    pub host: String,
    pub port: u16,
    pub restart_counter: u64,
    pub tx: u64,
    /// Node asked to relay the probe
    pub intermediate_id: Uuid,
    pub intermediate_host: String,
    pub intermediate_port: u16,
    /// Node being probed
    pub neighbour_id: Uuid,
    pub neighbour_host: String,
    pub neighbour_port: u16,
    pub attempt_number: u64,
    /// Send time, milliseconds since the epoch
    pub ts: u64,
}

impl IndirectPingEvent {
    /// Create an indirect ping relayed through `intermediate_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        host: impl Into<String>,
        port: u16,
        restart_counter: u64,
        tx: u64,
        intermediate_id: Uuid,
        intermediate_host: impl Into<String>,
        intermediate_port: u16,
        neighbour_id: Uuid,
        neighbour_host: impl Into<String>,
        neighbour_port: u16,
        attempt_number: u64,
        ts: u64,
    ) -> Self {
        Self {
            id,
            host: host.into(),
            port,
            restart_counter,
            tx,
            intermediate_id,
            intermediate_host: intermediate_host.into(),
            intermediate_port,
            neighbour_id,
            neighbour_host: neighbour_host.into(),
            neighbour_port,
            attempt_number,
            ts,
        }
    }
}

/// Answer to an [`IndirectPingEvent`], travelling back through the same
/// intermediary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndirectAckEvent {
    pub id: Uuid,
    pub host: String,
    pub port: u16,
    pub restart_counter: u64,
    pub tx: u64,
    /// Status the responder claims for itself
    pub status: NodeStatus,
    /// Node that relayed the probe
    pub intermediate_id: Uuid,
    pub intermediate_host: String,
    pub intermediate_port: u16,
    /// Node whose probe is being answered
    pub neighbour_id: Uuid,
    pub neighbour_host: String,
    pub neighbour_port: u16,
    pub attempt_number: u64,
}

impl IndirectAckEvent {
    /// Create an indirect ack relayed back through `intermediate_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        host: impl Into<String>,
        port: u16,
        restart_counter: u64,
        tx: u64,
        status: NodeStatus,
        intermediate_id: Uuid,
        intermediate_host: impl Into<String>,
        intermediate_port: u16,
        neighbour_id: Uuid,
        neighbour_host: impl Into<String>,
        neighbour_port: u16,
        attempt_number: u64,
    ) -> Self {
        Self {
            id,
            host: host.into(),
            port,
            restart_counter,
            tx,
            status,
            intermediate_id,
            intermediate_host: intermediate_host.into(),
            intermediate_port,
            neighbour_id,
            neighbour_host: neighbour_host.into(),
            neighbour_port,
            attempt_number,
        }
    }
}

/// Any protocol event, tagged by kind.
///
/// The set is closed and matches [`EventKind`] one-to-one, so dispatching
/// on an opcode discovered at runtime is an exhaustive match rather than
/// a lookup that can dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Ping(PingEvent),
    Ack(AckEvent),
    Join(JoinEvent),
    Alive(AliveEvent),
    Suspect(SuspectEvent),
    Left(LeftEvent),
    Dead(DeadEvent),
    Payload(PayloadEvent),
    AntiEntropy(AntiEntropy),
    Probe(ProbeEvent),
    ProbeAck(ProbeAckEvent),
    NewClusterSize(NewClusterSizeEvent),
    IndirectPing(IndirectPingEvent),
    IndirectAck(IndirectAckEvent),
}

impl Event {
    /// Symbolic kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Ping(_) => EventKind::Ping,
            Event::Ack(_) => EventKind::Ack,
            Event::Join(_) => EventKind::Join,
            Event::Alive(_) => EventKind::Alive,
            Event::Suspect(_) => EventKind::Suspect,
            Event::Left(_) => EventKind::Left,
            Event::Dead(_) => EventKind::Dead,
            Event::Payload(_) => EventKind::Payload,
            Event::AntiEntropy(_) => EventKind::AntiEntropy,
            Event::Probe(_) => EventKind::Probe,
            Event::ProbeAck(_) => EventKind::ProbeAck,
            Event::NewClusterSize(_) => EventKind::NewClusterSize,
            Event::IndirectPing(_) => EventKind::IndirectPing,
            Event::IndirectAck(_) => EventKind::IndirectAck,
        }
    }
}

impl From<PingEvent> for Event {
    fn from(event: PingEvent) -> Self {
        Event::Ping(event)
    }
}

impl From<AckEvent> for Event {
    fn from(event: AckEvent) -> Self {
        Event::Ack(event)
    }
}

impl From<JoinEvent> for Event {
    fn from(event: JoinEvent) -> Self {
        Event::Join(event)
    }
}

impl From<AliveEvent> for Event {
    fn from(event: AliveEvent) -> Self {
        Event::Alive(event)
    }
}

impl From<SuspectEvent> for Event {
    fn from(event: SuspectEvent) -> Self {
        Event::Suspect(event)
    }
}

impl From<LeftEvent> for Event {
    fn from(event: LeftEvent) -> Self {
        Event::Left(event)
    }
}

impl From<DeadEvent> for Event {
    fn from(event: DeadEvent) -> Self {
        Event::Dead(event)
    }
}

impl From<PayloadEvent> for Event {
    fn from(event: PayloadEvent) -> Self {
        Event::Payload(event)
    }
}

impl From<AntiEntropy> for Event {
    fn from(event: AntiEntropy) -> Self {
        Event::AntiEntropy(event)
    }
}

impl From<ProbeEvent> for Event {
    fn from(event: ProbeEvent) -> Self {
        Event::Probe(event)
    }
}

impl From<ProbeAckEvent> for Event {
    fn from(event: ProbeAckEvent) -> Self {
        Event::ProbeAck(event)
    }
}

impl From<NewClusterSizeEvent> for Event {
    fn from(event: NewClusterSizeEvent) -> Self {
        Event::NewClusterSize(event)
    }
}

impl From<IndirectPingEvent> for Event {
    fn from(event: IndirectPingEvent) -> Self {
        Event::IndirectPing(event)
    }
}

impl From<IndirectAckEvent> for Event {
    fn from(event: IndirectAckEvent) -> Self {
        Event::IndirectAck(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let id = Uuid::from_u128(1);
        let neighbour = Uuid::from_u128(2);
        let ping = PingEvent::new(id, "127.0.0.1", 5376, 7, 0, neighbour, 42, 1);

        assert_eq!(ping.id, id);
        assert_eq!(ping.host, "127.0.0.1");
        assert_eq!(ping.port, 5376);
        assert_eq!(ping.restart_counter, 7);
        assert_eq!(ping.tx, 0);
        assert_eq!(ping.neighbour_id, neighbour);
        assert_eq!(ping.attempt_number, 42);
        assert_eq!(ping.ts, 1);
    }

    #[test]
    fn test_zero_values() {
        let ping = PingEvent::default();
        assert_eq!(ping.id, Uuid::nil());
        assert_eq!(ping.host, "");
        assert_eq!(ping.port, 0);
        assert_eq!(ping.restart_counter, 0);
        assert_eq!(ping.tx, 0);
        assert_eq!(ping.neighbour_id, Uuid::nil());

        let probe_ack = ProbeAckEvent::default();
        assert_eq!(probe_ack.status, NodeStatus::Unknown);
        assert_eq!(probe_ack.probe_key, Uuid::nil());

        let snapshot = AntiEntropy::default();
        assert!(snapshot.anti_entropy_data.is_empty());

        let payload = PayloadEvent::default();
        assert_eq!(payload.payload, serde_json::Value::Null);
    }

    #[test]
    fn test_kind_of_every_variant() {
        let events: Vec<Event> = vec![
            PingEvent::default().into(),
            AckEvent::default().into(),
            JoinEvent::default().into(),
            AliveEvent::default().into(),
            SuspectEvent::default().into(),
            LeftEvent::default().into(),
            DeadEvent::default().into(),
            PayloadEvent::default().into(),
            AntiEntropy::default().into(),
            ProbeEvent::default().into(),
            ProbeAckEvent::default().into(),
            NewClusterSizeEvent::default().into(),
            IndirectPingEvent::default().into(),
            IndirectAckEvent::default().into(),
        ];

        let kinds: Vec<EventKind> = events.iter().map(Event::kind).collect();
        assert_eq!(kinds, EventKind::ALL);
    }
}
