//! Positional wire codec for protocol events
//!
//! `prepare` lays an event out as a flat vector of [`WireValue`] slots:
//! the variant's opcode in slot zero, then the fields in declared order.
//! `restore` rebuilds a typed event from such a vector and rejects any
//! vector whose length, leading opcode, or slot types do not match the
//! target variant. There is no partial result: `restore` yields a fully
//! populated event or a [`StructureError`] naming the variant.
//!
//! Both directions are pure and share no state, so they can be called
//! from any number of tasks concurrently.

use crate::event::{
    AckEvent, AliveEvent, AntiEntropy, DeadEvent, Event, IndirectAckEvent, IndirectPingEvent,
    JoinEvent, LeftEvent, NewClusterSizeEvent, PayloadEvent, PingEvent, ProbeAckEvent, ProbeEvent,
    SuspectEvent,
};
use crate::neighbour::NeighbourDescriptor;
use crate::registry::EventKind;
use crate::value::WireValue;
use swim_core::{NodeStatus, Result, StructureError};
use uuid::Uuid;

/// Wire codec implemented by every event variant.
///
/// The zero value of the implementing type (its `Default`) doubles as the
/// canonical empty instance; the choice of implementation pins the opcode
/// that `restore` validates against, so feeding one variant's vector into
/// another variant's `restore` always fails.
pub trait EventCodec: Sized + Default {
    /// Kind of this variant, fixing its opcode and its error name.
    const KIND: EventKind;

    /// Exact slot count of the positional form, opcode included.
    const WIRE_LEN: usize;

    /// Lay the event out as its positional wire vector. Total: any
    /// well-formed in-memory event can be prepared.
    fn prepare(&self) -> Vec<WireValue>;

    /// Rebuild an event from a positional wire vector, validating its
    /// length and leading opcode before binding the remaining slots.
    fn restore(seq: &[WireValue]) -> Result<Self>;
}

// Decode-time validation policy, shared by every variant: exact length
// first, then the leading opcode, then typed slot binding. No variant
// skips a step.

fn check_frame<T: EventCodec>(seq: &[WireValue]) -> Result<()> {
    if seq.len() != T::WIRE_LEN {
        return Err(StructureError::new(T::KIND.type_name()));
    }
    match seq[0].as_uint() {
        Some(code) if code == T::KIND.code() => Ok(()),
        _ => Err(StructureError::new(T::KIND.type_name())),
    }
}

fn uint_at<T: EventCodec>(seq: &[WireValue], idx: usize) -> Result<u64> {
    seq.get(idx)
        .and_then(WireValue::as_uint)
        .ok_or_else(|| StructureError::new(T::KIND.type_name()))
}

fn port_at<T: EventCodec>(seq: &[WireValue], idx: usize) -> Result<u16> {
    u16::try_from(uint_at::<T>(seq, idx)?)
        .map_err(|_| StructureError::new(T::KIND.type_name()))
}

fn str_at<T: EventCodec>(seq: &[WireValue], idx: usize) -> Result<String> {
    seq.get(idx)
        .and_then(WireValue::as_str)
        .map(str::to_owned)
        .ok_or_else(|| StructureError::new(T::KIND.type_name()))
}

fn uuid_at<T: EventCodec>(seq: &[WireValue], idx: usize) -> Result<Uuid> {
    seq.get(idx)
        .and_then(WireValue::as_uuid)
        .ok_or_else(|| StructureError::new(T::KIND.type_name()))
}

fn status_at<T: EventCodec>(seq: &[WireValue], idx: usize) -> Result<NodeStatus> {
    seq.get(idx)
        .and_then(WireValue::as_status)
        .ok_or_else(|| StructureError::new(T::KIND.type_name()))
}

fn payload_at<T: EventCodec>(seq: &[WireValue], idx: usize) -> Result<serde_json::Value> {
    seq.get(idx)
        .and_then(WireValue::as_payload)
        .cloned()
        .ok_or_else(|| StructureError::new(T::KIND.type_name()))
}

fn neighbours_at<T: EventCodec>(seq: &[WireValue], idx: usize) -> Result<Vec<NeighbourDescriptor>> {
    seq.get(idx)
        .and_then(WireValue::as_neighbours)
        .map(<[NeighbourDescriptor]>::to_vec)
        .ok_or_else(|| StructureError::new(T::KIND.type_name()))
}

impl EventCodec for PingEvent {
    const KIND: EventKind = EventKind::Ping;
    const WIRE_LEN: usize = 9;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Str(self.host.clone()),
            WireValue::Uint(u64::from(self.port)),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Uint(self.attempt_number),
            WireValue::Uint(self.ts),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            host: str_at::<Self>(seq, 2)?,
            port: port_at::<Self>(seq, 3)?,
            restart_counter: uint_at::<Self>(seq, 4)?,
            tx: uint_at::<Self>(seq, 5)?,
            neighbour_id: uuid_at::<Self>(seq, 6)?,
            attempt_number: uint_at::<Self>(seq, 7)?,
            ts: uint_at::<Self>(seq, 8)?,
        })
    }
}

impl EventCodec for AckEvent {
    const KIND: EventKind = EventKind::Ack;
    const WIRE_LEN: usize = 7;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Uint(self.neighbour_tx),
            WireValue::Uint(self.attempt_number),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            neighbour_id: uuid_at::<Self>(seq, 4)?,
            neighbour_tx: uint_at::<Self>(seq, 5)?,
            attempt_number: uint_at::<Self>(seq, 6)?,
        })
    }
}

impl EventCodec for JoinEvent {
    const KIND: EventKind = EventKind::Join;
    const WIRE_LEN: usize = 6;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Str(self.host.clone()),
            WireValue::Uint(u64::from(self.port)),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            host: str_at::<Self>(seq, 4)?,
            port: port_at::<Self>(seq, 5)?,
        })
    }
}

impl EventCodec for AliveEvent {
    const KIND: EventKind = EventKind::Alive;
    const WIRE_LEN: usize = 9;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Uint(self.neighbour_restart_counter),
            WireValue::Uint(self.neighbour_tx),
            WireValue::Str(self.neighbour_host.clone()),
            WireValue::Uint(u64::from(self.neighbour_port)),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            neighbour_id: uuid_at::<Self>(seq, 4)?,
            neighbour_restart_counter: uint_at::<Self>(seq, 5)?,
            neighbour_tx: uint_at::<Self>(seq, 6)?,
            neighbour_host: str_at::<Self>(seq, 7)?,
            neighbour_port: port_at::<Self>(seq, 8)?,
        })
    }
}

impl EventCodec for SuspectEvent {
    const KIND: EventKind = EventKind::Suspect;
    const WIRE_LEN: usize = 7;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Uint(self.neighbour_restart_counter),
            WireValue::Uint(self.neighbour_tx),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            neighbour_id: uuid_at::<Self>(seq, 4)?,
            neighbour_restart_counter: uint_at::<Self>(seq, 5)?,
            neighbour_tx: uint_at::<Self>(seq, 6)?,
        })
    }
}

impl EventCodec for LeftEvent {
    const KIND: EventKind = EventKind::Left;
    const WIRE_LEN: usize = 4;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
        })
    }
}

impl EventCodec for DeadEvent {
    const KIND: EventKind = EventKind::Dead;
    const WIRE_LEN: usize = 7;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Uint(self.neighbour_restart_counter),
            WireValue::Uint(self.neighbour_tx),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            neighbour_id: uuid_at::<Self>(seq, 4)?,
            neighbour_restart_counter: uint_at::<Self>(seq, 5)?,
            neighbour_tx: uint_at::<Self>(seq, 6)?,
        })
    }
}

impl EventCodec for PayloadEvent {
    const KIND: EventKind = EventKind::Payload;
    const WIRE_LEN: usize = 5;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Payload(self.payload.clone()),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            payload: payload_at::<Self>(seq, 4)?,
        })
    }
}

impl EventCodec for AntiEntropy {
    const KIND: EventKind = EventKind::AntiEntropy;
    const WIRE_LEN: usize = 5;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Neighbours(self.anti_entropy_data.clone()),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            anti_entropy_data: neighbours_at::<Self>(seq, 4)?,
        })
    }
}

impl EventCodec for ProbeEvent {
    const KIND: EventKind = EventKind::Probe;
    const WIRE_LEN: usize = 9;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Str(self.host.clone()),
            WireValue::Uint(u64::from(self.port)),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Str(self.neighbour_host.clone()),
            WireValue::Uint(u64::from(self.neighbour_port)),
            WireValue::Uuid(self.probe_key),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            host: str_at::<Self>(seq, 2)?,
            port: port_at::<Self>(seq, 3)?,
            restart_counter: uint_at::<Self>(seq, 4)?,
            tx: uint_at::<Self>(seq, 5)?,
            neighbour_host: str_at::<Self>(seq, 6)?,
            neighbour_port: port_at::<Self>(seq, 7)?,
            probe_key: uuid_at::<Self>(seq, 8)?,
        })
    }
}

impl EventCodec for ProbeAckEvent {
    const KIND: EventKind = EventKind::ProbeAck;
    const WIRE_LEN: usize = 9;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Str(self.host.clone()),
            WireValue::Uint(u64::from(self.port)),
            WireValue::Status(self.status),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Uuid(self.probe_key),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            host: str_at::<Self>(seq, 2)?,
            port: port_at::<Self>(seq, 3)?,
            status: status_at::<Self>(seq, 4)?,
            restart_counter: uint_at::<Self>(seq, 5)?,
            tx: uint_at::<Self>(seq, 6)?,
            neighbour_id: uuid_at::<Self>(seq, 7)?,
            probe_key: uuid_at::<Self>(seq, 8)?,
        })
    }
}

impl EventCodec for NewClusterSizeEvent {
    const KIND: EventKind = EventKind::NewClusterSize;
    const WIRE_LEN: usize = 6;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uint(self.old_cluster_size),
            WireValue::Uint(self.new_cluster_size),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            restart_counter: uint_at::<Self>(seq, 2)?,
            tx: uint_at::<Self>(seq, 3)?,
            old_cluster_size: uint_at::<Self>(seq, 4)?,
            new_cluster_size: uint_at::<Self>(seq, 5)?,
        })
    }
}

impl EventCodec for IndirectPingEvent {
    const KIND: EventKind = EventKind::IndirectPing;
    const WIRE_LEN: usize = 14;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Str(self.host.clone()),
            WireValue::Uint(u64::from(self.port)),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Uuid(self.intermediate_id),
            WireValue::Str(self.intermediate_host.clone()),
            WireValue::Uint(u64::from(self.intermediate_port)),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Str(self.neighbour_host.clone()),
            WireValue::Uint(u64::from(self.neighbour_port)),
            WireValue::Uint(self.attempt_number),
            WireValue::Uint(self.ts),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            host: str_at::<Self>(seq, 2)?,
            port: port_at::<Self>(seq, 3)?,
            restart_counter: uint_at::<Self>(seq, 4)?,
            tx: uint_at::<Self>(seq, 5)?,
            intermediate_id: uuid_at::<Self>(seq, 6)?,
            intermediate_host: str_at::<Self>(seq, 7)?,
            intermediate_port: port_at::<Self>(seq, 8)?,
            neighbour_id: uuid_at::<Self>(seq, 9)?,
            neighbour_host: str_at::<Self>(seq, 10)?,
            neighbour_port: port_at::<Self>(seq, 11)?,
            attempt_number: uint_at::<Self>(seq, 12)?,
            ts: uint_at::<Self>(seq, 13)?,
        })
    }
}

impl EventCodec for IndirectAckEvent {
    const KIND: EventKind = EventKind::IndirectAck;
    const WIRE_LEN: usize = 14;

    fn prepare(&self) -> Vec<WireValue> {
        vec![
            WireValue::Uint(Self::KIND.code()),
            WireValue::Uuid(self.id),
            WireValue::Str(self.host.clone()),
            WireValue::Uint(u64::from(self.port)),
            WireValue::Uint(self.restart_counter),
            WireValue::Uint(self.tx),
            WireValue::Status(self.status),
            WireValue::Uuid(self.intermediate_id),
            WireValue::Str(self.intermediate_host.clone()),
            WireValue::Uint(u64::from(self.intermediate_port)),
            WireValue::Uuid(self.neighbour_id),
            WireValue::Str(self.neighbour_host.clone()),
            WireValue::Uint(u64::from(self.neighbour_port)),
            WireValue::Uint(self.attempt_number),
        ]
    }

    fn restore(seq: &[WireValue]) -> Result<Self> {
        check_frame::<Self>(seq)?;
        Ok(Self {
            id: uuid_at::<Self>(seq, 1)?,
            host: str_at::<Self>(seq, 2)?,
            port: port_at::<Self>(seq, 3)?,
            restart_counter: uint_at::<Self>(seq, 4)?,
            tx: uint_at::<Self>(seq, 5)?,
            status: status_at::<Self>(seq, 6)?,
            intermediate_id: uuid_at::<Self>(seq, 7)?,
            intermediate_host: str_at::<Self>(seq, 8)?,
            intermediate_port: port_at::<Self>(seq, 9)?,
            neighbour_id: uuid_at::<Self>(seq, 10)?,
            neighbour_host: str_at::<Self>(seq, 11)?,
            neighbour_port: port_at::<Self>(seq, 12)?,
            attempt_number: uint_at::<Self>(seq, 13)?,
        })
    }
}

impl Event {
    /// Lay this event out as its positional wire vector.
    pub fn prepare(&self) -> Vec<WireValue> {
        match self {
            Event::Ping(event) => event.prepare(),
            Event::Ack(event) => event.prepare(),
            Event::Join(event) => event.prepare(),
            Event::Alive(event) => event.prepare(),
            Event::Suspect(event) => event.prepare(),
            Event::Left(event) => event.prepare(),
            Event::Dead(event) => event.prepare(),
            Event::Payload(event) => event.prepare(),
            Event::AntiEntropy(event) => event.prepare(),
            Event::Probe(event) => event.prepare(),
            Event::ProbeAck(event) => event.prepare(),
            Event::NewClusterSize(event) => event.prepare(),
            Event::IndirectPing(event) => event.prepare(),
            Event::IndirectAck(event) => event.prepare(),
        }
    }

    /// Restore an event of any kind by peeking the leading opcode and
    /// dispatching to that variant's `restore`.
    pub fn restore(seq: &[WireValue]) -> Result<Event> {
        let code = seq
            .first()
            .and_then(WireValue::as_uint)
            .ok_or_else(|| StructureError::new("Event"))?;
        let kind = EventKind::from_code(code).ok_or_else(|| StructureError::new("Event"))?;

        Ok(match kind {
            EventKind::Ping => Event::Ping(PingEvent::restore(seq)?),
            EventKind::Ack => Event::Ack(AckEvent::restore(seq)?),
            EventKind::Join => Event::Join(JoinEvent::restore(seq)?),
            EventKind::Alive => Event::Alive(AliveEvent::restore(seq)?),
            EventKind::Suspect => Event::Suspect(SuspectEvent::restore(seq)?),
            EventKind::Left => Event::Left(LeftEvent::restore(seq)?),
            EventKind::Dead => Event::Dead(DeadEvent::restore(seq)?),
            EventKind::Payload => Event::Payload(PayloadEvent::restore(seq)?),
            EventKind::AntiEntropy => Event::AntiEntropy(AntiEntropy::restore(seq)?),
            EventKind::Probe => Event::Probe(ProbeEvent::restore(seq)?),
            EventKind::ProbeAck => Event::ProbeAck(ProbeAckEvent::restore(seq)?),
            EventKind::NewClusterSize => Event::NewClusterSize(NewClusterSizeEvent::restore(seq)?),
            EventKind::IndirectPing => Event::IndirectPing(IndirectPingEvent::restore(seq)?),
            EventKind::IndirectAck => Event::IndirectAck(IndirectAckEvent::restore(seq)?),
        })
    }
}
