//! # swim-events
//!
//! Event model and positional wire codec for swimmesh's SWIM-style
//! cluster membership protocol.
//!
//! This crate provides:
//! - One immutable record per protocol message kind, with zero-value
//!   defaults
//! - The command registry mapping symbolic event kinds to wire opcodes
//! - `prepare`/`restore`: the deterministic mapping between a typed event
//!   and its compact positional wire vector, with structural validation
//!   on the way back in
//! - The neighbour descriptor records carried in anti-entropy snapshots
//! - A default byte-serialization bridge for prepared vectors
//!
//! This is the interoperability boundary of the cluster: the transport
//! and failure detector call [`EventCodec::prepare`] before sending bytes
//! and [`EventCodec::restore`] after receiving them, and neither side
//! controls its peers. The codec itself is pure and stateless; it knows
//! nothing of sockets, timers, or membership state.
//!
//! ## Example
//!
//! ```rust
//! use swim_events::{EventCodec, PingEvent};
//! use uuid::Uuid;
//!
//! let ping = PingEvent::new(Uuid::new_v4(), "10.0.0.1", 5376, 7, 0, Uuid::new_v4(), 1, 1);
//! let vector = ping.prepare();
//!
//! let restored = PingEvent::restore(&vector)?;
//! assert_eq!(restored, ping);
//! # Ok::<(), swim_core::StructureError>(())
//! ```

pub mod codec;
pub mod event;
pub mod neighbour;
pub mod registry;
pub mod value;
pub mod wire;

// Re-export commonly used types
pub use codec::EventCodec;
pub use event::{
    AckEvent, AliveEvent, AntiEntropy, DeadEvent, Event, IndirectAckEvent, IndirectPingEvent,
    JoinEvent, LeftEvent, NewClusterSizeEvent, PayloadEvent, PingEvent, ProbeAckEvent, ProbeEvent,
    SuspectEvent,
};
pub use neighbour::NeighbourDescriptor;
pub use registry::EventKind;
pub use value::WireValue;

pub use swim_core::{AccessMode, NodeStatus, Result, StructureError};
