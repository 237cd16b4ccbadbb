//! Core type definitions for swimmesh

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known status of a node in the cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Node is alive and responding
    Alive,
    /// Node is suspected to be dead
    Suspect,
    /// Node is confirmed dead
    Dead,
    /// Node has left the cluster gracefully
    Left,
    /// Status has not been established yet. Reserved for zero values;
    /// never a meaningful claim on the wire.
    #[default]
    Unknown,
}

impl NodeStatus {
    /// Check if the node is considered active (alive or suspect)
    pub fn is_active(&self) -> bool {
        matches!(self, NodeStatus::Alive | NodeStatus::Suspect)
    }

    /// Check if the node is considered inactive (dead or left)
    pub fn is_inactive(&self) -> bool {
        matches!(self, NodeStatus::Dead | NodeStatus::Left)
    }
}

impl std::str::FromStr for NodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alive" => Ok(NodeStatus::Alive),
            "suspect" => Ok(NodeStatus::Suspect),
            "dead" => Ok(NodeStatus::Dead),
            "left" => Ok(NodeStatus::Left),
            "unknown" => Ok(NodeStatus::Unknown),
            _ => Err(format!("Unknown node status: {}", s)),
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeStatus::Alive => write!(f, "alive"),
            NodeStatus::Suspect => write!(f, "suspect"),
            NodeStatus::Dead => write!(f, "dead"),
            NodeStatus::Left => write!(f, "left"),
            NodeStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// How a neighbour is reachable from the reporting node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    /// Reachable directly
    #[default]
    Direct,
    /// Reachable only through an intermediary node
    Indirect,
}

impl std::str::FromStr for AccessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(AccessMode::Direct),
            "indirect" => Ok(AccessMode::Indirect),
            _ => Err(format!("Unknown access mode: {}", s)),
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Direct => write!(f, "direct"),
            AccessMode::Indirect => write!(f, "indirect"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_status_parsing() {
        assert_eq!("alive".parse::<NodeStatus>().unwrap(), NodeStatus::Alive);
        assert_eq!("suspect".parse::<NodeStatus>().unwrap(), NodeStatus::Suspect);
        assert_eq!("dead".parse::<NodeStatus>().unwrap(), NodeStatus::Dead);
        assert_eq!("left".parse::<NodeStatus>().unwrap(), NodeStatus::Left);
        assert_eq!("unknown".parse::<NodeStatus>().unwrap(), NodeStatus::Unknown);

        assert!("invalid".parse::<NodeStatus>().is_err());
    }

    #[test]
    fn test_node_status_display_round_trip() {
        for status in [
            NodeStatus::Alive,
            NodeStatus::Suspect,
            NodeStatus::Dead,
            NodeStatus::Left,
            NodeStatus::Unknown,
        ] {
            assert_eq!(status.to_string().parse::<NodeStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_node_status_predicates() {
        assert!(NodeStatus::Alive.is_active());
        assert!(NodeStatus::Suspect.is_active());
        assert!(!NodeStatus::Dead.is_active());

        assert!(NodeStatus::Dead.is_inactive());
        assert!(NodeStatus::Left.is_inactive());
        assert!(!NodeStatus::Alive.is_inactive());

        // Unknown is neither active nor inactive
        assert!(!NodeStatus::Unknown.is_active());
        assert!(!NodeStatus::Unknown.is_inactive());
    }

    #[test]
    fn test_node_status_default() {
        assert_eq!(NodeStatus::default(), NodeStatus::Unknown);
    }

    #[test]
    fn test_access_mode_parsing() {
        assert_eq!("direct".parse::<AccessMode>().unwrap(), AccessMode::Direct);
        assert_eq!("indirect".parse::<AccessMode>().unwrap(), AccessMode::Indirect);

        assert!("invalid".parse::<AccessMode>().is_err());
    }

    #[test]
    fn test_access_mode_default() {
        assert_eq!(AccessMode::default(), AccessMode::Direct);
    }
}
