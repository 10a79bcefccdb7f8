//! Arena handles
//!
//! Handles are plain integers wrapped in newtypes. A `Graph` hands them out
//! monotonically and never reuses one, so a handle that outlives its vertex
//! fails lookups instead of silently aliasing a newer vertex.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Vertex handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Slot index inside the graph arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(raw: u32) -> Self {
        VertexId(raw)
    }
}

impl FromStr for VertexId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(VertexId)
    }
}

/// Edge handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u32);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_parse() {
        assert_eq!("17".parse::<VertexId>().unwrap(), VertexId(17));
        assert!("v17".parse::<VertexId>().is_err());
        assert!("-1".parse::<VertexId>().is_err());
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        let mut ids = vec![VertexId(3), VertexId(1), VertexId(2)];
        ids.sort();
        assert_eq!(ids, vec![VertexId(1), VertexId(2), VertexId(3)]);
    }
}
