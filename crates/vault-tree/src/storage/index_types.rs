//! Node index types for type-safe slab addressing.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A compact 32-bit index into the node slab.
///
/// The u32::MAX value is reserved and never handed out, so a deserialized
/// index can always be told apart from a corrupted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a new NodeId from a usize.
    ///
    /// # Panics
    /// Panics if `index >= u32::MAX`.
    #[inline]
    pub fn new(index: usize) -> Self {
        assert!(index < u32::MAX as usize, "node index must be less than u32::MAX");
        Self(index as u32)
    }

    /// Returns the index as a usize.
    #[inline]
    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        if value == u32::MAX {
            return Err(D::Error::custom("NodeId cannot be u32::MAX"));
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_roundtrips_through_usize() {
        assert_eq!(NodeId::new(7).get(), 7);
        assert!(NodeId::new(1) < NodeId::new(2));
    }

    #[test]
    fn node_id_rejects_sentinel_on_deserialize() {
        let parsed: std::result::Result<NodeId, _> = serde_json::from_str("4294967295");
        assert!(parsed.is_err());
        let parsed: NodeId = serde_json::from_str("12").expect("valid id");
        assert_eq!(parsed, NodeId::new(12));
    }
}
