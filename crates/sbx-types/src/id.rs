use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque identifier for a performer, scene, studio, tag, site or image.
///
/// Identity is only ever compared for equality; nothing in the engine
/// interprets the bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(uuid::Uuid);

impl EntityId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Create from a raw 128-bit value. Handy for fixtures.
    pub const fn from_u128(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

/// The nil identifier, so that defaulted snapshots compare equal.
impl Default for EntityId {
    fn default() -> Self {
        Self(uuid::Uuid::nil())
    }
}

impl FromStr for EntityId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| TypeError::InvalidId(s.to_string()))
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.short_id())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_roundtrip() {
        let id = EntityId::from_u128(0x1234);
        let text = id.to_string();
        let parsed: EntityId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<EntityId>().unwrap_err();
        assert_eq!(err, TypeError::InvalidId("not-a-uuid".into()));
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(EntityId::new(), EntityId::new());
    }

    #[test]
    fn default_is_nil_and_stable() {
        assert!(EntityId::default().as_uuid().is_nil());
        assert_eq!(EntityId::default(), EntityId::default());
        assert_eq!(crate::Performer::default(), crate::Performer::default());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::from_u128(1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn short_id_is_eight_chars() {
        assert_eq!(EntityId::from_u128(1).short_id(), "00000000");
    }
}
