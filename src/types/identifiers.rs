//! Identifier types for the club simulator
//!
//! This module contains the client name and table number types used
//! throughout the simulation system.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Name of a club client as it appears in the event log
///
/// Client names are non-empty and consist only of lowercase ASCII letters,
/// digits, `_` and `-`. Ordering is lexicographic on the raw name, which is
/// the order used for closing-time departures.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Create a client id, checking the allowed character set
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if Self::is_valid_name(&name) {
            Ok(Self(name))
        } else {
            Err(format!("Invalid client name: {:?}", name))
        }
    }

    /// Check whether a raw name is an acceptable client name
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ClientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClientId::new(s).map_err(serde::de::Error::custom)
    }
}

/// 1-based table number as used in the event log and the final report
///
/// A `TableId` only guarantees that the number is positive; whether it names
/// an existing table depends on the club configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(usize);

impl TableId {
    /// Create a table id from its 1-based number
    pub fn new(number: usize) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// Create a table id from a 0-based slot index
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 1-based table number
    pub fn number(self) -> usize {
        self.0
    }

    /// The 0-based slot index
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TableId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0 as u64)
    }
}

impl<'de> Deserialize<'de> for TableId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = usize::deserialize(deserializer)?;
        TableId::new(number).ok_or_else(|| serde::de::Error::custom("table number must be positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_accepts_allowed_charset() {
        for name in ["client1", "a", "bob_the-builder", "007", "-_-"] {
            assert!(ClientId::new(name).is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_client_id_rejects_other_characters() {
        for name in ["", "Client", "with space", "dot.name", "ünïcode", "semi;colon"] {
            assert!(ClientId::new(name).is_err(), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_client_id_orders_lexicographically() {
        let mut ids: Vec<ClientId> = ["client2", "alice", "client10", "bob"]
            .iter()
            .map(|n| ClientId::new(*n).unwrap())
            .collect();
        ids.sort();
        let names: Vec<&str> = ids.iter().map(ClientId::as_str).collect();
        assert_eq!(names, vec!["alice", "bob", "client10", "client2"]);
    }

    #[test]
    fn test_table_id_conversions() {
        assert!(TableId::new(0).is_none());
        let table = TableId::new(3).unwrap();
        assert_eq!(table.number(), 3);
        assert_eq!(table.index(), 2);
        assert_eq!(TableId::from_index(2), table);
        assert_eq!(table.to_string(), "3");
    }

    #[test]
    fn test_serialization() {
        let id = ClientId::new("client1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"client1\"");
        assert!(serde_json::from_str::<ClientId>("\"Bad Name\"").is_err());

        let table = TableId::new(2).unwrap();
        assert_eq!(serde_json::to_string(&table).unwrap(), "2");
        assert!(serde_json::from_str::<TableId>("0").is_err());
    }
}
