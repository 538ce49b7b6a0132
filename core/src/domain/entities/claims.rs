//! Claim sets carried in token payloads.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Expiration time claim
pub const CLAIM_EXPIRES_AT: &str = "exp";

/// Issued at claim
pub const CLAIM_ISSUED_AT: &str = "iat";

/// Not before claim
pub const CLAIM_NOT_BEFORE: &str = "nbf";

/// Subject claim
pub const CLAIM_SUBJECT: &str = "sub";

/// Claims owned by the token service. Callers may not supply them.
pub const RESERVED_CLAIMS: [&str; 3] = [CLAIM_EXPIRES_AT, CLAIM_ISSUED_AT, CLAIM_NOT_BEFORE];

/// Ordered mapping from claim name to JSON value.
///
/// The set is opaque to the token service apart from the temporal claims;
/// interpreting `role`, `permissions` and the like is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    /// Creates an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a claim, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a claim, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Removes a claim
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    /// Raw claim value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Claim value deserialized into `T`
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.0
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// First reserved claim name present in this set, in insertion order
    pub fn reserved_claim(&self) -> Option<&str> {
        self.0
            .keys()
            .find(|name| RESERVED_CLAIMS.contains(&name.as_str()))
            .map(String::as_str)
    }

    /// The `sub` claim, when it is a string
    pub fn subject(&self) -> Option<&str> {
        self.0.get(CLAIM_SUBJECT).and_then(Value::as_str)
    }

    /// The `iat` claim as a UTC timestamp
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp(CLAIM_ISSUED_AT)
    }

    /// The `nbf` claim as a UTC timestamp
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.timestamp(CLAIM_NOT_BEFORE)
    }

    /// The `exp` claim as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp(CLAIM_EXPIRES_AT)
    }

    /// Integer seconds-since-epoch claim
    pub(crate) fn seconds(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }

    fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.seconds(name)
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    /// Consumes the set, returning the underlying JSON map
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
