//! The key-value parameter structure handed to the request builder.

use indexmap::IndexMap;
use masking::{PeekInterface, Secret};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Wire identifier of a request parameter.
///
/// The server-to-server endpoints take the `payer`-prefixed set, the hosted
/// web-sale endpoint takes the bare set. The backend treats the two sets as
/// distinct namespaces; they are not interchangeable.
#[allow(missing_docs)] // The serialized forms below are self-describing
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ParameterKey {
    PayerFirstName,
    PayerLastName,
    // `payerMidleName` is the spelling the backend expects
    PayerMidleName,
    PayerBirthDate,
    PayerAddress,
    PayerAddress2,
    PayerCountry,
    PayerState,
    PayerCity,
    PayerZip,
    PayerEmail,
    PayerPhone,
    PayerIp,
    FirstName,
    LastName,
    Address,
    Country,
    State,
    City,
    Zip,
    Email,
    Phone,
}

/// Ordered parameter collection consumed by the request builder.
///
/// Keys are unique and iteration preserves insertion order, so serializers
/// that care about position observe stable output. Values stay masked in
/// `Debug`; serialization exposes them, since producing the wire body is
/// the whole point of the hand-off.
#[derive(Clone, Debug, Default)]
pub struct ParameterMap(IndexMap<ParameterKey, Secret<String>>);

impl ParameterMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: ParameterKey, value: Secret<String>) {
        self.0.insert(key, value);
    }

    /// Stores the value only when one is present; an absent value leaves no
    /// key behind.
    pub fn insert_optional(&mut self, key: ParameterKey, value: Option<Secret<String>>) {
        if let Some(value) = value {
            self.0.insert(key, value);
        }
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: ParameterKey) -> Option<&Secret<String>> {
        self.0.get(&key)
    }

    /// Returns `true` when `key` carries a value.
    pub fn contains_key(&self, key: ParameterKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Number of parameters present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, &Secret<String>)> {
        self.0.iter()
    }
}

// Order-sensitive equality, since downstream serialization is positional.
impl PartialEq for ParameterMap {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|((key, value), (other_key, other_value))| {
                    key == other_key && value.peek() == other_value.peek()
                })
    }
}

impl Eq for ParameterMap {}

impl Serialize for ParameterMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value.peek())?;
        }
        map.end()
    }
}
