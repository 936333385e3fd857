//! Block states as they appear in a block palette.
//!
//! Each palette record is a compound shaped like
//!
//! ```text
//! {
//!     name: "minecraft:wool",
//!     states: { color: "red" },
//!     version: 17959425,
//! }
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use bedrock_nbt::{NbtCompound, NbtValue, tag_type};
use thiserror::Error;

const TAG_NAME: &str = "name";
const TAG_STATES: &str = "states";
const TAG_VERSION: &str = "version";

/// Why a palette record could not be turned into a [`BlockState`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockStateError {
    #[error("missing tag \"{0}\"")]
    MissingTag(&'static str),
    #[error("tag \"{key}\" should be {expected}, found {found}")]
    WrongTagType {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("state \"{property}\" has unsupported value type {found}")]
    UnsupportedStateValue {
        property: String,
        found: &'static str,
    },
    #[error("unexpected extra keys: {}", .0.join(", "))]
    UnexpectedKeys(Vec<String>),
}

/// Value of a single block state property.
///
/// Byte tags (used for boolean properties) widen to [`PropertyValue::Int`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Int(i32),
    String(String),
}

impl PropertyValue {
    /// The string payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    fn sort_key(&self) -> Cow<'_, str> {
        match self {
            Self::Int(v) => Cow::Owned(v.to_string()),
            Self::String(s) => Cow::Borrowed(s),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::String(_) => 1,
        }
    }
}

/// Byte-wise order of the string form; `Int` sorts before `String` on a tie.
impl Ord for PropertyValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for PropertyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

/// One palette entry: a block type name plus its property assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockState {
    name: String,
    properties: Vec<(String, PropertyValue)>,
    version: i32,
}

impl BlockState {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        properties: Vec<(String, PropertyValue)>,
        version: i32,
    ) -> Self {
        Self {
            name: name.into(),
            properties,
            version,
        }
    }

    /// Namespaced type name, e.g. `minecraft:stone`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in the order the record declared them.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    #[must_use]
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Parse a palette record.
    ///
    /// `name` and `states` are required, `version` defaults to 0, and any other
    /// key is rejected.
    pub fn from_nbt(nbt: &NbtCompound) -> Result<Self, BlockStateError> {
        let name = match required(nbt, TAG_NAME)? {
            NbtValue::String(name) => name.clone(),
            other => return Err(wrong_type(TAG_NAME, tag_type::STRING, other)),
        };

        let states = match required(nbt, TAG_STATES)? {
            NbtValue::Compound(states) => states,
            other => return Err(wrong_type(TAG_STATES, tag_type::COMPOUND, other)),
        };

        let version = match nbt.get(TAG_VERSION) {
            None => 0,
            Some(NbtValue::Int(version)) => *version,
            Some(other) => return Err(wrong_type(TAG_VERSION, tag_type::INT, other)),
        };

        let extra: Vec<String> = nbt
            .iter()
            .map(|(k, _)| k)
            .filter(|k| ![TAG_NAME, TAG_STATES, TAG_VERSION].contains(k))
            .map(str::to_string)
            .collect();
        if !extra.is_empty() {
            return Err(BlockStateError::UnexpectedKeys(extra));
        }

        let properties = states
            .iter()
            .map(|(property, value)| {
                let value = match value {
                    NbtValue::Byte(v) => PropertyValue::Int(i32::from(*v)),
                    NbtValue::Int(v) => PropertyValue::Int(*v),
                    NbtValue::String(v) => PropertyValue::String(v.clone()),
                    other => {
                        return Err(BlockStateError::UnsupportedStateValue {
                            property: property.to_string(),
                            found: other.type_name(),
                        });
                    }
                };
                Ok((property.to_string(), value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            properties,
            version,
        })
    }
}

fn required<'a>(nbt: &'a NbtCompound, key: &'static str) -> Result<&'a NbtValue, BlockStateError> {
    nbt.get(key).ok_or(BlockStateError::MissingTag(key))
}

fn wrong_type(key: &'static str, expected: u8, found: &NbtValue) -> BlockStateError {
    BlockStateError::WrongTagType {
        key,
        expected: tag_type::name(expected),
        found: found.type_name(),
    }
}
