use crate::error::{NbtError, Result};
use crate::tag_type;

/// An NBT value
#[derive(Debug, Clone, PartialEq)]
pub enum NbtValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(NbtList),
    Compound(NbtCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// An NBT list (all elements must be same type)
#[derive(Debug, Clone, PartialEq)]
pub enum NbtList {
    /// A list with no elements.
    ///
    /// Any zero-length list decodes to this, whatever element type it was
    /// written with, and is written back as a list of `TAG_End`.
    Empty,
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<i8>>),
    String(Vec<String>),
    List(Vec<NbtList>),
    Compound(Vec<NbtCompound>),
    IntArray(Vec<Vec<i32>>),
    LongArray(Vec<Vec<i64>>),
}

/// An NBT compound (map of string -> value)
///
/// Entries keep the order they were declared in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NbtCompound {
    entries: Vec<(String, NbtValue)>,
}

/// A decoded root tag together with its (usually empty) name.
#[derive(Debug, Clone, PartialEq)]
pub struct NbtRoot {
    pub name: String,
    pub value: NbtValue,
}

impl NbtRoot {
    /// Unwrap the root as a compound, which is what every palette record is.
    pub fn into_compound(self) -> Result<NbtCompound> {
        match self.value {
            NbtValue::Compound(compound) => Ok(compound),
            other => Err(NbtError::RootNotCompound(tag_type::name(other.type_id()))),
        }
    }
}

impl NbtCompound {
    /// Create a new empty compound
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value into the compound.
    ///
    /// An existing key keeps its position and has its value replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<NbtValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Build a compound from entries
    #[must_use]
    pub fn from_entries(entries: Vec<(String, NbtValue)>) -> Self {
        let mut compound = Self::new();
        for (key, value) in entries {
            compound.insert(key, value);
        }
        compound
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&NbtValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NbtValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for NbtCompound {
    type Item = (String, NbtValue);
    type IntoIter = std::vec::IntoIter<(String, NbtValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl NbtValue {
    /// Get the type ID for this value
    #[must_use]
    pub fn type_id(&self) -> u8 {
        match self {
            Self::Byte(_) => tag_type::BYTE,
            Self::Short(_) => tag_type::SHORT,
            Self::Int(_) => tag_type::INT,
            Self::Long(_) => tag_type::LONG,
            Self::Float(_) => tag_type::FLOAT,
            Self::Double(_) => tag_type::DOUBLE,
            Self::ByteArray(_) => tag_type::BYTE_ARRAY,
            Self::String(_) => tag_type::STRING,
            Self::List(_) => tag_type::LIST,
            Self::Compound(_) => tag_type::COMPOUND,
            Self::IntArray(_) => tag_type::INT_ARRAY,
            Self::LongArray(_) => tag_type::LONG_ARRAY,
        }
    }

    /// Tag name for diagnostics, e.g. `TAG_String`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        tag_type::name(self.type_id())
    }
}

impl NbtList {
    /// Get the element type ID
    #[must_use]
    pub fn element_type_id(&self) -> u8 {
        match self {
            Self::Empty => tag_type::END,
            Self::Byte(_) => tag_type::BYTE,
            Self::Short(_) => tag_type::SHORT,
            Self::Int(_) => tag_type::INT,
            Self::Long(_) => tag_type::LONG,
            Self::Float(_) => tag_type::FLOAT,
            Self::Double(_) => tag_type::DOUBLE,
            Self::ByteArray(_) => tag_type::BYTE_ARRAY,
            Self::String(_) => tag_type::STRING,
            Self::List(_) => tag_type::LIST,
            Self::Compound(_) => tag_type::COMPOUND,
            Self::IntArray(_) => tag_type::INT_ARRAY,
            Self::LongArray(_) => tag_type::LONG_ARRAY,
        }
    }

    /// Get the length
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Byte(v) => v.len(),
            Self::Short(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Long(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::ByteArray(v) => v.len(),
            Self::String(v) => v.len(),
            Self::List(v) => v.len(),
            Self::Compound(v) => v.len(),
            Self::IntArray(v) => v.len(),
            Self::LongArray(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Convenient From implementations
impl From<bool> for NbtValue {
    fn from(v: bool) -> Self {
        Self::Byte(i8::from(v))
    }
}

impl From<i8> for NbtValue {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for NbtValue {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i32> for NbtValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for NbtValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for NbtValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for NbtValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for NbtValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for NbtValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<NbtCompound> for NbtValue {
    fn from(v: NbtCompound) -> Self {
        Self::Compound(v)
    }
}

impl From<NbtList> for NbtValue {
    fn from(v: NbtList) -> Self {
        Self::List(v)
    }
}
