//! NBT (Named Binary Tag) for the Bedrock network protocol.
//!
//! Bedrock's network flavour of NBT differs from the Java one in three ways:
//! scalars are little-endian, `Int`/`Long` payloads are ZigZag VarInts, and
//! string and array lengths are VarInts. A stream may hold several root tags
//! back to back, which is how block palettes are shipped.
//!
//! ```
//! use bedrock_nbt::{nbt, read_multiple};
//!
//! let root = nbt! {
//!     "name" => "minecraft:stone",
//!     "version" => 17_959_425i32,
//! };
//!
//! let mut bytes = root.to_network_bytes()?;
//! root.write_network(&mut bytes)?;
//!
//! let roots = read_multiple(&bytes).unwrap();
//! assert_eq!(roots.len(), 2);
//! # Ok::<(), std::io::Error>(())
//! ```

mod error;
mod read;
mod value;
mod write;

pub use error::{NbtError, Result};
pub use read::{MAX_DEPTH, MAX_STRING_LEN, read_multiple, read_root};
pub use value::{NbtCompound, NbtList, NbtRoot, NbtValue};
pub use write::write_root;

/// NBT tag type IDs
pub mod tag_type {
    pub const END: u8 = 0;
    pub const BYTE: u8 = 1;
    pub const SHORT: u8 = 2;
    pub const INT: u8 = 3;
    pub const LONG: u8 = 4;
    pub const FLOAT: u8 = 5;
    pub const DOUBLE: u8 = 6;
    pub const BYTE_ARRAY: u8 = 7;
    pub const STRING: u8 = 8;
    pub const LIST: u8 = 9;
    pub const COMPOUND: u8 = 10;
    pub const INT_ARRAY: u8 = 11;
    pub const LONG_ARRAY: u8 = 12;

    /// Human readable name of a tag type, as used in error messages.
    #[must_use]
    pub fn name(id: u8) -> &'static str {
        match id {
            END => "TAG_End",
            BYTE => "TAG_Byte",
            SHORT => "TAG_Short",
            INT => "TAG_Int",
            LONG => "TAG_Long",
            FLOAT => "TAG_Float",
            DOUBLE => "TAG_Double",
            BYTE_ARRAY => "TAG_ByteArray",
            STRING => "TAG_String",
            LIST => "TAG_List",
            COMPOUND => "TAG_Compound",
            INT_ARRAY => "TAG_IntArray",
            LONG_ARRAY => "TAG_LongArray",
            _ => "TAG_Unknown",
        }
    }
}

/// Macro for building NBT compounds ergonomically
///
/// # Example
/// ```
/// use bedrock_nbt::nbt;
///
/// let compound = nbt! {
///     "name" => "minecraft:wool",
///     "states" => nbt! {
///         "color" => "red",
///     },
///     "version" => 1i32,
/// };
/// assert_eq!(compound.len(), 3);
/// ```
#[macro_export]
macro_rules! nbt {
    // Empty compound
    () => {
        $crate::NbtCompound::new()
    };

    // Compound with entries
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut compound = $crate::NbtCompound::new();
        $(
            compound.insert($key, $value);
        )*
        compound
    }};
}
