use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{NbtError, Result};
use crate::tag_type;
use crate::value::{NbtCompound, NbtList, NbtRoot, NbtValue};

/// Longest string payload accepted, in bytes.
pub const MAX_STRING_LEN: usize = 32767;

/// Deepest nesting of lists and compounds accepted, counting the root.
///
/// The reader recurses once per level, so this stays low enough to decode on
/// a default 2 MiB thread stack.
pub const MAX_DEPTH: usize = 256;

/// Decode every root tag in `bytes` until the buffer is exhausted.
///
/// Either all roots decode or none are returned.
pub fn read_multiple(bytes: &[u8]) -> Result<Vec<NbtRoot>> {
    let mut reader = bytes;
    let mut roots = Vec::new();
    while !reader.is_empty() {
        roots.push(read_root(&mut reader)?);
    }
    Ok(roots)
}

/// Decode a single root tag (type + name + payload) from the front of `reader`.
pub fn read_root(reader: &mut &[u8]) -> Result<NbtRoot> {
    let type_id = reader.read_u8()?;
    if type_id == tag_type::END {
        return Err(NbtError::UnexpectedEnd);
    }
    let name = read_string(reader)?;
    let value = read_value(reader, type_id, 0)?;
    Ok(NbtRoot { name, value })
}

fn read_value<R: Read>(reader: &mut R, type_id: u8, depth: usize) -> Result<NbtValue> {
    Ok(match type_id {
        tag_type::BYTE => NbtValue::Byte(reader.read_i8()?),
        tag_type::SHORT => NbtValue::Short(reader.read_i16::<LittleEndian>()?),
        tag_type::INT => NbtValue::Int(read_varint(reader)?),
        tag_type::LONG => NbtValue::Long(read_varlong(reader)?),
        tag_type::FLOAT => NbtValue::Float(reader.read_f32::<LittleEndian>()?),
        tag_type::DOUBLE => NbtValue::Double(reader.read_f64::<LittleEndian>()?),
        tag_type::BYTE_ARRAY => NbtValue::ByteArray(read_byte_array(reader)?),
        tag_type::STRING => NbtValue::String(read_string(reader)?),
        tag_type::LIST => NbtValue::List(read_list(reader, deeper(depth)?)?),
        tag_type::COMPOUND => NbtValue::Compound(read_compound(reader, deeper(depth)?)?),
        tag_type::INT_ARRAY => NbtValue::IntArray(read_int_array(reader)?),
        tag_type::LONG_ARRAY => NbtValue::LongArray(read_long_array(reader)?),
        other => return Err(NbtError::UnknownTag(other)),
    })
}

fn deeper(depth: usize) -> Result<usize> {
    let depth = depth + 1;
    if depth > MAX_DEPTH {
        return Err(NbtError::DepthLimit(MAX_DEPTH));
    }
    Ok(depth)
}

fn read_compound<R: Read>(reader: &mut R, depth: usize) -> Result<NbtCompound> {
    let mut compound = NbtCompound::new();
    loop {
        let type_id = reader.read_u8()?;
        if type_id == tag_type::END {
            return Ok(compound);
        }
        let name = read_string(reader)?;
        let value = read_value(reader, type_id, depth)?;
        compound.insert(name, value);
    }
}

fn read_list<R: Read>(reader: &mut R, depth: usize) -> Result<NbtList> {
    let element_type = reader.read_u8()?;
    let len = read_len(reader)?;
    if len == 0 {
        return Ok(NbtList::Empty);
    }

    Ok(match element_type {
        tag_type::END => return Err(NbtError::NonEmptyEndList),
        tag_type::BYTE => NbtList::Byte(read_n(reader, len, |r| Ok(r.read_i8()?))?),
        tag_type::SHORT => {
            NbtList::Short(read_n(reader, len, |r| Ok(r.read_i16::<LittleEndian>()?))?)
        }
        tag_type::INT => NbtList::Int(read_n(reader, len, read_varint)?),
        tag_type::LONG => NbtList::Long(read_n(reader, len, read_varlong)?),
        tag_type::FLOAT => {
            NbtList::Float(read_n(reader, len, |r| Ok(r.read_f32::<LittleEndian>()?))?)
        }
        tag_type::DOUBLE => {
            NbtList::Double(read_n(reader, len, |r| Ok(r.read_f64::<LittleEndian>()?))?)
        }
        tag_type::BYTE_ARRAY => NbtList::ByteArray(read_n(reader, len, read_byte_array)?),
        tag_type::STRING => NbtList::String(read_n(reader, len, read_string)?),
        tag_type::LIST => {
            let depth = deeper(depth)?;
            NbtList::List(read_n(reader, len, |r| read_list(r, depth))?)
        }
        tag_type::COMPOUND => {
            let depth = deeper(depth)?;
            NbtList::Compound(read_n(reader, len, |r| read_compound(r, depth))?)
        }
        tag_type::INT_ARRAY => NbtList::IntArray(read_n(reader, len, read_int_array)?),
        tag_type::LONG_ARRAY => NbtList::LongArray(read_n(reader, len, read_long_array)?),
        other => return Err(NbtError::UnknownTag(other)),
    })
}

/// Read `len` consecutive elements with `read`.
fn read_n<R: Read, T>(
    reader: &mut R,
    len: usize,
    mut read: impl FnMut(&mut R) -> Result<T>,
) -> Result<Vec<T>> {
    (0..len).map(|_| read(reader)).collect()
}

/// Read a signed length prefix (ZigZag VarInt), rejecting negative values.
fn read_len<R: Read>(reader: &mut R) -> Result<usize> {
    let len = read_varint(reader)?;
    usize::try_from(len).map_err(|_| NbtError::NegativeLength(len))
}

fn read_byte_array<R: Read>(reader: &mut R) -> Result<Vec<i8>> {
    let len = read_len(reader)?;
    let mut buf = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf.into_iter().map(|b| b as i8).collect())
}

fn read_int_array<R: Read>(reader: &mut R) -> Result<Vec<i32>> {
    let len = read_len(reader)?;
    read_n(reader, len, read_varint)
}

fn read_long_array<R: Read>(reader: &mut R) -> Result<Vec<i64>> {
    let len = read_len(reader)?;
    read_n(reader, len, read_varlong)
}

/// Read a string (unsigned VarInt byte length + UTF-8)
fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let len = read_unsigned_varint(reader)? as usize;
    if len > MAX_STRING_LEN {
        return Err(NbtError::StringTooLong {
            len,
            max: MAX_STRING_LEN,
        });
    }
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

// VarInt decoding
fn read_unsigned_varint<R: Read>(reader: &mut R) -> Result<u32> {
    let mut result = 0u32;
    let mut shift = 0;
    loop {
        let byte = reader.read_u8()?;
        result |= u32::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift >= 35 {
            return Err(NbtError::VarIntTooLarge);
        }
    }
    Ok(result)
}

fn read_unsigned_varlong<R: Read>(reader: &mut R) -> Result<u64> {
    let mut result = 0u64;
    let mut shift = 0;
    loop {
        let byte = reader.read_u8()?;
        result |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift >= 70 {
            return Err(NbtError::VarIntTooLarge);
        }
    }
    Ok(result)
}

/// Read a ZigZag encoded VarInt
fn read_varint<R: Read>(reader: &mut R) -> Result<i32> {
    let raw = read_unsigned_varint(reader)?;
    Ok((raw >> 1) as i32 ^ -((raw & 1) as i32))
}

/// Read a ZigZag encoded VarLong
fn read_varlong<R: Read>(reader: &mut R) -> Result<i64> {
    let raw = read_unsigned_varlong(reader)?;
    Ok((raw >> 1) as i64 ^ -((raw & 1) as i64))
}
