use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::tag_type;
use crate::value::{NbtCompound, NbtList, NbtValue};

/// Write a root tag (type + name + payload).
pub fn write_root<W: Write>(writer: &mut W, name: &str, value: &NbtValue) -> io::Result<()> {
    value.write_named(writer, name)
}

impl NbtCompound {
    /// Serialize to network NBT format (type byte + empty name + content)
    pub fn to_network_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_network(&mut buf)?;
        Ok(buf)
    }

    /// Write this compound as an unnamed root tag.
    pub fn write_network<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(tag_type::COMPOUND)?;
        write_string(writer, "")?;
        self.write_content(writer)
    }

    /// Write compound content (entries + end tag)
    fn write_content<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (name, value) in self.iter() {
            value.write_named(writer, name)?;
        }
        writer.write_u8(tag_type::END)
    }
}

impl NbtValue {
    /// Write a named tag (type + name + value)
    fn write_named<W: Write>(&self, writer: &mut W, name: &str) -> io::Result<()> {
        writer.write_u8(self.type_id())?;
        write_string(writer, name)?;
        self.write_content(writer)
    }

    /// Write the tag content (no type, no name)
    fn write_content<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Self::Byte(v) => writer.write_i8(*v),
            Self::Short(v) => writer.write_i16::<LittleEndian>(*v),
            Self::Int(v) => write_varint(writer, *v),
            Self::Long(v) => write_varlong(writer, *v),
            Self::Float(v) => writer.write_f32::<LittleEndian>(*v),
            Self::Double(v) => writer.write_f64::<LittleEndian>(*v),
            Self::ByteArray(v) => write_byte_array(writer, v),
            Self::String(v) => write_string(writer, v),
            Self::List(list) => list.write_content(writer),
            Self::Compound(compound) => compound.write_content(writer),
            Self::IntArray(v) => write_int_array(writer, v),
            Self::LongArray(v) => write_long_array(writer, v),
        }
    }
}

impl NbtList {
    /// Write list content (element type + length + elements)
    fn write_content<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.element_type_id())?;
        write_varint(writer, self.len() as i32)?;

        match self {
            Self::Empty => {}
            Self::Byte(v) => {
                for b in v {
                    writer.write_i8(*b)?;
                }
            }
            Self::Short(v) => {
                for s in v {
                    writer.write_i16::<LittleEndian>(*s)?;
                }
            }
            Self::Int(v) => {
                for i in v {
                    write_varint(writer, *i)?;
                }
            }
            Self::Long(v) => {
                for l in v {
                    write_varlong(writer, *l)?;
                }
            }
            Self::Float(v) => {
                for f in v {
                    writer.write_f32::<LittleEndian>(*f)?;
                }
            }
            Self::Double(v) => {
                for d in v {
                    writer.write_f64::<LittleEndian>(*d)?;
                }
            }
            Self::ByteArray(v) => {
                for arr in v {
                    write_byte_array(writer, arr)?;
                }
            }
            Self::String(v) => {
                for s in v {
                    write_string(writer, s)?;
                }
            }
            Self::List(v) => {
                for list in v {
                    list.write_content(writer)?;
                }
            }
            Self::Compound(v) => {
                for compound in v {
                    compound.write_content(writer)?;
                }
            }
            Self::IntArray(v) => {
                for arr in v {
                    write_int_array(writer, arr)?;
                }
            }
            Self::LongArray(v) => {
                for arr in v {
                    write_long_array(writer, arr)?;
                }
            }
        }
        Ok(())
    }
}

fn write_byte_array<W: Write>(writer: &mut W, v: &[i8]) -> io::Result<()> {
    write_varint(writer, v.len() as i32)?;
    for b in v {
        writer.write_i8(*b)?;
    }
    Ok(())
}

fn write_int_array<W: Write>(writer: &mut W, v: &[i32]) -> io::Result<()> {
    write_varint(writer, v.len() as i32)?;
    for i in v {
        write_varint(writer, *i)?;
    }
    Ok(())
}

fn write_long_array<W: Write>(writer: &mut W, v: &[i64]) -> io::Result<()> {
    write_varint(writer, v.len() as i32)?;
    for l in v {
        write_varlong(writer, *l)?;
    }
    Ok(())
}

/// Write a string (unsigned VarInt length + UTF-8)
fn write_string<W: Write>(writer: &mut W, s: &str) -> io::Result<()> {
    let bytes = s.as_bytes();
    write_unsigned_varlong(writer, bytes.len() as u64)?;
    writer.write_all(bytes)
}

fn write_unsigned_varlong<W: Write>(writer: &mut W, mut value: u64) -> io::Result<()> {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        writer.write_u8(byte)?;
        if value == 0 {
            return Ok(());
        }
    }
}

/// Write a ZigZag encoded VarInt
fn write_varint<W: Write>(writer: &mut W, value: i32) -> io::Result<()> {
    let zigzag = ((value << 1) ^ (value >> 31)) as u32;
    write_unsigned_varlong(writer, u64::from(zigzag))
}

/// Write a ZigZag encoded VarLong
fn write_varlong<W: Write>(writer: &mut W, value: i64) -> io::Result<()> {
    let zigzag = ((value << 1) ^ (value >> 63)) as u64;
    write_unsigned_varlong(writer, zigzag)
}
