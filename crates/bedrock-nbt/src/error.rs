use std::io;

use thiserror::Error;

/// Errors produced while decoding network NBT.
#[derive(Error, Debug)]
pub enum NbtError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("unknown tag type {0}")]
    UnknownTag(u8),
    #[error("found TAG_End where a root tag was expected")]
    UnexpectedEnd,
    #[error("VarInt too large")]
    VarIntTooLarge,
    #[error("string too long: {len} > {max}")]
    StringTooLong { len: usize, max: usize },
    #[error("negative length: {0}")]
    NegativeLength(i32),
    #[error("cannot have a non-empty list of TAG_End")]
    NonEmptyEndList,
    #[error("maximum nesting depth of {0} exceeded")]
    DepthLimit(usize),
    #[error("string is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("expected root tag to be TAG_Compound, found {0}")]
    RootNotCompound(&'static str),
}

pub type Result<T> = std::result::Result<T, NbtError>;
