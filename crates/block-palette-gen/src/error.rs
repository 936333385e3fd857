//! Error types for palette loading and code generation.

use std::io;
use std::path::PathBuf;

use bedrock_nbt::NbtError;
use thiserror::Error;

use crate::naming::ConstantError;
use crate::state::BlockStateError;

/// Why palette bytes could not be decoded into block states.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Nbt(#[from] NbtError),
    #[error("palette entry {index}")]
    State {
        index: usize,
        #[source]
        source: BlockStateError,
    },
}

/// Any failure of a generator run. Every variant is fatal.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to read block palette file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid block palette file {}", path.display())]
    InvalidPalette {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Constant(#[from] ConstantError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
