//! Block palette constant generator.
//!
//! Reads a Bedrock block palette (concatenated network NBT compounds, one per
//! block state) and regenerates three Rust constant tables from it:
//!
//! - `BlockTypeNames`: every block type ID, e.g. `STONE = "minecraft:stone"`
//! - `BlockStateNames`: every state property name, e.g. `COLOR = "color"`
//! - `BlockStateStringValues`: every string property value, e.g.
//!   `COLOR_RED = "red"`
//!
//! # Pipeline
//!
//! ```text
//! palette file ──▶ load_palette ──▶ BlockStateDictionary
//!                                        │
//!                                        ▼
//!                                  PaletteReport (sorted, deduplicated)
//!                                        │
//!                   ┌────────────────────┼────────────────────┐
//!                   ▼                    ▼                    ▼
//!            BlockTypeNames       BlockStateNames    BlockStateStringValues
//! ```
//!
//! Output is a pure function of the palette bytes, so rerunning on the same
//! palette rewrites byte-identical files.

pub mod config;
pub mod dictionary;
pub mod emit;
pub mod error;
pub mod generate;
pub mod loader;
pub mod naming;
pub mod report;
pub mod state;

pub use config::GeneratorConfig;
pub use dictionary::{BlockStateDictionary, BlockStateDictionaryEntry};
pub use emit::ConstantTable;
pub use error::{DecodeError, GenerateError};
pub use generate::{GenerationSummary, generate};
pub use loader::{decode_palette, load_palette};
pub use naming::ConstantError;
pub use report::PaletteReport;
pub use state::{BlockState, BlockStateError, PropertyValue};
