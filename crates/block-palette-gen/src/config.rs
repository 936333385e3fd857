//! Output locations of the generated tables.
//!
//! ```
//! use std::path::Path;
//!
//! use block_palette_gen::{ConstantTable, GeneratorConfig};
//!
//! let config = GeneratorConfig::in_dir("src/generated");
//! assert_eq!(
//!     config.output_path(ConstantTable::StateNames),
//!     Path::new("src/generated/block_state_names.rs")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::emit::ConstantTable;

/// Directory the generated tables land in, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Where each generated table is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub type_names: PathBuf,
    pub state_names: PathBuf,
    pub state_string_values: PathBuf,
}

impl GeneratorConfig {
    /// The standard file layout rooted at `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            type_names: dir.join("block_type_names.rs"),
            state_names: dir.join("block_state_names.rs"),
            state_string_values: dir.join("block_state_string_values.rs"),
        }
    }

    #[must_use]
    pub fn output_path(&self, table: ConstantTable) -> &Path {
        match table {
            ConstantTable::TypeNames => &self.type_names,
            ConstantTable::StateNames => &self.state_names,
            ConstantTable::StateStringValues => &self.state_string_values,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_OUTPUT_DIR)
    }
}
