//! Constant names for generated tables.
//!
//! Names are derived mechanically: ASCII letters are uppercased and every other
//! character is kept as is. Nothing is substituted: a derived name that is not
//! a valid identifier (`MINECRAFT:CARDINAL_DIRECTION`) is written unchanged and
//! logged as a warning.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstantError {
    #[error("block type ID \"{0}\" has no namespace separator ':'")]
    MissingNamespace(String),
    #[error("constant `{name}` would be declared for both \"{first}\" and \"{second}\"")]
    DuplicateConstant {
        name: String,
        first: String,
        second: String,
    },
}

/// Uppercase ASCII letters only; non-ASCII characters pass through unchanged.
///
/// ```
/// use block_palette_gen::naming::constant_name;
///
/// assert_eq!(constant_name("facing_direction"), "FACING_DIRECTION");
/// assert_eq!(constant_name("größe"), "GRößE");
/// assert_eq!(constant_name(""), "");
/// ```
#[must_use]
pub fn constant_name(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

/// Drop the namespace (everything up to and including the first `:`) and
/// uppercase the rest.
///
/// ```
/// use block_palette_gen::naming::constant_name_from_type_id;
///
/// assert_eq!(constant_name_from_type_id("minecraft:oak_log").unwrap(), "OAK_LOG");
/// assert!(constant_name_from_type_id("oak_log").is_err());
/// ```
pub fn constant_name_from_type_id(id: &str) -> Result<String, ConstantError> {
    id.split_once(':')
        .map(|(_, path)| constant_name(path))
        .ok_or_else(|| ConstantError::MissingNamespace(id.to_string()))
}

#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}

/// Tracks the constants declared in one generated file.
#[derive(Debug, Default)]
pub struct ConstantSet {
    declared: HashMap<String, String>,
}

impl ConstantSet {
    /// Register `name` for `value`, rejecting repeated names.
    ///
    /// A name that is not a valid identifier is still accepted, with a warning.
    pub fn declare(&mut self, name: &str, value: &str) -> Result<(), ConstantError> {
        if !is_valid_identifier(name) {
            warn!(constant = name, value, "constant name is not a valid Rust identifier");
        }
        if let Some(first) = self.declared.get(name) {
            return Err(ConstantError::DuplicateConstant {
                name: name.to_string(),
                first: first.clone(),
                second: value.to_string(),
            });
        }
        self.declared.insert(name.to_string(), value.to_string());
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
