//! Rendering and writing of the generated constant tables.

use std::fs;
use std::path::Path;

use proc_macro2::Literal;
use tracing::{debug, info};

use crate::error::GenerateError;
use crate::naming::{ConstantError, ConstantSet, constant_name, constant_name_from_type_id};
use crate::report::PaletteReport;

/// The three generated tables, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantTable {
    /// `BlockTypeNames`: one constant per block type ID.
    TypeNames,
    /// `BlockStateNames`: one constant per property name.
    StateNames,
    /// `BlockStateStringValues`: one constant per string property value.
    StateStringValues,
}

/// A line inside the generated container.
enum Line {
    Constant { name: String, value: String },
    Separator,
}

impl ConstantTable {
    pub const ALL: [Self; 3] = [Self::TypeNames, Self::StateNames, Self::StateStringValues];

    #[must_use]
    pub fn container_name(self) -> &'static str {
        match self {
            Self::TypeNames => "BlockTypeNames",
            Self::StateNames => "BlockStateNames",
            Self::StateStringValues => "BlockStateStringValues",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Self::TypeNames => "Block type IDs present in the block palette.",
            Self::StateNames => "Block state property names present in the block palette.",
            Self::StateStringValues => {
                "String values of block state properties present in the block palette."
            }
        }
    }

    fn lines(self, report: &PaletteReport) -> Result<Vec<Line>, ConstantError> {
        let mut lines = Vec::new();
        match self {
            Self::TypeNames => {
                for id in &report.type_names {
                    lines.push(Line::Constant {
                        name: constant_name_from_type_id(id)?,
                        value: id.clone(),
                    });
                }
            }
            Self::StateNames => {
                for property in report.property_values.keys() {
                    lines.push(Line::Constant {
                        name: constant_name(property),
                        value: property.clone(),
                    });
                }
            }
            Self::StateStringValues => {
                for property in report.property_values.keys() {
                    let mut values: Vec<&str> = report.string_values(property).collect();
                    if values.is_empty() {
                        continue;
                    }
                    values.sort_unstable();
                    for value in values {
                        lines.push(Line::Constant {
                            name: constant_name(&format!("{property}_{value}")),
                            value: value.to_string(),
                        });
                    }
                    lines.push(Line::Separator);
                }
            }
        }
        Ok(lines)
    }

    /// Render the complete source file for this table.
    pub fn render(self, report: &PaletteReport) -> Result<String, ConstantError> {
        let container = self.container_name();
        let mut constants = ConstantSet::default();
        let mut out = format!(
            "// This file is generated automatically from the block palette for the current version. Do not edit it manually.\n\
             // Regenerate it with `block-palette-gen <palette-file>`.\n\
             \n\
             /// {summary}\n\
             pub enum {container} {{}}\n\
             \n\
             impl {container} {{\n",
            summary = self.summary(),
        );

        for line in self.lines(report)? {
            match line {
                Line::Constant { name, value } => {
                    constants.declare(&name, &value)?;
                    let literal = Literal::string(&value);
                    out.push_str(&format!("    pub const {name}: &str = {literal};\n"));
                }
                Line::Separator => out.push('\n'),
            }
        }

        out.push_str("}\n");
        debug!(table = container, constants = constants.len(), "rendered constant table");
        Ok(out)
    }

    /// Render and write the table to `path`, replacing any previous contents.
    pub fn emit(self, report: &PaletteReport, path: &Path) -> Result<(), GenerateError> {
        let content = self.render(report)?;

        let write_err = |source: std::io::Error| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)?;

        info!("Generated {}", path.display());
        Ok(())
    }
}
