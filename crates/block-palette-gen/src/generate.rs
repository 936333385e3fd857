//! One generator run: palette file in, three constant tables out.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::emit::ConstantTable;
use crate::error::Result;
use crate::loader::load_palette;
use crate::report::PaletteReport;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub states: usize,
    pub type_names: usize,
    pub properties: usize,
    pub string_values: usize,
    pub written: Vec<PathBuf>,
}

/// Load `palette`, build the report and write every [`ConstantTable`].
///
/// Tables are written in [`ConstantTable::ALL`] order and the run stops at the
/// first failure; tables already written are left in place.
pub fn generate(palette: &Path, config: &GeneratorConfig) -> Result<GenerationSummary> {
    let dictionary = load_palette(palette)?;
    info!("Loaded {} block states from {}", dictionary.len(), palette.display());

    let report = PaletteReport::build(dictionary.states());
    let string_values: usize = report
        .property_values
        .keys()
        .map(|property| report.string_values(property).count())
        .sum();
    debug!(
        type_names = report.type_names.len(),
        properties = report.property_values.len(),
        string_values,
        "built palette report"
    );

    let mut written = Vec::with_capacity(ConstantTable::ALL.len());
    for table in ConstantTable::ALL {
        let path = config.output_path(table);
        table.emit(&report, path)?;
        written.push(path.to_path_buf());
    }

    Ok(GenerationSummary {
        states: dictionary.len(),
        type_names: report.type_names.len(),
        properties: report.property_values.len(),
        string_values,
        written,
    })
}
