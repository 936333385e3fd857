//! Sorted, deduplicated summary of a palette: the input to every emitter.
//!
//! ```
//! use block_palette_gen::{BlockState, PaletteReport, PropertyValue};
//!
//! let states = [
//!     BlockState::new("a:wool", vec![("color".to_string(), PropertyValue::from("red"))], 0),
//!     BlockState::new("a:wool", vec![("color".to_string(), PropertyValue::from("blue"))], 0),
//! ];
//! let report = PaletteReport::build(&states);
//! assert_eq!(report.type_names.len(), 1);
//! assert_eq!(report.string_values("color").collect::<Vec<_>>(), ["blue", "red"]);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::state::{BlockState, PropertyValue};

/// Distinct type names and property values seen across a palette.
///
/// Both collections are ordered byte-wise, so iteration order is the emission
/// order regardless of how the palette was laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteReport {
    pub type_names: BTreeSet<String>,
    pub property_values: BTreeMap<String, BTreeSet<PropertyValue>>,
}

impl PaletteReport {
    pub fn build<'a>(states: impl IntoIterator<Item = &'a BlockState>) -> Self {
        let mut report = Self::default();
        for state in states {
            if !report.type_names.contains(state.name()) {
                report.type_names.insert(state.name().to_string());
            }
            for (property, value) in state.properties() {
                report
                    .property_values
                    .entry(property.to_string())
                    .or_default()
                    .insert(value.clone());
            }
        }
        report
    }

    /// String-typed values of `property`, sorted. Integer values are skipped.
    pub fn string_values<'a>(&'a self, property: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.property_values
            .get(property)
            .into_iter()
            .flatten()
            .filter_map(PropertyValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, properties: &[(&str, PropertyValue)]) -> BlockState {
        BlockState::new(
            name,
            properties
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            0,
        )
    }

    #[test]
    fn test_build_report() {
        let states = [
            state("a:stone", &[]),
            state("a:dirt", &[("color", "red".into())]),
            state("a:dirt", &[("color", "blue".into())]),
            state("a:dirt", &[("color", "red".into()), ("age", PropertyValue::Int(2))]),
        ];

        let report = PaletteReport::build(&states);

        let type_names: Vec<&str> = report.type_names.iter().map(String::as_str).collect();
        assert_eq!(type_names, ["a:dirt", "a:stone"]);

        let properties: Vec<&str> = report.property_values.keys().map(String::as_str).collect();
        assert_eq!(properties, ["age", "color"]);

        let colors: Vec<&PropertyValue> = report.property_values["color"].iter().collect();
        assert_eq!(
            colors,
            [&PropertyValue::from("blue"), &PropertyValue::from("red")]
        );
    }

    #[test]
    fn test_values_strictly_increasing() {
        let states: Vec<BlockState> = (0..20)
            .rev()
            .map(|age| state("a:fire", &[("age", PropertyValue::Int(age)), ("age_str", "x".into())]))
            .collect();
        let report = PaletteReport::build(&states);

        let ages: Vec<&PropertyValue> = report.property_values["age"].iter().collect();
        assert_eq!(ages.len(), 20);
        assert!(ages.windows(2).all(|w| w[0].to_string() < w[1].to_string()));
        assert_eq!(report.property_values["age_str"].len(), 1);
    }

    #[test]
    fn test_string_values_skip_integers() {
        let states = [
            state("a:x", &[("mixed", PropertyValue::Int(0))]),
            state("a:x", &[("mixed", "0".into())]),
            state("a:x", &[("mixed", "north".into())]),
            state("a:y", &[("count", PropertyValue::Int(1))]),
        ];
        let report = PaletteReport::build(&states);

        assert_eq!(report.property_values["mixed"].len(), 3);
        assert_eq!(report.string_values("mixed").collect::<Vec<_>>(), ["0", "north"]);
        assert_eq!(report.string_values("count").count(), 0);
        assert_eq!(report.string_values("missing").count(), 0);
    }
}
