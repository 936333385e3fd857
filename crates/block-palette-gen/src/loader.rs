//! Reading block palettes from disk.
//!
//! ```
//! use block_palette_gen::decode_palette;
//!
//! let dictionary = decode_palette(&[]).unwrap();
//! assert!(dictionary.is_empty());
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::dictionary::BlockStateDictionary;
use crate::error::{DecodeError, GenerateError};
use crate::state::BlockState;

/// Decode a palette: concatenated network NBT compounds, one per block state.
///
/// Nothing is returned unless every record decodes.
pub fn decode_palette(bytes: &[u8]) -> Result<BlockStateDictionary, DecodeError> {
    let roots = bedrock_nbt::read_multiple(bytes)?;
    debug!(records = roots.len(), "decoded palette records");

    let states = roots
        .into_iter()
        .enumerate()
        .map(|(index, root)| -> Result<BlockState, DecodeError> {
            let compound = root.into_compound()?;
            BlockState::from_nbt(&compound).map_err(|source| DecodeError::State { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BlockStateDictionary::from_states(states))
}

/// Read and decode the palette file at `path`.
pub fn load_palette(path: &Path) -> Result<BlockStateDictionary, GenerateError> {
    let bytes = fs::read(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = bytes.len(), path = %path.display(), "read palette file");

    decode_palette(&bytes).map_err(|source| GenerateError::InvalidPalette {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use bedrock_nbt::{NbtError, nbt};

    use super::*;
    use crate::state::{BlockStateError, PropertyValue};

    fn record(name: &str, color: &str) -> Vec<u8> {
        let record = nbt! {
            "name" => name,
            "states" => nbt! { "color" => color },
            "version" => 1i32,
        };
        record.to_network_bytes().unwrap()
    }

    #[test]
    fn test_decode_concatenated_records() {
        let mut bytes = record("minecraft:wool", "red");
        bytes.extend(record("minecraft:wool", "blue"));
        bytes.extend(record("minecraft:carpet", "red"));

        let dictionary = decode_palette(&bytes).unwrap();
        assert_eq!(dictionary.len(), 3);

        let colors: Vec<&PropertyValue> = dictionary
            .states()
            .filter_map(|state| state.property("color"))
            .collect();
        assert_eq!(
            colors,
            [
                &PropertyValue::from("red"),
                &PropertyValue::from("blue"),
                &PropertyValue::from("red"),
            ]
        );
        assert_eq!(dictionary.entry(1).map(|e| e.meta), Some(1));
        assert_eq!(dictionary.entry(2).map(|e| e.meta), Some(0));
    }

    #[test]
    fn test_empty_palette() {
        assert!(decode_palette(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_bad_record_reports_index() {
        let mut bytes = record("minecraft:wool", "red");
        bytes.extend(nbt! { "name" => "minecraft:wool" }.to_network_bytes().unwrap());

        let err = decode_palette(&bytes).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::State {
                index: 1,
                source: BlockStateError::MissingTag("states")
            }
        ));
        assert_eq!(err.to_string(), "palette entry 1");
    }

    #[test]
    fn test_non_compound_root() {
        let mut bytes = Vec::new();
        bedrock_nbt::write_root(&mut bytes, "", &5i32.into()).unwrap();

        let err = decode_palette(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::Nbt(NbtError::RootNotCompound("TAG_Int"))));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = decode_palette(b"not a palette").unwrap_err();
        assert!(matches!(err, DecodeError::Nbt(_)));
    }
}
