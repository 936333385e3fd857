//! End-to-end runs of the generator against palettes built in memory.

use std::fs;
use std::path::Path;

use bedrock_nbt::{NbtCompound, nbt};
use block_palette_gen::{
    ConstantError, DecodeError, GenerateError, GeneratorConfig, generate,
};
use pretty_assertions::assert_eq;

const HEADER: &str = "// This file is generated automatically from the block palette for the current version. Do not edit it manually.\n\
                      // Regenerate it with `block-palette-gen <palette-file>`.\n\n";

fn block(name: &str, states: NbtCompound) -> NbtCompound {
    nbt! {
        "name" => name,
        "states" => states,
        "version" => 18_090_528i32,
    }
}

fn write_palette(dir: &Path, blocks: &[NbtCompound]) -> std::path::PathBuf {
    let bytes: Vec<u8> = blocks
        .iter()
        .flat_map(|block| block.to_network_bytes().unwrap())
        .collect();
    let path = dir.join("block_palette.nbt");
    fs::write(&path, bytes).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn realistic_palette() -> Vec<NbtCompound> {
    let mut blocks = vec![block("minecraft:air", nbt! {})];
    for direction in 0..4i32 {
        for open in [false, true] {
            blocks.push(block(
                "minecraft:wooden_door",
                nbt! {
                    "direction" => direction,
                    "door_hinge_bit" => false,
                    "open_bit" => open,
                    "upper_block_bit" => false,
                },
            ));
        }
    }
    for color in ["white", "orange", "magenta", "light_blue", "yellow"] {
        blocks.push(block("minecraft:wool", nbt! { "color" => color }));
        blocks.push(block("minecraft:carpet", nbt! { "color" => color }));
    }
    for wood in ["oak", "spruce", "birch"] {
        for axis in ["y", "x", "z"] {
            blocks.push(block(
                "minecraft:log",
                nbt! {
                    "old_log_type" => wood,
                    "pillar_axis" => axis,
                },
            ));
        }
    }
    blocks.push(block("minecraft:stone", nbt! { "stone_type" => "stone" }));
    blocks.push(block("minecraft:stone", nbt! { "stone_type" => "granite" }));
    blocks
}

/// Constant names declared in a generated file, in order.
fn constant_names(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("pub const "))
        .filter_map(|rest| rest.split_once(':').map(|(name, _)| name))
        .collect()
}

/// String literals assigned in a generated file, in order.
fn constant_values(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter_map(|line| line.split_once(" = \""))
        .filter_map(|(_, rest)| rest.strip_suffix("\";"))
        .collect()
}

#[test]
fn test_small_palette_output() {
    let dir = tempfile::tempdir().unwrap();
    let palette = write_palette(
        dir.path(),
        &[
            block("a:stone", nbt! {}),
            block("a:dirt", nbt! { "color" => "red" }),
            block("a:dirt", nbt! { "color" => "blue" }),
        ],
    );
    let config = GeneratorConfig::in_dir(dir.path().join("out"));

    let summary = generate(&palette, &config).unwrap();
    assert_eq!(summary.states, 3);
    assert_eq!(summary.type_names, 2);
    assert_eq!(summary.properties, 1);
    assert_eq!(summary.string_values, 2);
    assert_eq!(
        summary.written,
        [
            config.type_names.clone(),
            config.state_names.clone(),
            config.state_string_values.clone(),
        ]
    );

    assert_eq!(
        read(&config.type_names),
        format!(
            "{HEADER}/// Block type IDs present in the block palette.\n\
             pub enum BlockTypeNames {{}}\n\
             \n\
             impl BlockTypeNames {{\n\
             \x20   pub const DIRT: &str = \"a:dirt\";\n\
             \x20   pub const STONE: &str = \"a:stone\";\n\
             }}\n"
        )
    );
    assert_eq!(
        read(&config.state_names),
        format!(
            "{HEADER}/// Block state property names present in the block palette.\n\
             pub enum BlockStateNames {{}}\n\
             \n\
             impl BlockStateNames {{\n\
             \x20   pub const COLOR: &str = \"color\";\n\
             }}\n"
        )
    );
    assert_eq!(
        read(&config.state_string_values),
        format!(
            "{HEADER}/// String values of block state properties present in the block palette.\n\
             pub enum BlockStateStringValues {{}}\n\
             \n\
             impl BlockStateStringValues {{\n\
             \x20   pub const COLOR_BLUE: &str = \"blue\";\n\
             \x20   pub const COLOR_RED: &str = \"red\";\n\
             \n\
             }}\n"
        )
    );
}

#[test]
fn test_realistic_palette() {
    let dir = tempfile::tempdir().unwrap();
    let palette = write_palette(dir.path(), &realistic_palette());
    let config = GeneratorConfig::in_dir(dir.path().join("out"));

    generate(&palette, &config).unwrap();

    let type_names = read(&config.type_names);
    assert_eq!(
        constant_names(&type_names),
        ["AIR", "CARPET", "LOG", "STONE", "WOODEN_DOOR", "WOOL"]
    );

    let state_names = read(&config.state_names);
    assert_eq!(
        constant_names(&state_names),
        [
            "COLOR",
            "DIRECTION",
            "DOOR_HINGE_BIT",
            "OLD_LOG_TYPE",
            "OPEN_BIT",
            "PILLAR_AXIS",
            "STONE_TYPE",
            "UPPER_BLOCK_BIT",
        ]
    );

    let string_values = read(&config.state_string_values);
    // Byte and int properties (direction, *_bit) never produce value constants
    assert!(!string_values.contains("DIRECTION_"));
    assert!(!string_values.contains("OPEN_BIT_"));
    assert_eq!(
        constant_values(&string_values),
        [
            "light_blue",
            "magenta",
            "orange",
            "white",
            "yellow",
            "birch",
            "oak",
            "spruce",
            "x",
            "y",
            "z",
            "granite",
            "stone",
        ]
    );
    // One blank separator per property with string values: color, old_log_type,
    // pillar_axis, stone_type
    assert_eq!(string_values.matches("\n\n").count(), 1 + 1 + 4);
}

#[test]
fn test_no_duplicate_constants_and_sorted_output() {
    let dir = tempfile::tempdir().unwrap();
    let palette = write_palette(dir.path(), &realistic_palette());
    let config = GeneratorConfig::in_dir(dir.path().join("out"));
    generate(&palette, &config).unwrap();

    for path in [&config.type_names, &config.state_names] {
        let source = read(path);
        let values = constant_values(&source);
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "{} is not strictly increasing: {values:?}",
            path.display()
        );
    }

    for path in [&config.type_names, &config.state_names, &config.state_string_values] {
        let source = read(path);
        let mut names = constant_names(&source);
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate constant in {}", path.display());
    }
}

#[test]
fn test_output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let mut blocks = realistic_palette();
    let palette = write_palette(dir.path(), &blocks);

    let first = GeneratorConfig::in_dir(dir.path().join("first"));
    let second = GeneratorConfig::in_dir(dir.path().join("second"));
    generate(&palette, &first).unwrap();
    generate(&palette, &second).unwrap();

    // A reordered palette describes the same set of states
    blocks.reverse();
    let reversed_palette = write_palette(dir.path(), &blocks);
    let reversed = GeneratorConfig::in_dir(dir.path().join("reversed"));
    generate(&reversed_palette, &reversed).unwrap();

    for (a, b, c) in [
        (&first.type_names, &second.type_names, &reversed.type_names),
        (&first.state_names, &second.state_names, &reversed.state_names),
        (
            &first.state_string_values,
            &second.state_string_values,
            &reversed.state_string_values,
        ),
    ] {
        let expected = fs::read(a).unwrap();
        assert_eq!(expected, fs::read(b).unwrap());
        assert_eq!(expected, fs::read(c).unwrap());
    }
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::in_dir(dir.path().join("out"));
    fs::create_dir_all(dir.path().join("out")).unwrap();
    fs::write(&config.type_names, "stale contents that are much longer than the new file").unwrap();

    let palette = write_palette(dir.path(), &[block("a:stone", nbt! {})]);
    generate(&palette, &config).unwrap();

    let type_names = read(&config.type_names);
    assert!(!type_names.contains("stale"));
    assert!(type_names.ends_with("    pub const STONE: &str = \"a:stone\";\n}\n"));
}

#[test]
fn test_missing_palette_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::in_dir(dir.path().join("out"));

    let err = generate(&dir.path().join("missing.nbt"), &config).unwrap_err();
    assert!(matches!(err, GenerateError::Read { .. }));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_invalid_palette_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let palette = dir.path().join("block_palette.nbt");
    let mut bytes = block("a:stone", nbt! {}).to_network_bytes().unwrap();
    bytes.extend_from_slice(&[10, 0, 8]);
    fs::write(&palette, bytes).unwrap();
    let config = GeneratorConfig::in_dir(dir.path().join("out"));

    let err = generate(&palette, &config).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidPalette {
            source: DecodeError::Nbt(_),
            ..
        }
    ));
    assert!(err.to_string().starts_with("invalid block palette file"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_write_failure_stops_later_tables() {
    let dir = tempfile::tempdir().unwrap();
    let palette = write_palette(dir.path(), &[block("a:dirt", nbt! { "color" => "red" })]);

    let mut config = GeneratorConfig::in_dir(dir.path().join("out"));
    // A directory where the second table should go makes its write fail
    config.state_names = dir.path().join("occupied");
    fs::create_dir_all(&config.state_names).unwrap();

    let err = generate(&palette, &config).unwrap_err();
    match err {
        GenerateError::Write { path, .. } => assert_eq!(path, config.state_names),
        other => panic!("expected a write error, got {other:?}"),
    }
    assert!(config.type_names.exists());
    assert!(!config.state_string_values.exists());
}

#[test]
fn test_namespaced_state_names_are_written_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let palette = write_palette(
        dir.path(),
        &[
            block("minecraft:stone", nbt! {}),
            block(
                "minecraft:furnace",
                nbt! { "minecraft:cardinal_direction" => "north" },
            ),
        ],
    );
    let config = GeneratorConfig::in_dir(dir.path().join("out"));

    let summary = generate(&palette, &config).unwrap();
    assert_eq!(summary.written.len(), 3);

    assert!(read(&config.state_names).contains(
        "    pub const MINECRAFT:CARDINAL_DIRECTION: &str = \"minecraft:cardinal_direction\";\n"
    ));
    assert!(
        read(&config.state_string_values)
            .contains("    pub const MINECRAFT:CARDINAL_DIRECTION_NORTH: &str = \"north\";\n")
    );
}

#[test]
fn test_duplicate_constant_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let palette = write_palette(
        dir.path(),
        &[block("a:wool", nbt! { "Color" => "red", "color" => "red" })],
    );
    let config = GeneratorConfig::in_dir(dir.path().join("out"));

    let err = generate(&palette, &config).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Constant(ConstantError::DuplicateConstant { .. })
    ));
    // Type names are written before the failing table; the failing one is not
    assert!(config.type_names.exists());
    assert!(!config.state_names.exists());
}
