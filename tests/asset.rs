//! File and directory conversion into `.asset` files.
mod common;
use common::*;
use scriptgraph::prelude::*;
use std::fs;
use tempfile::TempDir;

fn converter() -> Converter {
    Converter::builder().guids(GuidStrategy::Sequential).build()
}

fn write_script(dir: &std::path::Path, relative: &str, code: &str) -> std::path::PathBuf {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, code).unwrap();
    path
}

#[cfg(test)]
mod asset_tests {
    use super::*;

    #[test]
    fn test_single_file_is_wrapped() {
        let dir = TempDir::new().unwrap();
        let input = write_script(dir.path(), "Player.cs", PLAYER_SCRIPT);
        let output = dir.path().join("out/Player.asset");

        convert_file(&converter(), &input, &output).unwrap();

        let asset = fs::read_to_string(&output).unwrap();
        assert!(asset.starts_with("%YAML 1.1\n%TAG !u! tag:unity3d.com,2011:\n--- !u!114 &11400000\n"));
        assert!(asset.contains("m_Script: {fileID: 11500000, guid: d2dc886499c26824283350fa532d087d, type: 3}"));
        assert!(asset.contains("    _json: '{\n    \\\"nest\\\": {"));
        assert!(asset.contains("Converted from Player.cs"));
        assert!(asset.ends_with("}'\n    _objectReferences: []\n"));
    }

    #[test]
    fn test_wrap_escapes_quotes() {
        let wrapped = wrap_asset(r#"{"text": "it's"}"#);
        assert!(wrapped.contains(r#"_json: '{\"text\": \"it''s\"}'"#));
    }

    #[test]
    fn test_non_cs_input_is_rejected() {
        let dir = TempDir::new().unwrap();
        let input = write_script(dir.path(), "notes.txt", "hello");
        let output = dir.path().join("notes.asset");

        let err = convert_file(&converter(), &input, &output).unwrap_err();
        assert!(matches!(err, AssetError::NotCSharp { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_unreadable_input_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Missing.cs");
        let output = dir.path().join("Missing.asset");

        let err = convert_file(&converter(), &input, &output).unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_directory_mirrors_relative_paths() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_script(input.path(), "Player.cs", PLAYER_SCRIPT);
        write_script(input.path(), "AI/Enemy.cs", ORDER_SCRIPT);
        write_script(input.path(), "README.md", "# scripts");

        let flat = convert_dir(&converter(), input.path(), output.path(), false).unwrap();
        assert_eq!(flat.converted, vec![output.path().join("Player.asset")]);
        assert!(!output.path().join("AI").exists());

        let deep = convert_dir(&converter(), input.path(), output.path(), true).unwrap();
        assert!(deep.is_success());
        assert_eq!(deep.converted.len(), 2);
        assert!(output.path().join("AI/Enemy.asset").is_file());
    }

    #[test]
    fn test_directory_without_sources() {
        let input = TempDir::new().unwrap();
        write_script(input.path(), "README.md", "# scripts");

        let err = convert_dir(&converter(), input.path(), input.path(), true).unwrap_err();
        assert!(matches!(err, AssetError::NoSources { .. }));
    }

    #[test]
    fn test_path_defaults_to_input_location() {
        let dir = TempDir::new().unwrap();
        let input = write_script(dir.path(), "Player.cs", PLAYER_SCRIPT);

        let report = convert_path(&converter(), &input, None, false).unwrap();
        assert_eq!(report.converted, vec![dir.path().join("Player.asset")]);
        assert!(dir.path().join("Player.asset").is_file());
    }

    #[test]
    fn test_directory_defaults_to_its_parent() {
        let dir = TempDir::new().unwrap();
        write_script(dir.path(), "Scripts/Player.cs", PLAYER_SCRIPT);

        let report = convert_path(&converter(), &dir.path().join("Scripts"), None, false).unwrap();
        assert_eq!(report.converted, vec![dir.path().join("Player.asset")]);
        assert!(!dir.path().join("Scripts/Player.asset").exists());
    }

    #[test]
    fn test_missing_path_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = convert_path(&converter(), &dir.path().join("nope"), None, false).unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
    }
}
