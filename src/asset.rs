//! Reading `.cs` sources and writing Unity `.asset` files around the graph JSON.
//!
//! This is the only module that touches the filesystem. Every output is written
//! to a temporary sibling first and moved into place once complete, so a failed
//! conversion never leaves a truncated asset behind.

use crate::convert::Converter;
use crate::error::AssetError;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

pub const SOURCE_EXTENSION: &str = "cs";
pub const ASSET_EXTENSION: &str = "asset";

const ASSET_HEADER: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!114 &11400000
MonoBehaviour:
  m_ObjectHideFlags: 0
  m_CorrespondingSourceObject: {fileID: 0}
  m_PrefabInstance: {fileID: 0}
  m_PrefabAsset: {fileID: 0}
  m_GameObject: {fileID: 0}
  m_Enabled: 1
  m_EditorHideFlags: 0
  m_Script: {fileID: 11500000, guid: d2dc886499c26824283350fa532d087d, type: 3}
  m_Name: \n  m_EditorClassIdentifier: \n  _data:
    _json: '";

const ASSET_FOOTER: &str = "'
    _objectReferences: []
";

/// Outcome of converting every source under a directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Written asset paths, in the order their sources were visited.
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, AssetError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Embeds graph JSON as the single-quoted `_json` scalar of a graph asset.
pub fn wrap_asset(json: &str) -> String {
    let mut asset = String::with_capacity(ASSET_HEADER.len() + json.len() + ASSET_FOOTER.len());
    asset.push_str(ASSET_HEADER);
    asset.push_str(&escape_json(json));
    asset.push_str(ASSET_FOOTER);
    asset
}

fn escape_json(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\'', "''")
}

fn is_source_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(SOURCE_EXTENSION))
}

/// Where the asset for `source` goes when `input_root` is mirrored into `output_dir`.
pub fn asset_path_for(source: &Path, input_root: &Path, output_dir: &Path) -> PathBuf {
    let relative = source
        .strip_prefix(input_root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .or_else(|| source.file_name().map(Path::new))
        .unwrap_or(source);
    output_dir.join(relative).with_extension(ASSET_EXTENSION)
}

/// Converts one `.cs` file and writes the wrapped asset to `output`.
pub fn convert_file(converter: &Converter, input: &Path, output: &Path) -> Result<(), AssetError> {
    if !is_source_file(input) {
        return Err(AssetError::NotCSharp {
            path: input.to_path_buf(),
        });
    }
    let code = fs::read_to_string(input).map_err(|source| AssetError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let json = match input.file_name().and_then(OsStr::to_str) {
        Some(file_name) => converter.convert_named(&code, file_name)?,
        None => converter.convert(&code)?,
    };
    write_atomically(output, wrap_asset(&json).as_bytes())?;

    tracing::info!(input = %input.display(), output = %output.display(), "converted");
    Ok(())
}

/// Converts every `.cs` file in `input`, descending into subdirectories when
/// `recursive` is set. A file that fails is recorded and the batch continues.
pub fn convert_dir(
    converter: &Converter,
    input: &Path,
    output_dir: &Path,
    recursive: bool,
) -> Result<BatchReport, AssetError> {
    let mut walker = WalkDir::new(input).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut sources = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_source_file(entry.path()) {
            sources.push(entry.into_path());
        }
    }
    if sources.is_empty() {
        return Err(AssetError::NoSources {
            path: input.to_path_buf(),
        });
    }

    let mut report = BatchReport::default();
    for source in sources {
        let output = asset_path_for(&source, input, output_dir);
        match convert_file(converter, &source, &output) {
            Ok(()) => report.converted.push(output),
            Err(err) => {
                tracing::warn!(source = %source.display(), error = %err, "conversion failed");
                report.failed.push((source, err));
            }
        }
    }
    tracing::info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}

/// Converts a file or a directory. Without `output_dir`, assets land in the
/// directory containing `input`, whether it is a file or a directory.
pub fn convert_path(
    converter: &Converter,
    input: &Path,
    output_dir: Option<&Path>,
    recursive: bool,
) -> Result<BatchReport, AssetError> {
    let output_dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    if input.is_file() {
        let output = asset_path_for(input, input, &output_dir);
        convert_file(converter, input, &output)?;
        Ok(BatchReport {
            converted: vec![output],
            failed: Vec::new(),
        })
    } else if input.is_dir() {
        convert_dir(converter, input, &output_dir, recursive)
    } else {
        Err(AssetError::NotFound {
            path: input.to_path_buf(),
        })
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), AssetError> {
    let write_error = |source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    file.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
