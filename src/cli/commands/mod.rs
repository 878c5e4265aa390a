//! CLI command implementations

pub mod classify;
pub mod palette;
pub mod transform;

use std::io::{Read, Write};
use std::path::{Component, Path, PathBuf};

use super::error::CliError;
use crate::model::{StyleLoader, StyleSaver};
use crate::models::StyleDocument;
use crate::storage::filesystem::FileSystemStorageBackend;
use crate::transform::TransformConfig;

/// Path argument meaning stdin (for input) or stdout (for output)
pub const STDIO: &str = "-";

/// Split a file path into a storage base directory and a file name
fn split_path(path: &str) -> Result<(PathBuf, String), CliError> {
    let path = Path::new(path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::InvalidArgument(format!("Not a file path: {}", path.display())))?
        .to_string();
    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => storage_base(parent),
        _ => PathBuf::from("."),
    };
    Ok((base, file_name))
}

/// Base directory for a path's parent. The storage backend refuses ".."
/// components, so they are resolved here, lexically when the directory does
/// not exist yet.
fn storage_base(parent: &Path) -> PathBuf {
    if let Ok(canonical) = parent.canonicalize() {
        return canonical;
    }
    let absolute = match std::env::current_dir() {
        Ok(cwd) if parent.is_relative() => cwd.join(parent),
        _ => parent.to_path_buf(),
    };
    normalize_lexically(&absolute)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Load a style document from a file or stdin
pub async fn read_document(input: &str) -> Result<StyleDocument, CliError> {
    if input == STDIO {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::FileReadError(PathBuf::from("<stdin>"), e.to_string()))?;
        return Ok(StyleDocument::from_json_str(&content)?);
    }

    let (base, file_name) = split_path(input)?;
    let loader = StyleLoader::new(FileSystemStorageBackend::new(base));
    Ok(loader.load_style(&file_name).await?)
}

/// Write a style document to a file or stdout
pub async fn write_document(output: &str, document: &StyleDocument) -> Result<(), CliError> {
    if output == STDIO {
        let content = document.to_json_pretty()?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", content)
            .map_err(|e| CliError::FileWriteError(PathBuf::from("<stdout>"), e.to_string()))?;
        return Ok(());
    }

    let (base, file_name) = split_path(output)?;
    let saver = StyleSaver::new(FileSystemStorageBackend::new(base));
    Ok(saver.save_style(&file_name, document).await?)
}

/// Load the configuration file if one was given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<TransformConfig, CliError> {
    match path {
        Some(path) => Ok(TransformConfig::load(path)?),
        None => Ok(TransformConfig::default()),
    }
}
