//! Tabular Tree Loader
//!
//! Seeds a [`Tree`] from CSV rows of the shape `kind,path,content`.
//! The first row is a header and is skipped. `kind == "directory"` creates a
//! directory, anything else a file. Rows with fewer than two fields are
//! skipped; a missing content field means an empty file.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::tree::Tree;

const DIRECTORY_KIND: &str = "directory";

/// Failure to read or parse a tree description
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tree description: {0}")]
    Csv(#[from] csv::Error),
}

/// Load a description file into the tree. An empty path is a no-op.
///
/// Returns the number of rows applied.
pub async fn load_from_csv(tree: &mut Tree, path: &Path) -> Result<usize, LoadError> {
    if path.as_os_str().is_empty() {
        return Ok(0);
    }

    debug!("Reading tree description: {}", path.display());
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(tree, bytes.as_slice())
}

/// Apply every row of a CSV description, in order, to the tree.
pub fn load_from_reader<R: Read>(tree: &mut Tree, reader: R) -> Result<usize, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut applied = 0;
    for result in reader.records() {
        let record = result?;
        if record.len() < 2 {
            debug!("Skipping malformed row: {:?}", record);
            continue;
        }

        let kind = &record[0];
        let path = &record[1];
        let content = record.get(2).unwrap_or("");
        tree.create_node(path, kind == DIRECTORY_KIND, content);
        applied += 1;
    }

    debug!("Applied {} tree description rows", applied);
    Ok(applied)
}
