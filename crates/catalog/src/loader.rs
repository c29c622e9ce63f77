//! Reads prototype documents from disk.
//!
//! File access lives here, outside the catalog core, which only ever sees
//! already-decoded documents.

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Errors from loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read a YAML prototype document and build a catalog from it.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading prototype document");
    let text = std::fs::read_to_string(path)?;
    Ok(Catalog::from_yaml_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "- mesh: a\n  neighbors:\n    0: [{{ mesh: b }}]\n- mesh: b").unwrap();

        let catalog = load_catalog(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn malformed_file_is_catalog_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "- neighbors: {{}}").unwrap();

        let result = load_catalog(tmp.path());
        assert!(matches!(
            result,
            Err(LoadError::Catalog(CatalogError::MalformedDocument { entry: Some(0), .. }))
        ));
    }
}
