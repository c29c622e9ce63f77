use tileview_common::DirectionError;

/// Errors from building or querying a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The source document is structurally invalid. `entry` is the zero-based
    /// position of the offending top-level entry, when there is one.
    #[error("malformed document{}: {reason}", entry_suffix(.entry))]
    MalformedDocument {
        entry: Option<usize>,
        reason: String,
    },
    #[error("prototype index {index} out of range (catalog has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    InvalidDirection(#[from] DirectionError),
}

impl CatalogError {
    pub(crate) fn malformed(entry: Option<usize>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            entry,
            reason: reason.into(),
        }
    }
}

fn entry_suffix(entry: &Option<usize>) -> String {
    entry.map(|i| format!(" at entry {i}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_entry() {
        let e = CatalogError::malformed(Some(3), "mesh is missing");
        assert_eq!(e.to_string(), "malformed document at entry 3: mesh is missing");

        let e = CatalogError::malformed(None, "top level must be a sequence");
        assert_eq!(e.to_string(), "malformed document: top level must be a sequence");
    }

    #[test]
    fn direction_error_converts() {
        let e: CatalogError = DirectionError::Index(9).into();
        assert!(matches!(e, CatalogError::InvalidDirection(DirectionError::Index(9))));
    }
}
