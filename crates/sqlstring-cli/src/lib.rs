//! # sqlstring-cli
//!
//! Renders SQL from JSON statement documents using the `sqlstring`
//! builders. Nothing is executed; the SQL is printed for another tool to
//! run.

pub mod document;
pub mod error;

use std::io::Read;
use std::path::Path;

pub use document::{parse_document, render_all, Statement};
pub use error::{Error, Result};

/// Reads a statement document from `path`, or from stdin when `path` is
/// `None` or `-`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the source cannot be read, otherwise the errors
/// of [`parse_document`].
pub fn load_document(path: Option<&Path>) -> Result<Vec<Statement>> {
    let text = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|source| Error::Io {
                path: p.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Io {
                    path: "-".into(),
                    source,
                })?;
            buf
        }
    };
    parse_document(&text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sqlstring::QuoteStyle;

    use super::*;

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"kind": "transaction", "action": "begin"}}, {{"kind": "delete", "table": "t", "where": "id = 1"}}]"#
        )
        .unwrap();

        let statements = load_document(Some(file.path())).unwrap();
        assert_eq!(
            render_all(&statements, QuoteStyle::Single, false),
            vec!["BEGIN TRANSACTION;", "DELETE FROM t  WHERE id = 1;"]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = load_document(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if *path == missing));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
