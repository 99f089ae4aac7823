//! The ordered table of benchmarked learning methods.
//!
//! Every result matrix stores one `(value, fail-flag)` column pair per
//! method. [`MethodTable`] maps each method to its display name and to the
//! two columns it owns, so aggregators never rely on positional lists.
//!
//! A custom table can be stored on disk as a JSON array:
//! ```json
//! [
//!   { "id": "biermann", "name": "Biermann et Feldman", "value_column": 0, "fail_column": 1 },
//!   { "id": "neider",   "name": "Neider et Jansen",    "value_column": 2, "fail_column": 3 }
//! ]
//! ```

use crate::error::{Result, TableError};
use crate::matrix::ResultMatrix;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Methods benchmarked by the reference experiments, in column order.
static DEFAULT_METHODS: &[(&str, &str)] = &[
    ("biermann", "Biermann et Feldman"),
    ("neider", "Neider et Jansen"),
    ("unary-cnf", "Unaire (CNF)"),
    ("binary-cnf", "Binaire (CNF)"),
    ("heule-verwer-cnf", "Heule et Verwer (CNF)"),
    ("unary-non-cnf", "Unaire (Non-CNF)"),
    ("binary-non-cnf", "Binaire (Non-CNF)"),
    ("heule-verwer-non-cnf", "Heule et Verwer (Non-CNF)"),
];

/// One benchmarked method and the matrix columns that belong to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub id: String,
    pub name: String,
    pub value_column: usize,
    pub fail_column: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodTable {
    methods: Vec<Method>,
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_METHODS)
    }
}

impl MethodTable {
    /// Builds a table with the standard layout: method `i` owns columns
    /// `2i` (value) and `2i + 1` (fail flag).
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let methods = pairs
            .iter()
            .enumerate()
            .map(|(i, (id, name))| Method {
                id: id.to_string(),
                name: name.to_string(),
                value_column: 2 * i,
                fail_column: 2 * i + 1,
            })
            .collect();
        Self { methods }
    }

    /// Builds a table from explicit entries, rejecting empty tables and
    /// duplicate ids.
    pub fn new(methods: Vec<Method>) -> Result<Self> {
        if methods.is_empty() {
            return Err(TableError::InvalidMethods("no methods defined".into()));
        }
        let mut seen = HashSet::new();
        for method in &methods {
            if !seen.insert(method.id.as_str()) {
                return Err(TableError::InvalidMethods(format!(
                    "duplicate method id {:?}",
                    method.id
                )));
            }
        }
        Ok(Self { methods })
    }

    /// Loads a table from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let methods: Vec<Method> = serde_json::from_str(&content)
            .map_err(|e| TableError::InvalidMethods(format!("{}: {e}", path.display())))?;
        Self::new(methods)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    /// Number of columns a matrix needs to hold every referenced column.
    pub fn required_columns(&self) -> usize {
        self.methods
            .iter()
            .map(|m| m.value_column.max(m.fail_column) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Fails with [`TableError::ColumnMismatch`] when `matrix` lacks a
    /// column referenced by this table.
    pub fn check_matrix(&self, matrix: &ResultMatrix, origin: &Path) -> Result<()> {
        let needed = self.required_columns();
        if matrix.cols() < needed {
            return Err(TableError::ColumnMismatch {
                path: origin.to_path_buf(),
                needed,
                found: matrix.cols(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_layout() {
        let table = MethodTable::default();
        assert_eq!(table.len(), 8);
        assert_eq!(table.required_columns(), 16);

        let last = table.iter().last().unwrap();
        assert_eq!(last.name, "Heule et Verwer (Non-CNF)");
        assert_eq!(last.value_column, 14);
        assert_eq!(last.fail_column, 15);
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        assert!(MethodTable::new(vec![]).is_err());

        let m = Method {
            id: "a".into(),
            name: "A".into(),
            value_column: 0,
            fail_column: 1,
        };
        let err = MethodTable::new(vec![m.clone(), m]).unwrap_err();
        assert!(matches!(err, TableError::InvalidMethods(_)));
    }

    #[test]
    fn test_load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"x","name":"X","value_column":2,"fail_column":0}}]"#
        )
        .unwrap();

        let table = MethodTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.required_columns(), 3);
    }

    #[test]
    fn test_check_matrix_column_mismatch() {
        let table = MethodTable::default();
        let matrix = ResultMatrix::parse("1 0 2 1\n", Path::new("m")).unwrap();
        let err = table.check_matrix(&matrix, Path::new("m")).unwrap_err();
        assert!(matches!(
            err,
            TableError::ColumnMismatch {
                needed: 16,
                found: 4,
                ..
            }
        ));
    }
}
