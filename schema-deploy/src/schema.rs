//! Schema declaration parsing
//!
//! Loads the YAML table/column description that drives rendering,
//! deployment, and verification. The document either carries a `tables`
//! sequence or a single root-level `table` name with its `columns`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Validation failures for a parsed declaration.
///
/// All of these are caught before any SQL is rendered or any
/// connection is opened.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema declares no tables")]
    NoTables,

    #[error("table entry has an empty name")]
    EmptyTableName,

    #[error("table '{0}' declares no columns")]
    NoColumns(String),

    #[error("table '{0}' has a column with an empty name")]
    EmptyColumnName(String),

    #[error("column '{column}' in table '{table}' has an empty type")]
    EmptyColumnType { table: String, column: String },
}

/// A single column declaration.
///
/// `type` is a raw SQL type, carried verbatim into the rendered
/// statement. Modifier flags render in a fixed order: NOT NULL,
/// PRIMARY KEY, UNIQUE, DEFAULT.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub sql_type: String,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

/// Scalar DEFAULT value, rendered verbatim into the column clause.
///
/// Presence of the key enables the clause: a declared default of `0`
/// or `false` still renders. Non-scalar values are rejected at parse
/// time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Bool(true) => write!(f, "TRUE"),
            DefaultValue::Bool(false) => write!(f, "FALSE"),
            DefaultValue::Int(n) => write!(f, "{}", n),
            DefaultValue::Float(n) => write!(f, "{}", n),
            DefaultValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A table declaration: name plus ordered columns.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDecl {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDecl>,
}

/// Raw document shape before normalization.
#[derive(Deserialize)]
struct SchemaDoc {
    #[serde(default)]
    tables: Option<Vec<TableDecl>>,
    #[serde(default)]
    table: Option<String>,
    #[serde(default)]
    columns: Option<Vec<ColumnDecl>>,
}

impl SchemaDoc {
    /// Normalize both document forms into an ordered table list.
    fn into_tables(self) -> Result<Vec<TableDecl>, SchemaError> {
        if let Some(tables) = self.tables {
            return Ok(tables);
        }
        match self.table {
            Some(name) => Ok(vec![TableDecl {
                name,
                columns: self.columns.unwrap_or_default(),
            }]),
            None => Err(SchemaError::NoTables),
        }
    }
}

/// Validate a declaration before rendering or verification.
pub fn validate(tables: &[TableDecl]) -> Result<(), SchemaError> {
    if tables.is_empty() {
        return Err(SchemaError::NoTables);
    }

    for table in tables {
        if table.name.trim().is_empty() {
            return Err(SchemaError::EmptyTableName);
        }
        if table.columns.is_empty() {
            return Err(SchemaError::NoColumns(table.name.clone()));
        }
        for column in &table.columns {
            if column.name.trim().is_empty() {
                return Err(SchemaError::EmptyColumnName(table.name.clone()));
            }
            if column.sql_type.trim().is_empty() {
                return Err(SchemaError::EmptyColumnType {
                    table: table.name.clone(),
                    column: column.name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Parse and validate a declaration from YAML text.
pub fn parse_schema(content: &str) -> Result<Vec<TableDecl>> {
    let doc: SchemaDoc =
        serde_yaml::from_str(content).context("Failed to parse schema declaration")?;
    let tables = doc.into_tables()?;
    validate(&tables)?;
    Ok(tables)
}

/// Load and validate the declaration file.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Vec<TableDecl>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema declaration at {}", path.display()))?;
    parse_schema(&content)
}
