//! Schema verification against the database catalog
//!
//! Opens a single connection for the duration of the pass and checks
//! every declared table through information_schema. A missing table is
//! a finding, not an error: the remaining tables are still checked.

use crate::config::ConnectionConfig;
use crate::schema::TableDecl;
use anyhow::{Context, Result};
use tokio_postgres::{Client, NoTls};
use tracing::{error, info};

/// Catalog lookup for one table, in physical column order.
const COLUMNS_QUERY: &str = "SELECT column_name, data_type, is_nullable \
     FROM information_schema.columns \
     WHERE table_name = $1 \
     ORDER BY ordinal_position";

/// One catalog row describing a column.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub is_nullable: String,
}

/// Outcome of checking one declared table.
///
/// An empty catalog result is reported as missing; a table that exists
/// with zero columns is indistinguishable from an absent one here.
#[derive(Debug)]
pub enum TableReport {
    Missing {
        table: String,
    },
    Present {
        table: String,
        columns: Vec<ColumnInfo>,
    },
}

impl TableReport {
    pub fn is_missing(&self) -> bool {
        matches!(self, TableReport::Missing { .. })
    }

    /// Human-readable result lines for this table.
    pub fn lines(&self) -> Vec<String> {
        match self {
            TableReport::Missing { table } => {
                vec![format!("Table '{}' does not exist!", table)]
            }
            TableReport::Present { table, columns } => {
                let mut lines = vec![format!("Table '{}' exists. Columns found:", table)];
                lines.extend(columns.iter().map(|col| {
                    format!(
                        "  - {}: {} (Nullable: {})",
                        col.name, col.data_type, col.is_nullable
                    )
                }));
                lines
            }
        }
    }
}

/// Open the catalog connection and drive it on a background task.
pub async fn connect(config: &ConnectionConfig) -> Result<Client> {
    let (client, connection) = tokio_postgres::connect(&config.client_conninfo(), NoTls)
        .await
        .context("Failed to connect to PostgreSQL")?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!(error = %e, "Database connection error");
        }
    });

    Ok(client)
}

/// Fetch the catalog columns for one table, in ordinal order.
pub async fn table_columns(client: &Client, table: &str) -> Result<Vec<ColumnInfo>> {
    let rows = client
        .query(COLUMNS_QUERY, &[&table])
        .await
        .with_context(|| format!("Catalog query failed for table '{}'", table))?;

    Ok(rows
        .iter()
        .map(|row| ColumnInfo {
            name: row.get("column_name"),
            data_type: row.get("data_type"),
            is_nullable: row.get("is_nullable"),
        })
        .collect())
}

/// Check one declared table against the catalog.
pub async fn check_table(client: &Client, table: &str) -> Result<TableReport> {
    let columns = table_columns(client, table).await?;

    if columns.is_empty() {
        Ok(TableReport::Missing {
            table: table.to_string(),
        })
    } else {
        Ok(TableReport::Present {
            table: table.to_string(),
            columns,
        })
    }
}

/// Check every declared table, in declaration order.
pub async fn check_tables(client: &Client, tables: &[TableDecl]) -> Result<Vec<TableReport>> {
    let mut reports = Vec::with_capacity(tables.len());
    for table in tables {
        info!(table = %table.name, "Checking table");
        reports.push(check_table(client, &table.name).await?);
    }
    Ok(reports)
}

/// Log verification findings, one line per result.
pub fn log_reports(reports: &[TableReport]) {
    for report in reports {
        for line in report.lines() {
            if report.is_missing() {
                error!("{}", line);
            } else {
                info!("{}", line);
            }
        }
    }
}

/// Full verification pass: connect, check every declared table, log
/// the findings.
///
/// Connection and query failures are reported here rather than
/// propagated, so the caller can decide on follow-up action. The
/// connection is released when the pass ends, on the error path too.
pub async fn run_verification(config: &ConnectionConfig, tables: &[TableDecl]) {
    let client = match connect(config).await {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Could not connect to the database");
            return;
        }
    };

    info!("Successfully connected to the database");

    match check_tables(&client, tables).await {
        Ok(reports) => log_reports(&reports),
        Err(e) => error!(error = %e, "Verification failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_message_is_exact() {
        let report = TableReport::Missing {
            table: "users".to_string(),
        };
        assert_eq!(report.lines(), vec!["Table 'users' does not exist!"]);
    }

    #[test]
    fn present_table_lists_columns_in_order() {
        let report = TableReport::Present {
            table: "users".to_string(),
            columns: vec![
                ColumnInfo {
                    name: "id".to_string(),
                    data_type: "integer".to_string(),
                    is_nullable: "NO".to_string(),
                },
                ColumnInfo {
                    name: "email".to_string(),
                    data_type: "text".to_string(),
                    is_nullable: "YES".to_string(),
                },
            ],
        };

        let lines = report.lines();
        assert_eq!(lines[0], "Table 'users' exists. Columns found:");
        assert_eq!(lines[1], "  - id: integer (Nullable: NO)");
        assert_eq!(lines[2], "  - email: text (Nullable: YES)");
    }
}
