//! CREATE TABLE statement rendering
//!
//! This module is the single place where declaration values meet SQL
//! text. Names, types, and default values are interpolated verbatim
//! with no identifier quoting or escaping, so any hardening belongs
//! here rather than at the call sites.

use crate::schema::{ColumnDecl, TableDecl};

/// Render one column clause: `<name> <type>` plus modifiers in fixed
/// order: NOT NULL, PRIMARY KEY, UNIQUE, DEFAULT.
pub fn column_definition(column: &ColumnDecl) -> String {
    let mut def = format!("{} {}", column.name, column.sql_type);
    if column.not_null {
        def.push_str(" NOT NULL");
    }
    if column.primary_key {
        def.push_str(" PRIMARY KEY");
    }
    if column.unique {
        def.push_str(" UNIQUE");
    }
    if let Some(value) = &column.default {
        def.push_str(&format!(" DEFAULT {}", value));
    }
    def
}

/// Render one CREATE TABLE statement with columns in declaration order.
pub fn create_table_statement(table: &TableDecl) -> String {
    let columns = table
        .columns
        .iter()
        .map(column_definition)
        .collect::<Vec<_>>()
        .join(",\n    ");

    format!("CREATE TABLE {} (\n    {}\n);", table.name, columns)
}

/// Render the whole declaration, statements separated by a blank line.
pub fn render_schema(tables: &[TableDecl]) -> String {
    tables
        .iter()
        .map(create_table_statement)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_schema;

    fn column(yaml: &str) -> ColumnDecl {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn primary_key_column_renders_exactly() {
        let col = column("{name: id, type: SERIAL, primary_key: true}");
        assert_eq!(column_definition(&col), "id SERIAL PRIMARY KEY");
    }

    #[test]
    fn not_null_renders_before_unique() {
        let col = column("{name: email, type: TEXT, not_null: true, unique: true}");
        assert_eq!(column_definition(&col), "email TEXT NOT NULL UNIQUE");
    }

    #[test]
    fn default_clause_renders_last() {
        let col = column("{name: active, type: BOOLEAN, not_null: true, default: true}");
        assert_eq!(
            column_definition(&col),
            "active BOOLEAN NOT NULL DEFAULT TRUE"
        );
    }

    #[test]
    fn default_value_is_verbatim() {
        let col = column("{name: created_at, type: TIMESTAMP, default: now()}");
        assert_eq!(column_definition(&col), "created_at TIMESTAMP DEFAULT now()");
    }

    #[test]
    fn one_statement_per_table_in_declaration_order() {
        let tables = parse_schema(
            r#"
tables:
  - name: users
    columns:
      - name: id
        type: SERIAL
        primary_key: true
  - name: orders
    columns:
      - name: id
        type: SERIAL
        primary_key: true
      - name: user_id
        type: INTEGER
        not_null: true
"#,
        )
        .unwrap();

        let sql = render_schema(&tables);
        let statements: Vec<&str> = sql.split("\n\n").collect();

        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE TABLE users ("));
        assert!(statements[1].starts_with("CREATE TABLE orders ("));
        for statement in &statements {
            assert!(statement.ends_with(");"));
        }
    }

    #[test]
    fn columns_keep_declaration_order() {
        let tables = parse_schema(
            r#"
tables:
  - name: users
    columns:
      - name: id
        type: SERIAL
        primary_key: true
      - name: email
        type: TEXT
        not_null: true
      - name: created_at
        type: TIMESTAMP
        default: now()
"#,
        )
        .unwrap();

        let sql = create_table_statement(&tables[0]);
        assert_eq!(
            sql,
            "CREATE TABLE users (\n    \
             id SERIAL PRIMARY KEY,\n    \
             email TEXT NOT NULL,\n    \
             created_at TIMESTAMP DEFAULT now()\n);"
        );
    }
}
