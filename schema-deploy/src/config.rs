//! Connection configuration from environment variables
//!
//! Environment access lives here and in the binaries only; components
//! receive the resolved values.

use anyhow::Result;
use common::ConfigExt;

/// PostgreSQL connection parameters for deployment and verification.
#[derive(Clone)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl ConnectionConfig {
    /// Load connection parameters from environment variables.
    ///
    /// `DB_DATABASE`, `DB_USERNAME` and `DB_PASSWORD` are required;
    /// host and port fall back to a local instance.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: String::env_or("DB_HOST", "localhost"),
            port: u16::env_parse("DB_PORT", 5432),
            database: String::env_required("DB_DATABASE")?,
            user: String::env_required("DB_USERNAME")?,
            password: String::env_required("DB_PASSWORD")?,
        })
    }

    /// Keyword/value connection string handed to psql, encrypted
    /// transport required.
    ///
    /// Values are interpolated verbatim: fields containing spaces or
    /// quotes are not escaped.
    pub fn psql_conninfo(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={} sslmode=require",
            self.host, self.port, self.database, self.user, self.password
        )
    }

    /// Connection string for the catalog client (plaintext transport).
    pub fn client_conninfo(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={}",
            self.host, self.port, self.database, self.user, self.password
        )
    }

    /// Resolve the verification target.
    ///
    /// Cloud mode keeps the configured host; local mode ignores any
    /// host/port override and targets a local instance.
    pub fn verification_target(&self, cloud: bool) -> Self {
        if cloud {
            self.clone()
        } else {
            Self {
                host: "localhost".to_string(),
                port: 5432,
                ..self.clone()
            }
        }
    }
}

/// Whether verification should target the cloud deployment.
pub fn is_cloud_deployment() -> bool {
    String::env_or("CHECKCLOUDDEPLOYMENT", "no") == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConnectionConfig {
        ConnectionConfig {
            host: "db.example.net".to_string(),
            port: 5433,
            database: "appdb".to_string(),
            user: "app".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn psql_conninfo_matches_fixed_grammar() {
        assert_eq!(
            config().psql_conninfo(),
            "host=db.example.net port=5433 dbname=appdb user=app password=secret sslmode=require"
        );
    }

    #[test]
    fn client_conninfo_omits_sslmode() {
        assert_eq!(
            config().client_conninfo(),
            "host=db.example.net port=5433 dbname=appdb user=app password=secret"
        );
    }

    #[test]
    fn local_target_ignores_host_override() {
        let target = config().verification_target(false);
        assert_eq!(target.host, "localhost");
        assert_eq!(target.port, 5432);
        assert_eq!(target.database, "appdb");
    }

    #[test]
    fn cloud_target_keeps_configured_host() {
        let target = config().verification_target(true);
        assert_eq!(target.host, "db.example.net");
        assert_eq!(target.port, 5433);
    }
}
