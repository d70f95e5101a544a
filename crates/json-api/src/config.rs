//! Server configuration module

use clap::{Parser, ValueEnum};

/// Which catalog this process serves.
///
/// The two deployments are structurally identical; only the record
/// schema differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Catalog {
    /// Craft products catalog.
    Products,
    /// Story plots catalog.
    Stories,
}

/// Curio JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "curio-json", about = "Curio catalog JSON API server", long_about = None)]
pub struct ServerConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Catalog served by this process
    #[arg(short, long, env = "CATALOG", value_enum, default_value = "products")]
    pub catalog: Catalog,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_defaults_serve_products_on_3000() -> TestResult {
        let config = ServerConfig::try_parse_from(["curio-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.catalog, Catalog::Products);

        Ok(())
    }

    #[test]
    fn test_catalog_flag_selects_stories() -> TestResult {
        let config = ServerConfig::try_parse_from(["curio-json", "--catalog", "stories"])?;

        assert_eq!(config.catalog, Catalog::Stories);

        Ok(())
    }
}
