//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "CINEGRAPH_CONFIG";

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

/// GraphQL exposure configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphQLConfig {
    /// Serve the playground UI at `/graphql/playground`
    pub playground: bool,

    /// Reject queries nested deeper than this
    pub depth_limit: Option<usize>,
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            playground: true,
            depth_limit: None,
        }
    }
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_mongodb_database() -> String {
    "cinegraph".to_string()
}

/// Which document store backs the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StorageConfig {
    #[default]
    InMemory,
    Mongodb {
        #[serde(default = "default_mongodb_uri")]
        uri: String,
        #[serde(default = "default_mongodb_database")]
        database: String,
    },
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub graphql: GraphQLConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })
    }

    /// Load configuration from the process environment
    ///
    /// Defaults, then the file named by `CINEGRAPH_CONFIG`, then the
    /// individual `CINEGRAPH_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();

        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;

        Ok(config)
    }

    /// Apply `CINEGRAPH_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CINEGRAPH_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("CINEGRAPH_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: port.clone(),
                message: "expected a port number".to_string(),
            })?;
        }

        let uri_override = lookup("CINEGRAPH_MONGODB_URI");
        let database_override = lookup("CINEGRAPH_MONGODB_DATABASE");

        if uri_override.is_some() || database_override.is_some() {
            let (uri, database) = match &self.storage {
                StorageConfig::Mongodb { uri, database } => (uri.clone(), database.clone()),
                StorageConfig::InMemory => (default_mongodb_uri(), default_mongodb_database()),
            };

            self.storage = StorageConfig::Mongodb {
                uri: uri_override.unwrap_or(uri),
                database: database_override.unwrap_or(database),
            };
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
