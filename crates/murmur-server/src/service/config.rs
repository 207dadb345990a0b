//! Service configuration.

#[cfg(feature = "config")]
use clap::Args;
use murmur_opendal::{FsConfig, StorageConfig};
use murmur_postgres::{PgClient, PgConfig, PgResult};
use murmur_rig::RigConfig;
use serde::{Deserialize, Serialize};

/// Configuration for all external collaborators of the service.
///
/// Groups the database, language-model and storage settings a
/// [`ServiceState`] is built from.
///
/// [`ServiceState`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Database connection and pool settings.
    #[cfg_attr(feature = "config", clap(flatten))]
    #[serde(flatten)]
    pub postgres: PgConfig,

    /// Language-model provider settings.
    #[cfg_attr(feature = "config", clap(flatten))]
    #[serde(flatten)]
    pub rig: RigConfig,

    /// Directory uploaded attachments are stored under and attachment
    /// markers are resolved against
    #[cfg_attr(
        feature = "config",
        arg(long = "storage-root", env = "STORAGE_ROOT", default_value = "./public")
    )]
    pub storage_root: String,
}

impl ServiceConfig {
    /// Connects the database client.
    pub fn connect_postgres(&self) -> PgResult<PgClient> {
        PgClient::new(self.postgres.clone())
    }

    /// Returns the storage configuration for the upload root.
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig::from(FsConfig::new(&self.storage_root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_config_uses_configured_root() {
        let config = ServiceConfig {
            postgres: PgConfig::new("postgresql://localhost/murmur"),
            rig: RigConfig::new("openai", "sk-test"),
            storage_root: "/srv/murmur/public".to_string(),
        };

        let storage = config.storage_config();
        assert_eq!(storage.backend_name(), "fs");
        assert_eq!(storage.root(), "/srv/murmur/public");
    }
}
