use std::sync::Arc;

use crate::{
    adapters::outbound::index::{
        create_kendra_client, InMemoryIndexSyncClient, KendraConfig, KendraIndexSyncClient,
    },
    domain::{
        errors::ValidationError,
        models::SyncTarget,
        value_objects::{DataSourceId, IndexId},
    },
    ports::index::IndexSyncClient,
    services::{SyncTriggerServiceBuilder, SyncTriggerServiceImpl},
};

pub const DATA_SOURCE_ID_VAR: &str = "KENDRA_DATA_SOURCE_ID";
pub const INDEX_ID_VAR: &str = "KENDRA_INDEX_ID";
pub const SYNC_BACKEND_VAR: &str = "SYNC_BACKEND";
pub const KENDRA_REGION_VAR: &str = "KENDRA_REGION";
pub const KENDRA_ENDPOINT_URL_VAR: &str = "KENDRA_ENDPOINT_URL";

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target: SyncTarget,
    pub backend: SyncBackend,
}

/// Index service backend configuration
#[derive(Debug, Clone)]
pub enum SyncBackend {
    Kendra(KendraConfig),
    InMemory,
}

impl SyncBackend {
    /// Parse a backend name (`kendra` or `memory`) with its Kendra settings
    pub fn parse(name: &str, kendra: KendraConfig) -> Result<Self, AppError> {
        match name.to_lowercase().as_str() {
            "kendra" => Ok(SyncBackend::Kendra(kendra)),
            "memory" | "in-memory" => Ok(SyncBackend::InMemory),
            other => Err(AppError::Configuration {
                message: format!("Unknown sync backend: {}", other),
            }),
        }
    }
}

impl AppConfig {
    /// Validate raw identifiers into a configuration
    pub fn from_parts(
        data_source_id: String,
        index_id: String,
        backend: SyncBackend,
    ) -> Result<Self, AppError> {
        let data_source_id =
            DataSourceId::new(data_source_id).map_err(|source| AppError::InvalidIdentifier {
                name: DATA_SOURCE_ID_VAR,
                source,
            })?;
        let index_id = IndexId::new(index_id).map_err(|source| AppError::InvalidIdentifier {
            name: INDEX_ID_VAR,
            source,
        })?;

        Ok(Self {
            target: SyncTarget::new(data_source_id, index_id),
            backend,
        })
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name).ok_or_else(|| AppError::Configuration {
                message: format!("{} environment variable required", name),
            })
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let data_source_id = required(DATA_SOURCE_ID_VAR)?;
        let index_id = required(INDEX_ID_VAR)?;

        let kendra = KendraConfig {
            region: optional(KENDRA_REGION_VAR),
            endpoint_url: optional(KENDRA_ENDPOINT_URL_VAR),
        };
        let backend = match optional(SYNC_BACKEND_VAR) {
            Some(name) => SyncBackend::parse(&name, kendra)?,
            None => SyncBackend::Kendra(kendra),
        };

        Self::from_parts(data_source_id, index_id, backend)
    }
}

/// Application services container
pub struct AppServices {
    pub sync_trigger_service: SyncTriggerServiceImpl,
    pub index_sync_client: Arc<dyn IndexSyncClient>,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    index_sync_client: Option<Arc<dyn IndexSyncClient>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            index_sync_client: None,
        }
    }

    /// Use an already constructed client instead of the configured backend
    pub fn with_index_sync_client(mut self, client: Arc<dyn IndexSyncClient>) -> Self {
        self.index_sync_client = Some(client);
        self
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let client = match self.index_sync_client {
            Some(client) => client,
            None => Self::create_index_sync_client(&self.config.backend).await,
        };

        let sync_trigger_service = SyncTriggerServiceBuilder::new()
            .client(client.clone())
            .target(self.config.target)
            .build()
            .map_err(|message| AppError::ServiceInit {
                message: message.to_string(),
            })?;

        Ok(AppServices {
            sync_trigger_service,
            index_sync_client: client,
        })
    }

    /// Create the index client based on configuration
    async fn create_index_sync_client(backend: &SyncBackend) -> Arc<dyn IndexSyncClient> {
        match backend {
            SyncBackend::Kendra(kendra) => {
                tracing::debug!(?kendra, "creating kendra client");
                let client = create_kendra_client(kendra).await;
                Arc::new(KendraIndexSyncClient::new(client))
            }
            SyncBackend::InMemory => {
                tracing::warn!("using in-memory index client, no sync jobs will be started");
                Arc::new(InMemoryIndexSyncClient::new())
            }
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid {name}: {source}")]
    InvalidIdentifier {
        name: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("Service initialization error: {message}")]
    ServiceInit { message: String },
}

/// Create an application backed by the in-memory index client
pub async fn create_in_memory_app(target: SyncTarget) -> Result<AppServices, AppError> {
    AppBuilder::new(AppConfig {
        target,
        backend: SyncBackend::InMemory,
    })
    .build()
    .await
}
