//! Application state and dependency injection.

use std::sync::Arc;

use murmur_opendal::StorageBackend;
use murmur_postgres::PgClient;
use murmur_rig::tool::builtin;
use murmur_rig::{ChatModel, ChatService, ProviderRegistry};

use crate::service::{
    IngestService, Result, STUB_ACCOUNT_ID, ServiceConfig, SessionResolver, StaticSessionProvider,
};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    chat_service: ChatService,
    storage: StorageBackend,
    ingest: IngestService,
    sessions: SessionResolver,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Builds the database client, connects one completion provider per
    /// model variant, registers the built-in tool set, and opens the
    /// storage backend for the upload root. Identity resolution defaults to
    /// the fixed development identity; substitute a real provider with
    /// [`with_session_provider`](Self::with_session_provider).
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let pg_client = config.connect_postgres()?;

        let providers = ProviderRegistry::connect(&config.rig.credentials()?)?;
        let tool_provider = providers.resolve(ChatModel::Large)?.clone();
        let tools = builtin::defaults(pg_client.clone(), tool_provider, reqwest::Client::new());
        let chat_service = ChatService::new(providers, tools);

        let storage = StorageBackend::new(config.storage_config()).await?;
        let ingest = IngestService::new(storage.clone());

        Ok(Self {
            pg_client,
            chat_service,
            storage,
            ingest,
            sessions: Arc::new(StaticSessionProvider::new(STUB_ACCOUNT_ID)),
        })
    }

    /// Replaces the session provider.
    ///
    /// Lets deployments plug in a real identity provider without touching
    /// any handler.
    pub fn with_session_provider(mut self, sessions: SessionResolver) -> Self {
        self.sessions = sessions;
        self
    }

    /// Returns the database client.
    pub fn pg_client(&self) -> &PgClient {
        &self.pg_client
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+ $(,)?) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(chat_service: ChatService);
impl_di!(storage: StorageBackend);
impl_di!(ingest: IngestService);
impl_di!(sessions: SessionResolver);
