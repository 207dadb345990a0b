//! Shared services and application state.
//!
//! - [`ServiceState`] - dependency-injection state for all handlers
//! - [`ServiceConfig`] - settings the state is built from
//! - [`SessionProvider`] - injectable request identity resolution
//! - [`IngestService`] - attachment marker resolution over storage

mod config;
mod error;
mod ingest;
mod session;
mod state;

pub use config::ServiceConfig;
pub use error::{Result, ServiceError};
pub use ingest::IngestService;
pub use session::{
    STUB_ACCOUNT_ID, STUB_DISPLAY_NAME, STUB_EMAIL_ADDRESS, Session, SessionProvider,
    SessionResolver, StaticSessionProvider, stub_account,
};
pub use state::ServiceState;
