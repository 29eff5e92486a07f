//! Application context.
//!
//! One explicit object carries everything the services need — configuration,
//! the remote store client, and the session file — and is created once at
//! application start. Handlers receive it as a parameter; there is no
//! process-global state.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, ConfigManager};
use crate::errors::Result;
use crate::session::SessionStore;
use crate::store::RestStore;
use crate::utils::paths::app_data_dir;

pub struct AppContext {
    pub config: Config,
    pub store: RestStore,
    pub session: SessionStore,
}

impl AppContext {
    /// Starts a context from the on-disk configuration (defaults when absent).
    pub fn start() -> Result<Self> {
        let base = app_data_dir();
        let config = ConfigManager::with_base_dir(base.clone())?.load()?;
        Self::with_config_in(config, base)
    }

    /// Starts a context with explicit configuration and base directory.
    ///
    /// Integration tests use this to point the store at a mock server and
    /// keep the session inside a scratch directory.
    pub fn with_config_in(config: Config, base: impl Into<PathBuf>) -> Result<Self> {
        let store = RestStore::new(config.api_url.as_str(), Duration::from_secs(config.timeout_secs))?;
        let session = SessionStore::new(base)?;
        Ok(Self {
            config,
            store,
            session,
        })
    }
}
