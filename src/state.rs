use std::sync::Arc;

use yoga_config::{CorsConfig, JwtConfig};
use yoga_db::Store;

/// Shared by every handler. Cloning is cheap: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
