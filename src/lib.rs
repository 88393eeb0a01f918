use std::sync::Arc;

use cache::LocationCache;
use config::Config;

pub mod cache;
pub mod config;
pub mod error;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<LocationCache>,
    pub config: Config,
}
