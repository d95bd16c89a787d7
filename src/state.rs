use std::sync::Arc;

use crate::{config::Config, errors::Result, store::SheetStore};

/// Shared handles, built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SheetStore>,
}

impl AppState {
    pub fn init(config: &Config) -> Result<Self> {
        let store = SheetStore::open(&config.data_dir)?;
        Ok(Self {
            store: Arc::new(store),
        })
    }
}
