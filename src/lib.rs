use axum::Router;

use crate::{routes::api_router, state::AppState};

pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod ops;
pub mod routes;
pub mod state;
pub mod store;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_router(state.clone()))
        .with_state(state)
}
