//! User API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/users/", get(handler::list).post(handler::create))
        .route("/users/{id}/", get(handler::get_by_id))
}
