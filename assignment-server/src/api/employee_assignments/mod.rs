//! Employee-Assignment API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /employee-assignments/ | GET | list (`?employee=&assignment=&is_completed=`) |
//! | /employee-assignments/, /employee-assignments/create/ | POST | assign → 201 |
//! | /employee-assignments/{id}/ | GET | single record |
//! | /employee-assignments/{id}/ | PUT, PATCH | partial update |
//! | /employee-assignments/{id}/update/ | PUT | partial update |
//! | /employee-assignments/{id}/evaluate/ | POST | set score and comments |
//! | /employee-assignments/{id}/complete/ | POST | mark completed |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/employee-assignments/",
            get(handler::list).post(handler::create),
        )
        .route("/employee-assignments/create/", post(handler::create))
        .route(
            "/employee-assignments/{id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update),
        )
        .route("/employee-assignments/{id}/update/", put(handler::update))
        .route("/employee-assignments/{id}/evaluate/", post(handler::evaluate))
        .route("/employee-assignments/{id}/complete/", post(handler::complete))
}
