//! Employee API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /employees/ | GET, POST | list (`?organization=`) / create |
//! | /employees/{id}/ | GET | detail with `assignments` |
//! | /employees/{id}/ | PUT, PATCH, DELETE | partial update / cascading delete |
//! | /employees/{id}/assignments/ | GET | employee-assignment records (`?is_completed=`) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employees/", get(handler::list).post(handler::create))
        .route(
            "/employees/{id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route("/employees/{id}/assignments/", get(handler::list_assignments))
}
