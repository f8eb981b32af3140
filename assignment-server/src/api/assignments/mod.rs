//! Assignment API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /assignments/ | GET, POST | list (`?organization=&status=`) / create |
//! | /assignments/{id}/ | GET | detail with `assigned_employees` |
//! | /assignments/{id}/ | PUT, PATCH, DELETE | partial update / cascading delete |
//! | /assignments/{id}/assigned_employees/ | GET | employee-assignment records (`?is_completed=`) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/assignments/", get(handler::list).post(handler::create))
        .route(
            "/assignments/{id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/assignments/{id}/assigned_employees/",
            get(handler::list_assigned_employees),
        )
}
