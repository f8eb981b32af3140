//! Organization API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /organizations/ | GET, POST | list / create |
//! | /organizations/{id}/ | GET | detail with `employees` and `assignments` |
//! | /organizations/{id}/ | PUT, PATCH, DELETE | partial update / cascading delete |
//! | /organizations/{id}/employees/ | GET | employees of the organization |
//! | /organizations/{id}/assignments/ | GET | assignments of the organization |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/organizations/", get(handler::list).post(handler::create))
        .route(
            "/organizations/{id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route("/organizations/{id}/employees/", get(handler::list_employees))
        .route("/organizations/{id}/assignments/", get(handler::list_assignments))
}
