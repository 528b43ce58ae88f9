use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};

use crate::state::AppState;
use crate::{companies, jobs, users};

/// Headroom above the 5 MiB image cap so oversized uploads reach the
/// size check and fail with the right message instead of a bare 413.
const BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/user/create", post(users::create_user))
        .route("/user/edit", put(users::edit_user))
        .route("/user/delete", delete(users::delete_user))
        .route("/user/getAll", get(users::get_all_users))
        .route("/user/uploadImage", post(users::upload_image))
        .route(
            "/company/uploadCompanyImage",
            post(companies::upload_company_image),
        )
        .route("/company/getCompanyImages", get(companies::get_company_images))
        .route("/job/create", post(jobs::create_job))
        .route("/job/getAll", get(jobs::get_all_jobs))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
