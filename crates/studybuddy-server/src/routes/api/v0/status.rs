use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde_json::json;
use studybuddy_core::status::get_sea_orm_db_status;
use studybuddy_model::status::{ComponentState, ComponentStatus};
use tracing::instrument;
use utoipa::ToSchema;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[derive(Debug, Clone, ToSchema)]
struct Status {
    database: ComponentStatus,
}

impl Status {
    pub(crate) fn status_code(&self) -> StatusCode {
        if self.database.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

impl From<Status> for studybuddy_model::status::Status {
    fn from(val: Status) -> Self {
        studybuddy_model::status::Status {
            status: val.database.state(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            database: val.database.into_message(),
        }
    }
}

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let status: studybuddy_model::status::Status = self.into();
        (status_code, Json(status)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server is ok", body = studybuddy_model::status::Status, example = json!(studybuddy_model::status::Status { status: ComponentState::Ok, version: "0.1.0".to_owned(), database: json!("ok") })),
        (status = SERVICE_UNAVAILABLE, description = "The database is not reachable", body = studybuddy_model::status::Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    Status {
        database: get_sea_orm_db_status(&conn, None).await,
    }
}
