use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cypress_mock_common::StructureError;
use serde::Deserialize;
use serde_json::Value;

use crate::generator::ResponseGenerator;

/// The part of an incoming GraphQL request worth logging. The response does
/// not depend on it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest {
    operation_name: Option<String>,
}

/// Turns a malformed base document into a bare 500.
#[derive(Debug)]
pub struct ServerError(StructureError);

impl From<StructureError> for ServerError {
    fn from(err: StructureError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "cannot render response");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// `POST /`
pub async fn runs_list(
    State(generator): State<ResponseGenerator>,
    body: Bytes,
) -> Result<Json<Value>, ServerError> {
    if let Ok(GraphqlRequest {
        operation_name: Some(operation),
    }) = serde_json::from_slice::<GraphqlRequest>(&body)
    {
        tracing::debug!(%operation, "graphql request");
    }

    let response = generator.handle_request().await?;
    Ok(Json(response))
}
