use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::activity_service;
use crate::store::{ActivityDirectory, DirectoryError};

/// `email` is taken as-is; no format validation happens anywhere.
#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Serialize)]
pub struct ConfirmationBody {
    pub message: String,
}

// The activity name arrives percent-decoded from the Path extractor and is
// matched exactly, spaces and case included.

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<ConfirmationBody>, DirectoryError> {
    let message = activity_service::sign_up(&directory, &activity_name, &query.email)?;
    Ok(Json(ConfirmationBody { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<ConfirmationBody>, DirectoryError> {
    let message = activity_service::unregister(&directory, &activity_name, &query.email)?;
    Ok(Json(ConfirmationBody { message }))
}
