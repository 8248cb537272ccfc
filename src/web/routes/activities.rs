use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::services::activity_service;
use crate::store::ActivityDirectory;

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activity_service::list_activities(&directory))
}
