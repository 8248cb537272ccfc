use std::collections::BTreeMap;

use tracing::info;

use crate::models::Activity;
use crate::store::{ActivityDirectory, DirectoryError};

/// Full directory listing, keyed by activity name.
pub fn list_activities(directory: &ActivityDirectory) -> BTreeMap<String, Activity> {
    directory.snapshot()
}

/// Add `email` to the activity's roster and return the confirmation message
/// shown to the participant.
pub fn sign_up(
    directory: &ActivityDirectory,
    activity: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.append_participant(activity, email)?;
    info!("Signed up {} for {}", email, activity);
    Ok(format!("Signed up {} for {}", email, activity))
}

/// Remove `email` from the activity's roster.
pub fn unregister(
    directory: &ActivityDirectory,
    activity: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.remove_participant(activity, email)?;
    info!("Unregistered {} from {}", email, activity);
    Ok(format!("Unregistered {} from {}", email, activity))
}
