use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::{seed_activities, Activity};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },
}

/// In-memory directory of activities, shared across request handlers.
///
/// Cloning is cheap (Arc). Each mutating operation takes the write lock once
/// and does its presence check under it, so duplicate-signup and
/// remove-when-absent checks cannot race with the mutation they guard.
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityDirectory {
    /// Directory populated with the fixed seed set.
    pub fn seeded() -> Self {
        Self::from_map(seed_activities())
    }

    pub fn from_map(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Point-in-time copy of the whole directory.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.read().clone()
    }

    /// Append `email` to the activity's roster, keeping signup order.
    /// No capacity check: `max_participants` is informational only.
    pub fn append_participant(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write();
        let entry = activities
            .get_mut(activity)
            .ok_or(DirectoryError::ActivityNotFound)?;
        if entry.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp {
                email: email.to_string(),
                activity: activity.to_string(),
            });
        }
        entry.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's roster.
    pub fn remove_participant(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write();
        let entry = activities
            .get_mut(activity)
            .ok_or(DirectoryError::ActivityNotFound)?;
        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotSignedUp {
                email: email.to_string(),
                activity: activity.to_string(),
            });
        };
        entry.participants.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_directory_has_well_formed_activities() {
        let dir = ActivityDirectory::seeded();
        let snapshot = dir.snapshot();
        assert!(!snapshot.is_empty());
        for activity in snapshot.values() {
            assert!(activity.max_participants > 0);
            assert!(!activity.description.is_empty());
            assert!(!activity.schedule.is_empty());
        }
    }

    #[test]
    fn append_keeps_signup_order() {
        let dir = ActivityDirectory::seeded();
        dir.append_participant("Art Club", "a@example.com").unwrap();
        dir.append_participant("Art Club", "b@example.com").unwrap();
        let snapshot = dir.snapshot();
        assert_eq!(
            snapshot["Art Club"].participants,
            vec!["a@example.com", "b@example.com"]
        );
    }

    #[test]
    fn duplicate_append_is_rejected_and_leaves_one_entry() {
        let dir = ActivityDirectory::seeded();
        dir.append_participant("Soccer Club", "dup@example.com")
            .unwrap();
        let err = dir
            .append_participant("Soccer Club", "dup@example.com")
            .unwrap_err();
        assert!(matches!(err, DirectoryError::AlreadySignedUp { .. }));
        let snapshot = dir.snapshot();
        let count = snapshot["Soccer Club"]
            .participants
            .iter()
            .filter(|p| *p == "dup@example.com")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn remove_absent_participant_leaves_state_unchanged() {
        let dir = ActivityDirectory::seeded();
        let before = dir.snapshot();
        let err = dir
            .remove_participant("Debate Team", "ghost@example.com")
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotSignedUp { .. }));
        assert_eq!(dir.snapshot()["Debate Team"], before["Debate Team"]);
    }

    #[test]
    fn unknown_activity_is_not_found_for_both_mutations() {
        let dir = ActivityDirectory::seeded();
        assert_eq!(
            dir.append_participant("Knitting Circle", "x@example.com"),
            Err(DirectoryError::ActivityNotFound)
        );
        assert_eq!(
            dir.remove_participant("Knitting Circle", "x@example.com"),
            Err(DirectoryError::ActivityNotFound)
        );
    }
}
