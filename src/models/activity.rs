use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracurricular activity as exposed over the API. Identified by its
/// name, which is the key in the directory map rather than a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order, each present at most once.
    pub participants: Vec<String>,
}

/// The fixed set of activities the directory starts with. Rebuilt on every
/// process start; there is no API to create or delete activities.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    let mut insert = |name: &str, description: &str, schedule: &str, max: u32, emails: &[&str]| {
        activities.insert(
            name.to_string(),
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: max,
                participants: emails.iter().map(|e| e.to_string()).collect(),
            },
        );
    };

    insert(
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    );
    insert(
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    );
    insert(
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    );
    insert(
        "Soccer Club",
        "Practice soccer skills and play friendly matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &[],
    );
    insert(
        "Basketball Team",
        "Practice and compete with the school basketball team",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        &[],
    );
    insert(
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &[],
    );
    insert(
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["mia@mergington.edu", "amelia@mergington.edu"],
    );
    insert(
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    );
    insert(
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &[],
    );

    activities
}
