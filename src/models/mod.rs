pub mod activity;

pub use activity::{seed_activities, Activity};
