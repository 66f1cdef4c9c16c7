pub mod activity;
pub mod carbon;
pub mod catalog;
pub mod consumption;
pub mod dashboard;
pub mod editing;
pub mod energy;
pub mod error;
pub mod insights;
pub mod planner;
pub mod plans;
pub mod scoring;
pub mod streaks;
