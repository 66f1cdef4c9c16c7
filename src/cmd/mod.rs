pub mod config;
pub mod dashboard;
pub mod health;
pub mod init;
pub mod insights;
pub mod lifestyle;
pub mod meal;
pub mod plan;
pub mod steps;
pub mod user;
