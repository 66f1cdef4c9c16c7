pub mod core;
pub mod db;
pub mod jobs;
pub mod models;
pub mod output;
