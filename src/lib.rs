pub mod cli;
pub mod config;
pub mod db;
pub mod models;
pub mod schedule;
pub mod summary;
pub mod utils;
