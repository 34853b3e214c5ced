pub mod checkin;
pub mod coach;
pub mod config;
pub mod habit;
pub mod library;
pub mod reflect;
pub mod stats;
