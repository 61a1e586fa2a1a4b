pub mod catalog;
pub mod config;
pub mod error;
pub mod judge;
pub mod profile;
pub mod registration;
pub mod tracker;
