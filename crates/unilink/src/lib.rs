//! Backend for the UniLink student companion: weekly schedule, profile,
//! clubs, clients and localized UI strings, served as a JSON API.

pub mod config;
pub mod db;
pub mod directory;
pub mod i18n;
pub mod schedule;
pub mod seed;
pub mod server;
pub mod types;
pub mod validation;
