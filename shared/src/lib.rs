pub mod api;
pub mod auth;
pub mod calendar;
pub mod models;
pub mod schedule;
pub mod validate;
