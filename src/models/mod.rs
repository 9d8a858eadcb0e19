pub mod athlete;
pub mod auth;
pub mod catalog;
pub mod common;
pub mod matches;
pub mod team;
