pub mod athletes;
pub mod catalog;
pub mod helpers;
pub mod matches;
pub mod team_matches;
