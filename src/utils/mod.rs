pub mod event_time;
pub mod set_results;
