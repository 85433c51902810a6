pub mod event_model;
pub mod log_reader;
