pub mod cli;
pub mod event;
pub mod report;
pub mod store;
