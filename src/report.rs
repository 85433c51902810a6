pub mod console;
pub mod reporter;
pub mod sink;
pub mod style;
