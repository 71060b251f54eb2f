pub mod format;
pub mod report;

pub use format::OutputFormat;
pub use report::{render, render_json, render_table};
