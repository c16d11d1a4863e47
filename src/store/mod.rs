mod json;

pub use json::{load_activity_log, parse_activity_log};
