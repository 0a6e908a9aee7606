mod line_source;

pub use line_source::{parse_event_line, LineEventSource};
