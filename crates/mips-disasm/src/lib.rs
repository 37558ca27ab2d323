pub mod listing;
pub mod model;

// Re-export commonly used types/functions for consumers
pub use listing::{decode_all, render_json, render_text, Failure, Listing, Row};
pub use model::{load_listing, parse_listing, BadLine, Entry, Source};
