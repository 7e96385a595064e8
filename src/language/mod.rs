pub mod core;
pub mod quotes;
pub mod selection;

// Re-export the main types for convenience
pub use self::core::Language;
pub use quotes::{Quote, QuoteBook};
