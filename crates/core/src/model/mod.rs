pub mod case;
pub mod document;

pub use case::{Case, LogRow};
pub use document::LogDocument;
