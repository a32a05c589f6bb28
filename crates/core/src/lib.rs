pub mod model;
pub mod parsers;
pub mod views;
pub mod writer;

pub use model::{Case, LogDocument, LogRow};
pub use parsers::{LogFormat, ParseError};
