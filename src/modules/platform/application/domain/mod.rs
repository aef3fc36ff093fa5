pub mod entities;
pub mod extractor;
