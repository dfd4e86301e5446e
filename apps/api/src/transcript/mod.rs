// Transcript ingestion: PDF text extraction runs on the blocking pool, parsing is pure.

pub mod handlers;
pub mod parser;
