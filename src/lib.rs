pub mod editor;
pub mod error;
pub mod host;
pub mod lint;
pub mod parser;
pub mod serialiser;
pub mod session;
pub mod srt;
pub mod store;
