//! Parsers for level inputs.
//!
//! Level images carry their scalar parameters in the file name. See
//! [`filename`] for the naming schema.

pub mod filename;

pub use filename::parse_level_filename;
