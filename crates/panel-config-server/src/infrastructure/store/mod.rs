//! Storage backends for rendered tables.
//!
//! Only one backend exists: [`csv_file::CsvFileStore`], which overwrites a
//! single file on every save.

pub mod csv_file;

pub use csv_file::CsvFileStore;
