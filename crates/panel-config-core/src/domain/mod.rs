//! Domain entities for the panel config server.
//!
//! The only entity is the [`record::ConfigRecord`]: one (panel, parameter,
//! value) triple submitted by the front end.  A submission is an ordered list
//! of them; order and duplicates are preserved exactly as received.

pub mod record;
