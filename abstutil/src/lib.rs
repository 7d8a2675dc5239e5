//! The contents of this crate need to be organized better:
//!
//! - Logging setup shared by every binary
//! - JSON file IO
//! - serde helpers for maps whose keys can't be JSON strings

mod io;
pub mod logger;

pub use crate::io::{
    deserialize_btreemap, from_json, read_json, serialize_btreemap, to_json, write_json,
};
