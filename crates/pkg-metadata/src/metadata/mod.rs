//! Core metadata and its JSON form.
//!
//! [`decode`] reads a `METADATA` / `PKG-INFO` header block into a
//! [`Metadata`] mapping and [`encode`] writes one back. Both are driven by the
//! field table in [`fields`].

pub(crate) mod charset;
pub mod fields;
pub mod header;
pub mod model;

pub use fields::{FIELDS, Field, json_key};
pub use header::{decode, decode_str, encode};
pub use model::{FieldValue, Metadata};
