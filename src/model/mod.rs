//! Form domain records
//!
//! Everything here is plain data with serde encoding that matches the
//! persisted layout: camelCase keys, lowercase field kinds and millisecond
//! timestamps.

mod field;
mod form;
#[allow(dead_code)]
mod response;

pub use field::{parse_options, FieldType, FormField};
pub use form::{listed_forms, Form};
#[allow(unused_imports)]
pub use response::{FormResponse, ResponseValue};
