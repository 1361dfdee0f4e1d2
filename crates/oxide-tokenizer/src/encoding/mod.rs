//! Text encodings of token sequences.
//!
//! - [`to_json`] / [`from_json`]: structured encoding that round-trips every
//!   token field, enums written by their symbolic names.
//! - [`to_csv`]: tabular encoding for spreadsheets and quick inspection.

mod csv;
mod error;
mod json;

pub use self::csv::{to_csv, Csv};
pub use error::{EncodingError, Result};
pub use json::{from_json, to_json};
