//! Document-text extraction and transient upload storage.
//!
//! Two narrow contracts:
//! - [`pdf`] turns raw PDF bytes into best-effort plain text. A parse
//!   failure is an error; a readable document with no text is an empty
//!   `Ok` result — the two are never conflated.
//! - [`store`] holds uploaded bytes on disk for the duration of one
//!   request and guarantees removal afterwards, error paths included.

pub mod pdf;
pub mod store;

pub use pdf::{extract_text, extract_text_from_path, is_pdf};
pub use store::{StoredUpload, UploadStore};
