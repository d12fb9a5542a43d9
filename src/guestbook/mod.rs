//! Message capture pipeline: form validation, the in-memory store, and the
//! value types shared with the renderer.

pub mod datefmt;
pub mod entry;
pub mod store;
pub mod validate;
