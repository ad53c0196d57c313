pub mod error;
pub mod json;
pub use error::{JsonError, Result};
pub use json::{dump, dump_atomic, dumps, load};
