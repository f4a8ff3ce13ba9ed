#![forbid(unsafe_code)]

mod error;
mod outcome;
mod tree;

pub use error::BstError;
pub use outcome::AddOutcome;
pub use tree::Bst;
