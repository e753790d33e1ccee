pub mod checker;
pub mod error;
pub mod options;

#[cfg(test)]
mod test;

pub use checker::{Checker, check};
pub use error::SemanticError;
pub use options::CheckOptions;
