pub mod analyzing;
pub mod error;
pub mod logging;
pub mod settings;

#[cfg(test)]
mod test;

pub use analyzer::{CheckOptions, SemanticError};
pub use analyzing::{check_unit, check_units};
pub use error::{FrontendError, Result, UnitErrors};
pub use settings::Settings;
pub use syntax;
