/// PWA plugin option-schema layer.
pub mod errors;
pub mod options;

pub use errors::PwaOptionError;
pub use options::{ModuleRef, PwaOptions, validate_pwa_options};
