/// CSS post-processing layer.
pub mod errors;
pub mod overrides;
pub mod parser;

pub use errors::CssError;
pub use overrides::{StripOutcome, remove_overridden_custom_properties};
