/// Markdown heading-anchor layer.
pub mod errors;
pub mod slugger;
pub mod writer;

pub use errors::HeadingError;
pub use slugger::Slugger;
pub use writer::{HeadingIdOptions, write_heading_ids};
