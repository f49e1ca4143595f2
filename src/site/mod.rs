/// Site-generator integration: process forwarding and artifact cleanup.
pub mod clear;
pub mod errors;
pub mod runner;

pub use clear::clear_generated;
pub use errors::SiteError;
