//! Data models for portfolio records.
//!
//! - [`Project`] - A portfolio project from `GET /projects`
//! - [`Experience`] - A work experience entry from `GET /experiences`
//! - [`ExperienceCategory`] - The fixed set of focus areas an experience is filed under
//!
//! Records deserialize straight from the record API's JSON. Date fields go through the
//! custom deserializers in the `deserializers` module.

pub mod deserializers;
pub mod experience;
pub mod project;

pub use experience::{Experience, ExperienceCategory};
pub use project::Project;
