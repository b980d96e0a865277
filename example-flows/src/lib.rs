//! Fixture content for the ThriveSpace pre-launch flows: the full
//! 11-question survey and the seeded feature board, as shipped on the
//! landing page.

pub mod board;
pub mod survey;

pub use board::seeded_features;
pub use survey::thrivespace_survey;
