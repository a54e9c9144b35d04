//! Input records consumed by the scorers

pub mod resume;

pub use resume::Resume;
