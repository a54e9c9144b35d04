//! Text analysis engine: keyword matching, resume and job scoring

pub mod vocabulary;
pub mod text_processor;
pub mod keyword_matcher;
pub mod estimator;
pub mod resume_parser;
pub mod job_matcher;
pub mod completeness;
