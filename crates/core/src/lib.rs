#![forbid(unsafe_code)]

pub mod bank;
pub mod chart;
pub mod copy;
pub mod error;
pub mod interpretation;
pub mod model;
pub mod report;
pub mod scoring;
pub mod time;

pub use bank::QUESTION_BANK;
pub use error::Error;
pub use time::Clock;
