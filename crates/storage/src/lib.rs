#![forbid(unsafe_code)]

pub mod repository;
pub mod sheets;
pub mod sqlite;
