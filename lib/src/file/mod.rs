//! File transfers, going through the content server.

pub mod download;
pub mod upload;
