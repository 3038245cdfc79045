pub mod commands;
pub mod error;
pub mod manifest;
pub mod patch;
pub mod report;
pub mod runtime;
pub mod tracked;
pub mod version;
