// CloudNav shared type definitions
// Each submodule defines types used across the application.

pub mod backup;
pub mod config;
pub mod errors;
pub mod record;
pub mod sync;
