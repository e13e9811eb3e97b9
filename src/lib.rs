//! CloudNav, a personal bookmark manager: categorized links with optional
//! password-gated categories, Netscape bookmark HTML import/export, and
//! cloud backup over two transports.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod codec;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
