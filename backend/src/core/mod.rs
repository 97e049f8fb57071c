//! Core infrastructure shared by the dispatcher: time sources and configuration.

pub mod clock;
pub mod config;
