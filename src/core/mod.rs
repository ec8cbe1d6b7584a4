// src/core/mod.rs
pub mod clock;
pub mod config;
pub mod profile;
pub mod schedule;
