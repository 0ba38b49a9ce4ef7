//! Domain - Panel Widths and Configuration

pub mod config;
pub mod length;
