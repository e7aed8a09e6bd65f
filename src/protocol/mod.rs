//! Typed command encoding for the fixed frame protocol

pub mod commands;
