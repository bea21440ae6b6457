//! Command implementations for the FPL CLI

pub mod player;
