//! Core data structures for the critters simulation.

pub mod command;
pub mod display;
pub mod geometry;
pub mod senses;
