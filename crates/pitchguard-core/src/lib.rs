//! Core types and definitions for the PITCHGUARD simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, enums, parameter tables, the path model, errors, frame
//! events, and snapshot views. It has no dependency on the ECS runtime
//! or any presentation framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod path;
pub mod state;
pub mod types;
