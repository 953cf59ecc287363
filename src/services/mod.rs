// Service module exports
// The layout engine: every function here is a pure transform of its inputs

pub mod agenda;
pub mod event;
pub mod grid;
pub mod interaction;
pub mod segment;
pub mod stacking;
pub mod timed;
