// Module exports for models

pub mod event;
pub mod gesture;
pub mod grid;
pub mod layout;
pub mod settings;
