pub mod capability;
pub mod loader;
