pub mod loader;
pub mod session;
pub mod stats;
pub mod viewer;
