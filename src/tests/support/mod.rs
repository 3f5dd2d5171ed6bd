pub mod app_state_builder;
pub mod fixtures;
pub mod log_capture;
pub mod memory_store;
pub mod stubs;
