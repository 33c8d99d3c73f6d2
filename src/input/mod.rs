//! Input processing module
//! Handles file detection, resume loading, and input management

pub mod file_detector;
pub mod loader;
pub mod manager;
