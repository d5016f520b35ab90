//! Windows utility functions

pub mod string_conv;

// Re-export commonly used utilities
pub use string_conv::{copy_to_wide_buffer, extract_filename, string_to_wide, wide_to_string};
