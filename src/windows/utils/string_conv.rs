//! UTF-16 conversion utilities for fixed-width Windows buffers

use crate::core::{AbiError, AbiResult};

/// Convert a Rust string to a NUL-terminated Windows wide string
pub fn string_to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Convert a Windows wide string to a Rust string, stopping at the first NUL
pub fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}

/// Copy `s` into a fixed-width buffer, NUL-terminate it and zero the tail
///
/// Returns the number of UTF-16 units written, excluding the terminator.
/// The buffer is left untouched when the string does not fit.
pub fn copy_to_wide_buffer(s: &str, buffer: &mut [u16]) -> AbiResult<usize> {
    let wide = string_to_wide(s);
    if wide.len() > buffer.len() {
        return Err(AbiError::buffer_too_small(wide.len(), buffer.len()));
    }

    buffer[..wide.len()].copy_from_slice(&wide);
    buffer[wide.len()..].fill(0);
    Ok(wide.len() - 1)
}

/// Extract filename from full path
pub fn extract_filename(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}
