//! Numeric constant tables from the Windows SDK headers
//!
//! Values are bit-exact copies of `winnt.h`, `winbase.h`, `winsvc.h` and
//! `ntstatus.h`; anything that disagrees with the SDK is a bug.

pub mod access;
pub mod creation;
pub mod memory;
pub mod service;
pub mod wait;

pub use access::*;
pub use creation::*;
pub use memory::*;
pub use service::*;
pub use wait::*;
