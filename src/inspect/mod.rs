//! Introspection over the definitions: named constants, record layouts and
//! the combined report the binary prints

pub mod layout;
pub mod registry;
pub mod report;

pub use layout::{FieldLayout, Layout};
pub use registry::{Constant, FlagSet, Group};
pub use report::Report;
