//! Data model shared by the condition compiler: value types, operators,
//! leaf conditions and condition trees, plus the string classifiers and
//! conversion helpers they rely on.

pub mod check;
pub mod core;
pub mod error;
