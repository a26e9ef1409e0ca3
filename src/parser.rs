//! Low-level parser primitives.

pub(crate) mod str;
