//! FFI crate exposing the QuickList core to the Flutter UI.

pub mod api;
