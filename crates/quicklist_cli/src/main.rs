//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("quicklist_core ping={}", quicklist_core::ping());
    println!("quicklist_core version={}", quicklist_core::core_version());
}
