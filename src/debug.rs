// Feature-gated diagnostics for the noise cache and filter dispatch.
// Enable prints with: cargo run --features session_debug --example control_panel
// When the feature is disabled, the macro expands to nothing.

#[cfg(feature = "session_debug")]
macro_rules! session_debug {
    ($($arg:tt)*) => { eprintln!("[quietline] {}", format_args!($($arg)*)); }
}

#[cfg(not(feature = "session_debug"))]
macro_rules! session_debug {
    ($($arg:tt)*) => {{ /* no-op */ }};
}
