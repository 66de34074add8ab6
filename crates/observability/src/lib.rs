//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(None);
}

/// Like [`init`], but `default_directive` replaces `info` as the filter used
/// when `RUST_LOG` is unset.
pub fn init_with_default(default_directive: &str) {
    tracing::init(Some(default_directive));
}

/// Tracing configuration (filters, layers).
pub mod tracing;
