//! Testability ports for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

/// Shared random source. Implementations must tolerate concurrent callers.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in the inclusive range `[min, max]`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
