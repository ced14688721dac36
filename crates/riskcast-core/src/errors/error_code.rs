//! ErrorCode trait for the presentation boundary.

/// Trait for converting engine errors to stable string codes.
/// The presentation layer serializes results; a structured code lets it
/// classify failures without matching on message text.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the presentation boundary.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const COMPUTE_ERROR: &str = "COMPUTE_ERROR";
pub const CANCELLED: &str = "CANCELLED";
