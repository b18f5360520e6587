/// Expected (reportable success) results
pub mod expected;

/// Unexpected (failure) results
pub mod unexpected;

/// Status line for a single domain
pub mod story;
