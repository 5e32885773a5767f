//! The API endpoint URIs.

/// The route for the health check.
pub const HEALTH: &str = "/health";
/// The route to list and create budget entries.
pub const BUDGETS: &str = "/budgets";
