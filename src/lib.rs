// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod checkout;
pub mod controller;
pub mod display;
pub mod notation;
pub mod runtime;
pub mod session;
pub mod throw;
pub mod validate;
