pub mod diagnostics;
pub mod initialization;
pub mod roles;
pub mod tracing;
