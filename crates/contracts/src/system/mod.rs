pub mod diagnostics;
pub mod roles;
