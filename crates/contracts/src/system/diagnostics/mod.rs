pub mod dto;

pub use dto::{
    ApplyFixDto, ApplyFixResponse, DiagnosticCategory, DiagnosticResult, DiagnosticStatus,
    FixFunction, SystemCheckResult,
};
