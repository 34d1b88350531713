pub mod aggregate;

pub use aggregate::CollectorMemberNumber;
