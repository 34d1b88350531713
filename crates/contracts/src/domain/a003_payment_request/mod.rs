pub mod aggregate;

pub use aggregate::PaymentRecord;
