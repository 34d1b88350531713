pub mod aggregate;

pub use aggregate::{Member, MemberDues, MemberName, DEFAULT_YEARLY_PAYMENT_AMOUNT};
