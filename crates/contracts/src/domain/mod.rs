pub mod a001_member;
pub mod a002_collector;
pub mod a003_payment_request;
