pub mod app_role;
pub mod payment_status;

pub use app_role::AppRole;
pub use payment_status::PaymentStatus;
