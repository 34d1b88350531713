use crate::enums::PaymentStatus;
use crate::shared::money::null_as_zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Заявка на оплату (строка `payment_requests`), неизменяемый снимок
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub amount: Decimal,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_type: Option<String>,
}

impl PaymentRecord {
    pub const COLUMNS: &'static str = "amount, status, payment_type";
}
