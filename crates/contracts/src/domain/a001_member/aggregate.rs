use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Годовой взнос, если у члена он не задан или равен нулю
pub const DEFAULT_YEARLY_PAYMENT_AMOUNT: i64 = 40;

/// Член организации (строка таблицы `members`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    /// Пользователь в сервисе аутентификации; `None`, если учётка не создана
    #[serde(default)]
    pub auth_user_id: Option<String>,
    pub member_number: String,
    pub full_name: String,
    /// Имя сборщика, закреплённого за членом
    #[serde(default)]
    pub collector: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub yearly_payment_amount: Option<Decimal>,
    #[serde(default)]
    pub yearly_payment_status: Option<String>,
    #[serde(default)]
    pub emergency_collection_amount: Option<Decimal>,
    #[serde(default)]
    pub emergency_collection_status: Option<String>,
}

/// Срез строки `members`, нужный для расчёта задолженности
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberDues {
    #[serde(default)]
    pub yearly_payment_amount: Option<Decimal>,
    #[serde(default)]
    pub emergency_collection_amount: Option<Decimal>,
    #[serde(default)]
    pub yearly_payment_status: Option<String>,
    #[serde(default)]
    pub emergency_collection_status: Option<String>,
}

impl MemberDues {
    pub const COLUMNS: &'static str = "yearly_payment_amount, emergency_collection_amount, \
         yearly_payment_status, emergency_collection_status";

    /// Годовой взнос к оплате (40, если не задан или 0)
    pub fn yearly_due(&self) -> Decimal {
        self.yearly_payment_amount
            .filter(|amount| !amount.is_zero())
            .unwrap_or_else(|| Decimal::from(DEFAULT_YEARLY_PAYMENT_AMOUNT))
    }

    /// Экстренный сбор к оплате (0, если не задан)
    pub fn emergency_due(&self) -> Decimal {
        self.emergency_collection_amount.unwrap_or_default()
    }
}

/// Пара auth_user_id + ФИО для подписи пользователей в отчётах проверок
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberName {
    #[serde(default)]
    pub auth_user_id: Option<String>,
    pub full_name: String,
}
