use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Сводка по финансам для карточек дашборда.
/// Пересчитывается при каждом промахе кэша и нигде не сохраняется.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTotals {
    /// Сумма одобренных платежей
    #[serde(with = "rust_decimal::serde::float")]
    pub total_collected: Decimal,
    /// Сумма платежей в ожидании
    #[serde(with = "rust_decimal::serde::float")]
    pub pending_amount: Decimal,
    /// Задолженность минус собранное; отрицательна при переплате
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_amount: Decimal,
    pub total_collectors: u64,
    pub total_transactions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_numbers() {
        let totals = FinancialTotals {
            total_collected: Decimal::from(100),
            pending_amount: Decimal::from(50),
            remaining_amount: Decimal::from(-60),
            total_collectors: 2,
            total_transactions: 2,
        };
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["totalCollected"], serde_json::json!(100.0));
        assert_eq!(json["remainingAmount"], serde_json::json!(-60.0));
        assert_eq!(json["totalTransactions"], serde_json::json!(2));
    }
}
