use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Десериализация суммы, где `null` в удалённой таблице означает ноль
pub fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// Форматирует сумму в фунтах с разделителями тысяч: `£1,234.50`
///
/// # Примеры
/// ```
/// use contracts::shared::money::format_pounds;
/// use rust_decimal::Decimal;
/// assert_eq!(format_pounds(Decimal::new(123450, 2)), "£1,234.50");
/// assert_eq!(format_pounds(Decimal::from(-60)), "-£60");
/// ```
pub fn format_pounds(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text.clone(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(frac) = frac_part {
        // копейки всегда двумя знаками: 1.5 -> 1.50
        let frac = if frac.len() == 1 { format!("{}0", frac) } else { frac };
        result = format!("{}.{}", result, frac);
    }

    if normalized.is_sign_negative() && !normalized.is_zero() {
        format!("-£{}", result)
    } else {
        format!("£{}", result)
    }
}
