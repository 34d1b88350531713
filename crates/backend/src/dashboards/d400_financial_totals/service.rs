use anyhow::{Context, Result};
use contracts::dashboards::d400_financial_totals::FinancialTotals;
use contracts::domain::a001_member::MemberDues;
use contracts::domain::a003_payment_request::PaymentRecord;
use contracts::enums::PaymentStatus;
use contracts::shared::money::format_pounds;
use rust_decimal::Decimal;

use super::repository;
use crate::shared::remote::RemoteStore;

/// Выгрузить платежи, сборщиков и членов целиком и посчитать сводку.
///
/// Три таблицы грузятся параллельно, страницы внутри таблицы по очереди.
/// Ошибка любой страницы отменяет расчёт целиком.
pub async fn compute_financial_totals(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<FinancialTotals> {
    tracing::info!("Fetching financial totals (page size {})", page_size);
    let start_time = std::time::Instant::now();

    let (payments, collectors, members) = tokio::try_join!(
        repository::fetch_payments(store, page_size),
        repository::fetch_collectors(store, page_size),
        repository::fetch_member_dues(store, page_size),
    )
    .context("Failed to fetch financial data")?;

    tracing::info!(
        "Total items fetched: payments={}, collectors={}, members={} in {:.2}s",
        payments.len(),
        collectors.len(),
        members.len(),
        start_time.elapsed().as_secs_f64()
    );

    let totals = fold_totals(&payments, &members, collectors.len() as u64);
    tracing::info!(
        "Financial totals: collected {}, pending {}, remaining {}",
        format_pounds(totals.total_collected),
        format_pounds(totals.pending_amount),
        format_pounds(totals.remaining_amount)
    );
    Ok(totals)
}

/// Свёртка выгруженных строк в сводку.
///
/// `remaining_amount = Σ годовых взносов (40 по умолчанию) + Σ экстренных
/// сборов (0 по умолчанию) − собранное`; переплата даёт отрицательный остаток.
pub fn fold_totals(
    payments: &[PaymentRecord],
    members: &[MemberDues],
    collector_count: u64,
) -> FinancialTotals {
    let total_collected = sum_by_status(payments, PaymentStatus::Approved);
    let pending_amount = sum_by_status(payments, PaymentStatus::Pending);

    let total_yearly_due: Decimal = members.iter().map(MemberDues::yearly_due).sum();
    let total_emergency_due: Decimal = members.iter().map(MemberDues::emergency_due).sum();

    FinancialTotals {
        total_collected,
        pending_amount,
        remaining_amount: total_yearly_due + total_emergency_due - total_collected,
        total_collectors: collector_count,
        total_transactions: payments.len() as u64,
    }
}

fn sum_by_status(payments: &[PaymentRecord], status: PaymentStatus) -> Decimal {
    payments
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.amount)
        .sum()
}
