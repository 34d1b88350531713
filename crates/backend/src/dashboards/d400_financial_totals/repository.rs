use crate::shared::remote::paging::fetch_all_rows;
use crate::shared::remote::{RemoteError, RemoteStore, SelectQuery};
use contracts::domain::a001_member::MemberDues;
use contracts::domain::a003_payment_request::PaymentRecord;
use serde::de::IgnoredAny;

pub const PAYMENTS_TABLE: &str = "payment_requests";
pub const COLLECTORS_TABLE: &str = "members_collectors";
pub const MEMBERS_TABLE: &str = "members";

/// Все заявки на оплату (сумма, статус, тип)
pub async fn fetch_payments(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<PaymentRecord>, RemoteError> {
    let query = SelectQuery::new(PAYMENTS_TABLE).columns(PaymentRecord::COLUMNS);
    fetch_all_rows(store, query, page_size).await
}

/// Строки сборщиков; содержимое не разбирается, важно только количество
pub async fn fetch_collectors(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<IgnoredAny>, RemoteError> {
    fetch_all_rows(store, SelectQuery::new(COLLECTORS_TABLE), page_size).await
}

/// Начисления по всем членам
pub async fn fetch_member_dues(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<MemberDues>, RemoteError> {
    let query = SelectQuery::new(MEMBERS_TABLE).columns(MemberDues::COLUMNS);
    fetch_all_rows(store, query, page_size).await
}
