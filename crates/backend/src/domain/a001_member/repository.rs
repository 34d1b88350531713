use crate::shared::remote::paging::fetch_all_rows;
use crate::shared::remote::{RemoteError, RemoteStore, SelectQuery};
use contracts::domain::a001_member::{Member, MemberName};

pub const MEMBERS_TABLE: &str = "members";

/// Члены, закреплённые за сборщиком, по возрастанию номера
pub async fn list_by_collector(
    store: &dyn RemoteStore,
    collector: &str,
    page_size: u64,
) -> Result<Vec<Member>, RemoteError> {
    let query = SelectQuery::new(MEMBERS_TABLE)
        .eq("collector", collector)
        .order_by("member_number", true);
    fetch_all_rows(store, query, page_size).await
}

pub async fn list_names(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<MemberName>, RemoteError> {
    let query = SelectQuery::new(MEMBERS_TABLE).columns("auth_user_id, full_name");
    fetch_all_rows(store, query, page_size).await
}
