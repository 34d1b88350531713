use crate::shared::remote::paging::fetch_all_rows;
use crate::shared::remote::{Filter, RemoteError, RemoteStore, SelectQuery};
use contracts::domain::a001_member::Member;
use contracts::domain::a002_collector::CollectorMemberNumber;
use contracts::enums::AppRole;
use contracts::system::roles::UserRoleRow;
use serde_json::json;

pub const USER_ROLES_TABLE: &str = "user_roles";

pub async fn list_members(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<Member>, RemoteError> {
    let query = SelectQuery::new("members").columns("id, auth_user_id, member_number, full_name");
    fetch_all_rows(store, query, page_size).await
}

pub async fn list_user_roles(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<UserRoleRow>, RemoteError> {
    let query = SelectQuery::new(USER_ROLES_TABLE).columns("user_id, role");
    fetch_all_rows(store, query, page_size).await
}

pub async fn list_collector_member_numbers(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<CollectorMemberNumber>, RemoteError> {
    let query = SelectQuery::new("members_collectors").columns("member_number");
    fetch_all_rows(store, query, page_size).await
}

/// Удалить все роли пользователя
pub async fn delete_roles(store: &dyn RemoteStore, user_id: &str) -> Result<(), RemoteError> {
    store
        .delete(USER_ROLES_TABLE, &[Filter::eq("user_id", user_id)])
        .await
}

pub async fn insert_role(
    store: &dyn RemoteStore,
    user_id: &str,
    role: AppRole,
) -> Result<(), RemoteError> {
    store
        .insert(
            USER_ROLES_TABLE,
            vec![json!({ "user_id": user_id, "role": role.code() })],
        )
        .await
}
