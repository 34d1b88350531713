use anyhow::{Context, Result};
use contracts::domain::a001_member::Member;
use contracts::domain::a002_collector::CollectorMemberNumber;
use contracts::enums::AppRole;
use contracts::system::roles::{RoleIssue, RoleIssueType, UserRoleRow, UserWithRoles};
use std::collections::{HashMap, HashSet};

use super::repository;
use crate::shared::remote::RemoteStore;

/// Проверить согласованность ролей: `members` × `user_roles` × `members_collectors`
pub async fn check_role_issues(store: &dyn RemoteStore, page_size: u64) -> Result<Vec<RoleIssue>> {
    tracing::info!("Checking role inconsistencies...");

    let (members, roles, collectors) = tokio::try_join!(
        repository::list_members(store, page_size),
        repository::list_user_roles(store, page_size),
        repository::list_collector_member_numbers(store, page_size),
    )
    .context("Failed to load role data")?;

    let issues = find_role_issues(&members, &roles, &collectors);
    tracing::info!(
        "Role check finished: {} members, {} role rows, {} issues",
        members.len(),
        roles.len(),
        issues.len()
    );
    Ok(issues)
}

/// Сначала все члены без auth-пользователя, затем по каждому члену
/// с auth-пользователем проверки ролей сборщика и члена.
pub fn find_role_issues(
    members: &[Member],
    roles: &[UserRoleRow],
    collectors: &[CollectorMemberNumber],
) -> Vec<RoleIssue> {
    let roles_by_user = group_roles(roles);
    let collector_numbers: HashSet<&str> = collectors
        .iter()
        .filter_map(|c| c.member_number.as_deref())
        .collect();

    let mut issues = Vec::new();

    for member in members.iter().filter(|m| auth_user(m).is_none()) {
        issues.push(issue(member, "", RoleIssueType::MissingAuthUser));
    }

    for member in members {
        let Some(user_id) = auth_user(member) else {
            continue;
        };
        let member_roles = roles_by_user.get(user_id);
        let has_role = |role: AppRole| member_roles.map_or(false, |r| r.contains(&role));
        let is_collector = collector_numbers.contains(member.member_number.as_str());

        if is_collector && !has_role(AppRole::Collector) {
            issues.push(issue(member, user_id, RoleIssueType::MissingCollectorRole));
        }
        if !is_collector && has_role(AppRole::Collector) {
            issues.push(issue(member, user_id, RoleIssueType::InvalidCollectorRole));
        }
        if !has_role(AppRole::Member) {
            issues.push(issue(member, user_id, RoleIssueType::MissingMemberRole));
        }
    }

    issues
}

/// Пустой `auth_user_id` равнозначен отсутствующему
fn auth_user(member: &Member) -> Option<&str> {
    member.auth_user_id.as_deref().filter(|id| !id.is_empty())
}

fn issue(member: &Member, user_id: &str, issue_type: RoleIssueType) -> RoleIssue {
    RoleIssue {
        user_id: user_id.to_string(),
        member_number: member.member_number.clone(),
        full_name: member.full_name.clone(),
        issue_type,
        details: issue_type.details().to_string(),
    }
}

fn group_roles(roles: &[UserRoleRow]) -> HashMap<&str, Vec<AppRole>> {
    let mut grouped: HashMap<&str, Vec<AppRole>> = HashMap::new();
    for row in roles {
        grouped.entry(row.user_id.as_str()).or_default().push(row.role);
    }
    grouped
}

/// Все члены со списками ролей
pub async fn list_users_with_roles(
    store: &dyn RemoteStore,
    page_size: u64,
) -> Result<Vec<UserWithRoles>> {
    let (members, roles) = tokio::try_join!(
        repository::list_members(store, page_size),
        repository::list_user_roles(store, page_size),
    )
    .context("Failed to load users with roles")?;

    let roles_by_user = group_roles(&roles);
    Ok(members
        .into_iter()
        .map(|m| {
            let roles = m
                .auth_user_id
                .as_deref()
                .and_then(|id| roles_by_user.get(id))
                .cloned()
                .unwrap_or_default();
            UserWithRoles {
                user_id: m.auth_user_id,
                full_name: m.full_name,
                member_number: m.member_number,
                roles,
            }
        })
        .collect())
}

/// Заменить все роли пользователя одной: сначала удаление, затем вставка
pub async fn change_role(store: &dyn RemoteStore, user_id: &str, role: AppRole) -> Result<()> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(anyhow::anyhow!("User id cannot be empty"));
    }

    tracing::info!("Changing role of user {} to {}", user_id, role);
    repository::delete_roles(store, user_id)
        .await
        .with_context(|| format!("Failed to remove roles of user {}", user_id))?;
    repository::insert_role(store, user_id, role)
        .await
        .with_context(|| format!("Failed to assign role {} to user {}", role, user_id))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote::memory::MemoryStore;
    use serde_json::json;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_table(
                "members",
                vec![
                    json!({"id": "1", "auth_user_id": "u1", "member_number": "M001", "full_name": "Collector Ok"}),
                    json!({"id": "2", "auth_user_id": null, "member_number": "M002", "full_name": "No Login"}),
                    json!({"id": "3", "auth_user_id": "u3", "member_number": "M003", "full_name": "Missing Collector"}),
                    json!({"id": "4", "auth_user_id": "u4", "member_number": "M004", "full_name": "Stray Collector"}),
                    json!({"id": "5", "auth_user_id": "u5", "member_number": "M005", "full_name": "Plain Member"}),
                ],
            )
            .with_table(
                "user_roles",
                vec![
                    json!({"user_id": "u1", "role": "collector"}),
                    json!({"user_id": "u1", "role": "member"}),
                    json!({"user_id": "u3", "role": "member"}),
                    json!({"user_id": "u4", "role": "collector"}),
                    json!({"user_id": "u5", "role": "member"}),
                ],
            )
            .with_table(
                "members_collectors",
                vec![
                    json!({"id": "c1", "member_number": "M001", "name": "Collector Ok"}),
                    json!({"id": "c3", "member_number": "M003", "name": "Missing Collector"}),
                ],
            )
    }

    #[tokio::test]
    async fn test_role_issues_in_expected_order() {
        let issues = check_role_issues(&store(), 2).await.unwrap();
        let found: Vec<(&str, RoleIssueType)> = issues
            .iter()
            .map(|i| (i.member_number.as_str(), i.issue_type))
            .collect();

        assert_eq!(
            found,
            vec![
                ("M002", RoleIssueType::MissingAuthUser),
                ("M003", RoleIssueType::MissingCollectorRole),
                ("M004", RoleIssueType::InvalidCollectorRole),
                ("M004", RoleIssueType::MissingMemberRole),
            ]
        );
        assert_eq!(issues[0].user_id, "");
        assert_eq!(issues[1].user_id, "u3");
        assert_eq!(issues[0].details, "Member has no associated auth user");
    }

    #[test]
    fn test_empty_auth_user_id_counts_as_missing() {
        let members: Vec<Member> = serde_json::from_value(json!([
            {"id": "1", "auth_user_id": "", "member_number": "M010", "full_name": "Blank Login"},
        ]))
        .unwrap();

        let issues = find_role_issues(&members, &[], &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, RoleIssueType::MissingAuthUser);
        assert_eq!(issues[0].user_id, "");
    }

    #[tokio::test]
    async fn test_users_with_roles() {
        let users = list_users_with_roles(&store(), 1000).await.unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(users[0].roles, vec![AppRole::Collector, AppRole::Member]);
        assert!(users[1].user_id.is_none());
        assert!(users[1].roles.is_empty());
    }

    #[tokio::test]
    async fn test_change_role_replaces_all_roles() {
        let store = store();
        change_role(&store, "u1", AppRole::Admin).await.unwrap();

        let u1_roles: Vec<_> = store
            .rows("user_roles")
            .into_iter()
            .filter(|r| r["user_id"] == "u1")
            .collect();
        assert_eq!(u1_roles, vec![json!({"user_id": "u1", "role": "admin"})]);
        assert_eq!(store.deletes().len(), 1);
    }

    #[tokio::test]
    async fn test_change_role_rejects_empty_user() {
        let store = store();
        assert!(change_role(&store, "", AppRole::Member).await.is_err());
        assert!(store.deletes().is_empty());
    }

    #[tokio::test]
    async fn test_role_check_fails_when_a_table_fails() {
        let store = store().failing_from("user_roles", 0);
        assert!(check_role_issues(&store, 1000).await.is_err());
    }
}
