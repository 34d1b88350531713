use anyhow::{Context, Result};
use contracts::domain::a001_member::Member;
use std::collections::HashMap;

use super::repository;
use crate::shared::remote::RemoteStore;

/// Список членов сборщика
pub async fn list_by_collector(
    store: &dyn RemoteStore,
    collector: &str,
    page_size: u64,
) -> Result<Vec<Member>> {
    let collector = collector.trim();
    if collector.is_empty() {
        return Err(anyhow::anyhow!("Collector name cannot be empty"));
    }

    tracing::info!("Starting member fetch for collector: {}", collector);
    let members = repository::list_by_collector(store, collector, page_size)
        .await
        .with_context(|| format!("Failed to fetch members for collector {}", collector))?;

    if members.is_empty() {
        tracing::info!("No members found for collector: {}", collector);
    } else {
        tracing::info!("Collector {} has {} members", collector, members.len());
    }
    Ok(members)
}

/// auth_user_id -> ФИО; члены без auth-пользователя пропускаются
pub async fn member_names(store: &dyn RemoteStore, page_size: u64) -> Result<HashMap<String, String>> {
    let names = repository::list_names(store, page_size)
        .await
        .context("Failed to fetch member names")?;

    Ok(names
        .into_iter()
        .filter_map(|m| m.auth_user_id.map(|id| (id, m.full_name)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote::memory::MemoryStore;
    use serde_json::json;

    fn store() -> MemoryStore {
        MemoryStore::new().with_table(
            "members",
            vec![
                json!({"id": "1", "member_number": "TS003", "full_name": "Tariq Shah", "collector": "Anjum", "auth_user_id": "u1"}),
                json!({"id": "2", "member_number": "TS001", "full_name": "Sara Noor", "collector": "Anjum", "auth_user_id": null}),
                json!({"id": "3", "member_number": "AB010", "full_name": "Ali Baig", "collector": "Bilal", "auth_user_id": "u3"}),
            ],
        )
    }

    #[tokio::test]
    async fn test_list_by_collector_filters_and_orders() {
        let members = list_by_collector(&store(), "Anjum", 1).await.unwrap();
        let numbers: Vec<&str> = members.iter().map(|m| m.member_number.as_str()).collect();
        assert_eq!(numbers, vec!["TS001", "TS003"]);
    }

    #[tokio::test]
    async fn test_unknown_collector_has_no_members() {
        let members = list_by_collector(&store(), "Nobody", 1000).await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_empty_collector_is_rejected() {
        assert!(list_by_collector(&store(), "  ", 1000).await.is_err());
    }

    #[tokio::test]
    async fn test_member_names_skip_missing_auth_users() {
        let names = member_names(&store(), 1000).await.unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("u1").map(String::as_str), Some("Tariq Shah"));
        assert_eq!(names.get("u3").map(String::as_str), Some("Ali Baig"));
    }
}
