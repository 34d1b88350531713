//! Доступ к удалённому табличному хранилищу (BaaS).
//!
//! Вся бизнес-логика зависит только от трейта [`RemoteStore`]: подсчёт строк,
//! выборка диапазона с проекцией и фильтрами, вставка, удаление и вызов RPC.

pub mod error;
pub mod paging;
pub mod postgrest;
pub mod query;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde_json::Value;

pub use error::RemoteError;
pub use query::{Filter, Order, RowRange, SelectQuery};

/// Трейт удалённого хранилища
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Точное количество строк в таблице с учётом фильтров
    async fn count(&self, table: &str, filters: &[Filter]) -> Result<u64, RemoteError>;

    /// Выборка строк в виде JSON-объектов
    async fn select(&self, query: &SelectQuery) -> Result<Vec<Value>, RemoteError>;

    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<(), RemoteError>;

    /// Удаление строк; без фильтров запрещено
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), RemoteError>;

    /// Вызов хранимой процедуры
    async fn rpc(&self, function: &str, args: Value) -> Result<Value, RemoteError>;
}
