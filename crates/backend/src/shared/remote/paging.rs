//! Постраничная выгрузка целой таблицы.
//!
//! Сначала берётся точное количество строк, затем `ceil(count / page_size)`
//! последовательных запросов диапазонов `[page * size, (page + 1) * size - 1]`.
//! Первая же ошибка прерывает выгрузку, частичный результат не возвращается.

use super::{RemoteError, RemoteStore, RowRange, SelectQuery};
use serde::de::DeserializeOwned;

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: u64 = 1000;

/// Количество страниц для `total` строк
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Диапазон строк страницы `page` (включительно)
pub fn page_range(page: u64, page_size: u64) -> RowRange {
    RowRange::new(page * page_size, (page + 1) * page_size - 1)
}

/// Выгрузить все строки таблицы и десериализовать их в `T`.
///
/// Фильтры, проекция и сортировка берутся из `query`, диапазон подставляется
/// постранично. Страницы запрашиваются строго по очереди.
pub async fn fetch_all_rows<T: DeserializeOwned>(
    store: &dyn RemoteStore,
    query: SelectQuery,
    page_size: u64,
) -> Result<Vec<T>, RemoteError> {
    if page_size == 0 {
        return Err(RemoteError::InvalidQuery(
            "page size must be greater than zero".to_string(),
        ));
    }

    let total = store.count(&query.table, &query.filters).await?;
    let pages = page_count(total, page_size);
    tracing::debug!(
        "Table {}: {} rows, {} page(s) of {}",
        query.table,
        total,
        pages,
        page_size
    );

    let mut rows = Vec::new();
    for page in 0..pages {
        let range = page_range(page, page_size);
        let page_rows = store
            .select(&query.clone().range(range))
            .await
            .map_err(|e| {
                tracing::error!(
                    "Error fetching {} rows {}-{}: {}",
                    query.table,
                    range.from,
                    range.to,
                    e
                );
                e
            })?;

        for row in page_rows {
            rows.push(serde_json::from_value(row)?);
        }
    }

    tracing::debug!("Table {}: fetched {} rows", query.table, rows.len());
    Ok(rows)
}
