//! Хранилище в памяти для тестов сервисов.

use super::{Filter, RemoteError, RemoteStore, RowRange, SelectQuery};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    tables: HashMap<String, Vec<Value>>,
    rpc_results: HashMap<String, Result<Value, String>>,
    /// Таблица -> первая строка диапазона, начиная с которой выборка падает
    fail_from: HashMap<String, u64>,
    /// Таблицы, подсчёт строк в которых падает
    failing_counts: HashSet<String>,
    /// Подменённый результат `count` (как будто его вернул сервер)
    reported_counts: HashMap<String, u64>,
    selects: Vec<(String, Option<RowRange>)>,
    rpc_calls: Vec<(String, Value)>,
    deletes: Vec<(String, Vec<Filter>)>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, table: &str, rows: Vec<Value>) -> Self {
        self.state
            .lock()
            .unwrap()
            .tables
            .insert(table.to_string(), rows);
        self
    }

    pub fn with_rpc(self, function: &str, result: Value) -> Self {
        self.state
            .lock()
            .unwrap()
            .rpc_results
            .insert(function.to_string(), Ok(result));
        self
    }

    pub fn with_failing_rpc(self, function: &str, message: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rpc_results
            .insert(function.to_string(), Err(message.to_string()));
        self
    }

    /// Выборки из `table`, чей диапазон начинается с `from` или дальше, вернут ошибку
    pub fn failing_from(self, table: &str, from: u64) -> Self {
        self.state
            .lock()
            .unwrap()
            .fail_from
            .insert(table.to_string(), from);
        self
    }

    pub fn failing_count(self, table: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_counts
            .insert(table.to_string());
        self
    }

    pub fn with_reported_count(self, table: &str, count: u64) -> Self {
        self.state
            .lock()
            .unwrap()
            .reported_counts
            .insert(table.to_string(), count);
        self
    }

    /// Диапазоны всех выборок из таблицы в порядке вызова
    pub fn select_ranges(&self, table: &str) -> Vec<Option<RowRange>> {
        self.state
            .lock()
            .unwrap()
            .selects
            .iter()
            .filter(|(t, _)| t == table)
            .map(|(_, r)| *r)
            .collect()
    }

    pub fn rpc_calls(&self) -> Vec<(String, Value)> {
        self.state.lock().unwrap().rpc_calls.clone()
    }

    pub fn deletes(&self) -> Vec<(String, Vec<Filter>)> {
        self.state.lock().unwrap().deletes.clone()
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .tables
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

fn matching<'a>(rows: &'a [Value], filters: &'a [Filter]) -> impl Iterator<Item = &'a Value> {
    rows.iter()
        .filter(move |row| filters.iter().all(|f| f.matches(row)))
}

fn project(row: &Value, columns: &[String]) -> Value {
    if columns.is_empty() {
        return row.clone();
    }
    let mut out = Map::new();
    for column in columns {
        out.insert(
            column.clone(),
            row.get(column).cloned().unwrap_or(Value::Null),
        );
    }
    Value::Object(out)
}

fn sort_key(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn count(&self, table: &str, filters: &[Filter]) -> Result<u64, RemoteError> {
        let state = self.state.lock().unwrap();
        if state.failing_counts.contains(table) {
            return Err(RemoteError::Api {
                status: 503,
                message: format!("simulated count failure for {}", table),
            });
        }
        if let Some(&count) = state.reported_counts.get(table) {
            return Ok(count);
        }
        let rows = state.tables.get(table).map(Vec::as_slice).unwrap_or(&[]);
        Ok(matching(rows, filters).count() as u64)
    }

    async fn select(&self, query: &SelectQuery) -> Result<Vec<Value>, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.selects.push((query.table.clone(), query.range));

        if let Some(&fail_from) = state.fail_from.get(&query.table) {
            let from = query.range.map(|r| r.from).unwrap_or(0);
            if from >= fail_from {
                return Err(RemoteError::Api {
                    status: 500,
                    message: format!("simulated failure for {}", query.table),
                });
            }
        }

        let rows = state.tables.get(&query.table).map(Vec::as_slice).unwrap_or(&[]);
        let mut selected: Vec<&Value> = matching(rows, &query.filters).collect();
        if let Some(order) = &query.order {
            selected.sort_by_key(|row| sort_key(row.get(&order.column)));
            if !order.ascending {
                selected.reverse();
            }
        }

        let columns = query.column_list();
        let (skip, take) = match query.range {
            Some(range) => (range.from as usize, range.limit() as usize),
            None => (0, usize::MAX),
        };
        Ok(selected
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|row| project(row, &columns))
            .collect())
    }

    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<(), RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.tables.entry(table.to_string()).or_default().extend(rows);
        Ok(())
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), RemoteError> {
        if filters.is_empty() {
            return Err(RemoteError::InvalidQuery("delete without filters".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        state.deletes.push((table.to_string(), filters.to_vec()));
        if let Some(rows) = state.tables.get_mut(table) {
            rows.retain(|row| !filters.iter().all(|f| f.matches(row)));
        }
        Ok(())
    }

    async fn rpc(&self, function: &str, args: Value) -> Result<Value, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.rpc_calls.push((function.to_string(), args));
        match state.rpc_results.get(function) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(RemoteError::Api {
                status: 400,
                message: message.clone(),
            }),
            None => Err(RemoteError::Api {
                status: 404,
                message: format!("function {} not found", function),
            }),
        }
    }
}
