use super::{Filter, RemoteError, RemoteStore, SelectQuery};
use crate::shared::config::RemoteConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_RANGE};
use serde_json::Value;
use std::time::Duration;

/// HTTP-клиент для PostgREST API удалённого хранилища (`{url}/rest/v1`)
pub struct PostgrestStore {
    client: reqwest::Client,
    rest_url: String,
    api_key: String,
}

impl PostgrestStore {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            rest_url: rest_url(&config.url),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}/{}", self.rest_url, table);
        let query = encode_params(params);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Проверить статус ответа, в случае ошибки вытащить `message` из тела
    async fn ensure_success(
        response: reqwest::Response,
        url: &str,
    ) -> Result<reqwest::Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or(body);
        tracing::error!("Remote request failed: {} {} - {}", status, url, message);
        Err(RemoteError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteStore for PostgrestStore {
    async fn count(&self, table: &str, filters: &[Filter]) -> Result<u64, RemoteError> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(filter_params(filters));
        let url = self.table_url(table, &params);
        tracing::debug!("Counting rows: HEAD {}", url);

        let response = self
            .authorized(self.client.head(&url))
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = Self::ensure_success(response, &url).await?;

        total_from_headers(response.headers())
    }

    async fn select(&self, query: &SelectQuery) -> Result<Vec<Value>, RemoteError> {
        let url = self.table_url(&query.table, &select_params(query));
        tracing::debug!("Fetching rows: GET {}", url);

        let start_time = std::time::Instant::now();
        let response = self
            .authorized(self.client.get(&url))
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = Self::ensure_success(response, &url).await?;

        let body = response.text().await?;
        let rows: Vec<Value> = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            RemoteError::Decode(format!("{} (response: {})", e, preview))
        })?;

        tracing::debug!(
            "Fetched {} rows from {} in {:.2}s",
            rows.len(),
            query.table,
            start_time.elapsed().as_secs_f64()
        );
        Ok(rows)
    }

    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<(), RemoteError> {
        let url = self.table_url(table, &[]);
        tracing::info!("Inserting {} row(s) into {}", rows.len(), table);

        let response = self
            .authorized(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;
        Self::ensure_success(response, &url).await?;
        Ok(())
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), RemoteError> {
        if filters.is_empty() {
            return Err(RemoteError::InvalidQuery(format!(
                "refusing to delete from {} without filters",
                table
            )));
        }

        let url = self.table_url(table, &filter_params(filters));
        tracing::info!("Deleting rows: DELETE {}", url);

        let response = self.authorized(self.client.delete(&url)).send().await?;
        Self::ensure_success(response, &url).await?;
        Ok(())
    }

    async fn rpc(&self, function: &str, args: Value) -> Result<Value, RemoteError> {
        let url = format!("{}/rpc/{}", self.rest_url, function);
        tracing::info!("Calling RPC {}", function);

        let response = self
            .authorized(self.client.post(&url))
            .json(&args)
            .send()
            .await?;
        let response = Self::ensure_success(response, &url).await?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// `https://project.example.co/` -> `https://project.example.co/rest/v1`
fn rest_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/rest/v1") {
        base.to_string()
    } else {
        format!("{}/rest/v1", base)
    }
}

fn filter_params(filters: &[Filter]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|f| (f.column.clone(), format!("eq.{}", f.value)))
        .collect()
}

/// Параметры выборки: проекция, фильтры, сортировка и offset/limit
fn select_params(query: &SelectQuery) -> Vec<(String, String)> {
    let columns = query.column_list();
    let select = if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(",")
    };

    let mut params = vec![("select".to_string(), select)];
    params.extend(filter_params(&query.filters));

    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }
    if let Some(range) = query.range {
        params.push(("offset".to_string(), range.from.to_string()));
        params.push(("limit".to_string(), range.limit().to_string()));
    }
    params
}

fn encode_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn total_from_headers(headers: &HeaderMap) -> Result<u64, RemoteError> {
    let value = headers
        .get(CONTENT_RANGE)
        .ok_or_else(|| RemoteError::Protocol("Content-Range header is missing".to_string()))?
        .to_str()
        .map_err(|e| RemoteError::Protocol(format!("Content-Range is not ASCII: {}", e)))?;
    parse_content_range_total(value)
}

/// Итог из `Content-Range`: `0-999/3573` или `*/0`
fn parse_content_range_total(value: &str) -> Result<u64, RemoteError> {
    let (_, total) = value
        .trim()
        .rsplit_once('/')
        .ok_or_else(|| RemoteError::Protocol(format!("Unexpected Content-Range: {}", value)))?;
    total
        .parse::<u64>()
        .map_err(|_| RemoteError::Protocol(format!("Row count is unknown: {}", value)))
}
