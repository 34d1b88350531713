use contracts::dashboards::d400_financial_totals::FinancialTotals;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Ключ сводки в кэше
pub const FINANCIAL_TOTALS_KEY: &str = "financial-totals";

#[derive(Clone)]
struct CachedTotals {
    computed_at: Instant,
    totals: FinancialTotals,
}

/// Кратковременный кэш сводки (in-memory).
/// Ошибочный расчёт в кэш не попадает и не затирает предыдущее значение.
#[derive(Clone)]
pub struct TotalsCache {
    entries: Arc<RwLock<HashMap<String, CachedTotals>>>,
    ttl: Duration,
}

impl TotalsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Значение из кэша, если оно моложе TTL
    pub fn get_fresh(&self) -> Option<FinancialTotals> {
        if self.ttl.is_zero() {
            return None;
        }
        let entries = self.entries.read().ok()?;
        entries
            .get(FINANCIAL_TOTALS_KEY)
            .filter(|e| e.computed_at.elapsed() < self.ttl)
            .map(|e| e.totals.clone())
    }

    pub fn put(&self, totals: FinancialTotals) {
        if self.ttl.is_zero() {
            return;
        }
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                FINANCIAL_TOTALS_KEY.to_string(),
                CachedTotals {
                    computed_at: Instant::now(),
                    totals,
                },
            );
        }
    }

    pub fn invalidate(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(FINANCIAL_TOTALS_KEY);
        }
    }

    /// Вернуть свежее значение или посчитать заново.
    /// Блокировка не удерживается во время расчёта.
    pub async fn get_or_compute<F, Fut, E>(&self, compute: F) -> Result<FinancialTotals, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<FinancialTotals, E>>,
    {
        if let Some(totals) = self.get_fresh() {
            tracing::debug!("Financial totals served from cache");
            return Ok(totals);
        }

        let totals = compute().await?;
        self.put(totals.clone());
        Ok(totals)
    }
}
