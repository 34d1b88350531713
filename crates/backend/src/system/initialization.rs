use anyhow::Result;
use once_cell::sync::OnceCell;
use std::time::Duration;

use crate::dashboards::d400_financial_totals::cache::TotalsCache;
use crate::shared::config::Config;
use crate::shared::data::remote_store;

static APP_CONFIG: OnceCell<Config> = OnceCell::new();
static TOTALS_CACHE: OnceCell<TotalsCache> = OnceCell::new();

/// Инициализация состояния процесса: конфиг, клиент хранилища, кэш сводки
pub fn initialize_app(config: Config) -> Result<()> {
    remote_store::initialize_remote_store(&config.remote)?;

    TOTALS_CACHE
        .set(TotalsCache::new(Duration::from_secs(config.cache.ttl_secs)))
        .map_err(|_| anyhow::anyhow!("Totals cache is already initialized"))?;

    tracing::info!(
        "App initialized: page size {}, totals cache ttl {}s",
        config.paging.page_size,
        config.cache.ttl_secs
    );
    APP_CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("App config is already initialized"))?;
    Ok(())
}

pub fn app_config() -> Result<&'static Config> {
    APP_CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("App config has not been initialized"))
}

/// Размер страницы для выгрузки таблиц
pub fn page_size() -> Result<u64> {
    Ok(app_config()?.paging.page_size)
}

pub fn totals_cache() -> Result<&'static TotalsCache> {
    TOTALS_CACHE
        .get()
        .ok_or_else(|| anyhow::anyhow!("Totals cache has not been initialized"))
}
