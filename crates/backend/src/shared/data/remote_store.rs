use crate::shared::config::RemoteConfig;
use crate::shared::remote::postgrest::PostgrestStore;
use crate::shared::remote::RemoteStore;
use once_cell::sync::OnceCell;
use std::sync::Arc;

static REMOTE_STORE: OnceCell<Arc<dyn RemoteStore>> = OnceCell::new();

/// Создать клиент удалённого хранилища на всё время жизни процесса
pub fn initialize_remote_store(config: &RemoteConfig) -> anyhow::Result<()> {
    let store = PostgrestStore::new(config)
        .map_err(|e| anyhow::anyhow!("remote store init failed: {e}"))?;
    REMOTE_STORE
        .set(Arc::new(store))
        .map_err(|_| anyhow::anyhow!("Remote store is already initialized"))?;
    tracing::info!("Remote store initialized: {}", config.url);
    Ok(())
}

pub fn get_store() -> anyhow::Result<Arc<dyn RemoteStore>> {
    REMOTE_STORE
        .get()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Remote store has not been initialized"))
}
