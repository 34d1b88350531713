use axum::http::StatusCode;
use std::sync::Arc;

use crate::shared::data::remote_store::get_store;
use crate::shared::remote::RemoteStore;
use crate::system::initialization::page_size;

// Aggregate handlers
pub mod a001_member;

// Dashboard handlers
pub mod d400_financial_totals;

// System handlers
pub mod diagnostics;
pub mod roles;

/// Хранилище и размер страницы; ошибка инициализации -> 500
pub(crate) fn remote_context() -> Result<(Arc<dyn RemoteStore>, u64), StatusCode> {
    let store = get_store().map_err(internal_error)?;
    let page_size = page_size().map_err(internal_error)?;
    Ok((store, page_size))
}

pub(crate) fn internal_error(e: anyhow::Error) -> StatusCode {
    tracing::error!("{:#}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}
