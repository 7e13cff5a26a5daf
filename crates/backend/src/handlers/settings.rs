use axum::Json;
use contracts::shared::quick_entry_settings::QuickEntrySettings;

use crate::shared::config;

/// GET /api/settings/quick_entry
pub async fn quick_entry() -> Json<QuickEntrySettings> {
    Json(config::get().quick_entry.clone())
}
