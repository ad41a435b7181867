use crate::config::{self, AgentSettings};
use crate::error::AppResult;
use crate::state::AppState;

#[tauri::command]
pub async fn get_settings(state: tauri::State<'_, AppState>) -> AppResult<AgentSettings> {
    Ok(state.settings.lock().await.clone())
}

#[tauri::command(rename_all = "camelCase")]
pub async fn update_settings(
    state: tauri::State<'_, AppState>,
    base_url: String,
) -> AppResult<()> {
    let settings = AgentSettings { base_url };
    config::save_settings(&settings).await?;
    *state.settings.lock().await = settings;
    Ok(())
}
