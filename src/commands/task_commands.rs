use crate::error::{AppError, AppResult};
use crate::models::model_profile::ModelCatalog;
use crate::models::task::TaskCatalog;
use crate::state::AppState;

/// Fetch the task catalog from the service and cache it. Failure leaves
/// the cache empty and is not surfaced to the page; it simply has no
/// tasks to offer until a later call succeeds.
pub async fn refresh_task_catalog(state: &AppState) -> TaskCatalog {
    let base_url = state.settings.lock().await.base_url.clone();
    match state.client.fetch_tasks(&base_url).await {
        Ok(tasks) => {
            log::info!("Task catalog loaded: {} tasks", tasks.len());
            let mut cache = state.tasks.lock().await;
            *cache = tasks.clone();
            tasks
        }
        Err(e) => {
            log::warn!("Failed to load task catalog: {}", e);
            TaskCatalog::new()
        }
    }
}

#[tauri::command]
pub async fn load_task_catalog(state: tauri::State<'_, AppState>) -> AppResult<TaskCatalog> {
    Ok(refresh_task_catalog(state.inner()).await)
}

#[tauri::command]
pub async fn get_task_catalog(state: tauri::State<'_, AppState>) -> AppResult<TaskCatalog> {
    Ok(state.tasks.lock().await.clone())
}

#[tauri::command(rename_all = "camelCase")]
pub async fn select_task(state: tauri::State<'_, AppState>, task_key: String) -> AppResult<()> {
    {
        let tasks = state.tasks.lock().await;
        if !tasks.contains_key(&task_key) {
            return Err(AppError::InvalidRequest(format!("Unknown task: {task_key}")));
        }
    }
    state.session.lock().await.select_task(task_key);
    Ok(())
}

/// Model catalog, fetched on first use. Same failure contract as the task
/// catalog: an unreachable service yields an empty mapping, not an error.
#[tauri::command]
pub async fn list_models(state: tauri::State<'_, AppState>) -> AppResult<ModelCatalog> {
    {
        let cache = state.models.lock().await;
        if !cache.is_empty() {
            return Ok(cache.clone());
        }
    }

    let base_url = state.settings.lock().await.base_url.clone();
    match state.client.fetch_models(&base_url).await {
        Ok(models) => {
            log::info!("Model catalog loaded: {} models", models.len());
            let mut cache = state.models.lock().await;
            *cache = models.clone();
            Ok(models)
        }
        Err(e) => {
            log::warn!("Failed to load model catalog: {}", e);
            Ok(ModelCatalog::new())
        }
    }
}
