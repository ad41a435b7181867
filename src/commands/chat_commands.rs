use std::path::PathBuf;

use crate::agent::response::normalize_response;
use crate::error::AppResult;
use crate::models::message::ChatMessage;
use crate::session::SessionSnapshot;
use crate::state::AppState;

/// Extensions the page offers in its file picker. Informational only; the
/// service accepts anything.
const SOURCE_FILE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "py", "java", "cpp", "c", "cs", "go", "rb", "php",
];

/// Run one submission cycle: append the user message, POST to the agent
/// endpoint, append exactly one agent message (reply or error text), then
/// clear the in-flight state. Returns `None` when there was nothing to
/// send.
///
/// The session lock is held only across state mutation, never across the
/// network leg, so the window stays responsive while a request is in
/// flight. Concurrent calls are not rejected; they race, each appending
/// its own user/agent pair.
#[tauri::command]
pub async fn send_prompt(
    state: tauri::State<'_, AppState>,
    query: String,
) -> AppResult<Option<ChatMessage>> {
    log::info!("send_prompt called: query_len={}", query.len());

    let submission = {
        let mut session = state.session.lock().await;
        session.begin_submission(&query)
    };

    let Some(submission) = submission else {
        log::debug!("send_prompt ignored: blank query and no attached file");
        return Ok(None);
    };

    let base_url = state.settings.lock().await.base_url.clone();
    let outcome = state.client.submit(&base_url, &submission).await;

    let mut session = state.session.lock().await;
    let message = match outcome {
        Ok(body) => {
            let reply = normalize_response(&body);
            session.record_reply(reply.content, reply.model_info)
        }
        Err(e) => {
            log::error!("Agent request failed: {}", e);
            session.record_reply(e.to_string(), None)
        }
    };
    session.settle();

    log::info!("send_prompt completed");
    Ok(Some(message))
}

#[tauri::command]
pub async fn get_messages(state: tauri::State<'_, AppState>) -> AppResult<Vec<ChatMessage>> {
    let session = state.session.lock().await;
    Ok(session.history().to_vec())
}

#[tauri::command]
pub async fn get_session(state: tauri::State<'_, AppState>) -> AppResult<SessionSnapshot> {
    let session = state.session.lock().await;
    Ok(session.snapshot())
}

#[tauri::command]
pub async fn attach_file(state: tauri::State<'_, AppState>, path: String) -> AppResult<()> {
    let path = PathBuf::from(path);

    let known_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_FILE_EXTENSIONS.iter().any(|known| e.eq_ignore_ascii_case(known)))
        .unwrap_or(false);
    if !known_extension {
        log::debug!("Attached file has an unusual extension: {:?}", path);
    }

    state.session.lock().await.attach_file(path);
    Ok(())
}

#[tauri::command]
pub async fn clear_file(state: tauri::State<'_, AppState>) -> AppResult<()> {
    state.session.lock().await.clear_file();
    Ok(())
}
