pub mod agent;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod state;

use tauri::Manager;

use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let settings = config::load_settings();
    let client = agent::client::AgentClient::new().expect("Failed to build HTTP client");

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::new(settings, client))
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Debug)
                        .build(),
                )?;
            } else {
                // Also log in release mode but at info level
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // One-shot startup fetch; the page can re-request via the
            // load_task_catalog command.
            let state = app.state::<AppState>().inner().clone();
            tauri::async_runtime::spawn(async move {
                commands::task_commands::refresh_task_catalog(&state).await;
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Chat commands
            commands::chat_commands::send_prompt,
            commands::chat_commands::get_messages,
            commands::chat_commands::get_session,
            commands::chat_commands::attach_file,
            commands::chat_commands::clear_file,
            // Task catalog commands
            commands::task_commands::load_task_catalog,
            commands::task_commands::get_task_catalog,
            commands::task_commands::select_task,
            commands::task_commands::list_models,
            // Settings commands
            commands::settings_commands::get_settings,
            commands::settings_commands::update_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
