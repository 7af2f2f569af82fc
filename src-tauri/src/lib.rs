//! Game Shelf Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - catalog: RAWG game search
//! - commands: Tauri command handlers

use tauri::Manager;

mod catalog;
mod commands;
mod config;
mod domain;
mod repository;

use catalog::CatalogClient;
use config::AppConfig;
use repository::{init_db, GameRepository, TaskRepository};

/// Application state shared across commands
pub struct AppState {
    pub games: GameRepository,
    pub tasks: TaskRepository,
    pub catalog: CatalogClient,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = AppConfig::from_env();

    let result = tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(move |app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            let log_dir = app_handle.path().app_log_dir()?;
            if let Err(e) = rolling_logger::init_logger(log_dir, "GameShelf", config.log_level) {
                eprintln!("Logger init failed, continuing without file logs: {}", e);
            }

            let data_dir = app_handle.path().app_data_dir()?;
            let db_path = config.db_path(&data_dir);
            log::info!("[{}] Opening database at {}", chrono::Local::now().format("%H:%M:%S%.3f"), db_path.display());

            let db_state = init_db(&db_path).map_err(|e| {
                let _ = rolling_logger::error(&format!("DB init failed: {}", e));
                e
            })?;

            if config.rawg_api_key.is_none() {
                log::warn!("RAWG_API_KEY is not set; catalog search will fail");
            }

            app.manage(AppState {
                games: GameRepository::new(db_state.connection()),
                tasks: TaskRepository::new(db_state.connection()),
                catalog: CatalogClient::new(&config),
            });

            let _ = rolling_logger::info("App setup complete");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Games
            commands::create_game,
            commands::list_games,
            commands::update_game_membership,
            commands::delete_game,
            // Task checklists
            commands::create_task,
            commands::list_tasks,
            commands::toggle_task,
            commands::delete_task,
            // Catalog
            commands::search_catalog,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        log::error!("error while running tauri application: {}", e);
        std::process::exit(1);
    }
}
