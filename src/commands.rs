use crate::api::Registry;
use crate::model::Shortcut;
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime, State};

// ── Shortcut Commands ──

#[tauri::command]
pub fn get_shortcuts(registry: State<'_, Registry>) -> Result<Vec<Shortcut>, String> {
    Ok(registry.get_shortcuts())
}

#[tauri::command]
pub fn set_shortcuts(
    registry: State<'_, Registry>,
    shortcuts: Vec<Shortcut>,
) -> Result<Vec<Shortcut>, String> {
    registry.set_shortcuts(shortcuts).map_err(|e| e.to_string())
}

// ── Launch Commands ──

#[tauri::command]
pub fn launch_app(
    registry: State<'_, Registry>,
    name: String,
    path: String,
) -> Result<u32, String> {
    registry
        .launch_app(&name, &path)
        .map(|receipt| receipt.pid)
        .map_err(|e| e.to_string())
}

/// Tauri plugin exposing the registry to a webview front-end.
pub fn init<R: Runtime>(registry: Registry) -> TauriPlugin<R> {
    Builder::new("shortcuts")
        .invoke_handler(tauri::generate_handler![get_shortcuts, set_shortcuts, launch_app])
        .setup(move |app, _api| {
            app.manage(registry);
            Ok(())
        })
        .build()
}
