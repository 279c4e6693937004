#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod disclaimer;
mod state;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(state::DesktopState::load())
        .invoke_handler(tauri::generate_handler![
            commands::catalogue,
            commands::calculator_info,
            commands::evaluate_dosage,
            commands::evaluate_insulin,
            commands::evaluate_eye_drops,
            commands::evaluate_oestrogel,
            commands::normalise_blood_pressure,
            commands::evaluate_blood_pressure,
            commands::evaluate_metric_imperial,
            commands::evaluate_future_date,
            commands::evaluate_medication_end_date,
            commands::evaluate_percentage_change,
            commands::evaluate_quantity_sync,
            commands::set_quantity_sync_count,
            commands::evaluate_non_hdl,
            commands::non_hdl_summary,
            commands::evaluate_tinzaparin,
            commands::opioid_entries,
            commands::evaluate_opioid,
            commands::opioid_summary,
            commands::hrt_products,
            commands::hrt_regimens,
            commands::evaluate_hrt,
            commands::disclaimer_accepted,
            commands::accept_disclaimer,
            commands::copy_summary,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
