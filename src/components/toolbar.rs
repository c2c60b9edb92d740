//! Toolbar Component
//!
//! Add-row and export buttons above the table.

use chrono::Local;
use leptos::prelude::*;

use ledger_core::{ExportConfig, ExportPayload, ProductTable};

use crate::commands;
use crate::config::AppConfig;
use crate::context::use_notifier;
use crate::store::{store_add_row, store_table_untracked, use_ledger_store};

/// Build the export file for today and hand it to the browser.
/// Returns the saved file name.
fn export_table(table: &ProductTable, config: &ExportConfig) -> Result<String, String> {
    let payload = ExportPayload::build(table, config, Local::now().date_naive())
        .map_err(|e| e.to_string())?;
    commands::save_file(&payload)?;
    Ok(payload.file_name)
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_ledger_store();
    let notifier = use_notifier();
    let config = expect_context::<AppConfig>();

    let add_row = move |_| {
        let id = store_add_row(&store);
        log::debug!("[TOOLBAR] Added row {}", id);
    };

    let export = move |_| {
        let table = store_table_untracked(&store);
        match export_table(&table, &config.export) {
            Ok(file_name) => {
                log::info!("[EXPORT] {} rows written to {}", table.len(), file_name);
                notifier.info("Export complete", "The file is ready for import");
            }
            Err(e) => {
                log::error!("[EXPORT] {}", e);
                notifier.warning("Export failed", e);
            }
        }
    };

    view! {
        <div class="toolbar">
            <button class="btn btn-primary" on:click=add_row>
                <span class="btn-icon">"+"</span>
                "Add row"
            </button>
            <button class="btn btn-outline" on:click=export>
                <span class="btn-icon">"⭳"</span>
                "Export to CSV"
            </button>
        </div>
    }
}
