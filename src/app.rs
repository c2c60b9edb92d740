//! Product Ledger App
//!
//! Single-page layout: heading, toolbar, product table and notices.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LedgerTable, NoticeStack, Toolbar};
use crate::config::AppConfig;
use crate::context::Notifier;
use crate::store::LedgerState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Provide context to all children
    provide_context(Notifier::new(config.notice_timeout_ms));
    provide_context(Store::new(LedgerState::default()));
    provide_context(config);

    view! {
        <div class="page">
            <div class="container">
                <header class="page-header">
                    <h1>"Product Ledger"</h1>
                    <p class="subtitle">"Fill in the table and export it for accounting import"</p>
                </header>

                <section class="card">
                    <Toolbar />
                    <LedgerTable />
                </section>
            </div>

            <NoticeStack />
        </div>
    }
}
