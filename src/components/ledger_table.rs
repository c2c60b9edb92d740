//! Ledger Table Component
//!
//! Product rows followed by the grand total.

use leptos::prelude::*;

use ledger_core::{format_amount, Row};

use super::ProductRow;
use crate::store::{store_rows, store_total, use_ledger_store};

/// Footer row with the grand total
#[component]
fn TotalsRow() -> impl IntoView {
    let store = use_ledger_store();

    view! {
        <tr class="totals-row">
            <td colspan="3" class="totals-label">"TOTAL:"</td>
            <td class="totals-sum">{move || format_amount(store_total(&store))}</td>
            <td></td>
        </tr>
    }
}

#[component]
pub fn LedgerTable() -> impl IntoView {
    let store = use_ledger_store();

    view! {
        <div class="table-frame">
            <table class="ledger-table">
                <thead>
                    <tr>
                        <th class="col-name">"Product name"</th>
                        <th class="col-number">"Quantity"</th>
                        <th class="col-number">"Price"</th>
                        <th class="col-sum">"Sum"</th>
                        <th class="col-action"></th>
                    </tr>
                </thead>
                <tbody>
                    // Keyed by id so inputs keep focus while their row is edited
                    <For
                        each=move || store_rows(&store)
                        key=|row: &Row| row.id
                        children=move |row: Row| view! { <ProductRow row_id=row.id /> }
                    />
                    <TotalsRow />
                </tbody>
            </table>
        </div>
    }
}
