//! Product Row Component
//!
//! One editable table row: name, quantity and price inputs, the derived
//! sum, and a remove button.

use leptos::prelude::*;

use ledger_core::{format_amount, RowField, RowId};

use crate::context::{use_notifier, Notifier};
use crate::store::{
    store_field_untracked, store_remove_row, store_row_sum, store_update_field, use_ledger_store,
    LedgerStore,
};

/// Remove a row, warning the user when it is the last one
pub(crate) fn remove_row_or_warn(store: &LedgerStore, notifier: &Notifier, row_id: RowId) {
    if let Err(e) = store_remove_row(store, row_id) {
        log::warn!("[ROW] Refused to remove row {}: {}", row_id, e);
        notifier.warning("Cannot remove", e.to_string());
    }
}

/// Text input bound to one row field.
///
/// The value is seeded once: only this input edits the field, and writing it
/// back would clear partial number text the browser reports as "".
#[component]
fn FieldInput(
    row_id: RowId,
    field: RowField,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let store = use_ledger_store();
    let input_type = if field.is_numeric() { "number" } else { "text" };

    view! {
        <input
            type=input_type
            class="field-input"
            name=field.as_str()
            placeholder=placeholder
            min=field.is_numeric().then_some("0")
            step=field.is_numeric().then_some("0.01")
            value=store_field_untracked(&store, row_id, field)
            on:input=move |ev| store_update_field(&store, row_id, field, event_target_value(&ev))
        />
    }
}

#[component]
pub fn ProductRow(row_id: RowId) -> impl IntoView {
    let store = use_ledger_store();
    let notifier = use_notifier();

    let remove = move |_| remove_row_or_warn(&store, &notifier, row_id);

    view! {
        <tr class="product-row">
            <td><FieldInput row_id=row_id field=RowField::Name placeholder="Enter a name" /></td>
            <td><FieldInput row_id=row_id field=RowField::Quantity placeholder="0" /></td>
            <td><FieldInput row_id=row_id field=RowField::Price placeholder="0.00" /></td>
            <td class="sum-cell">{move || format_amount(store_row_sum(&store, row_id))}</td>
            <td>
                <button class="btn btn-ghost delete-btn" title="Remove row" on:click=remove>
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
