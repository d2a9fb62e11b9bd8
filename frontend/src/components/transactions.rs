use chrono::Utc;
use yew::prelude::*;

use super::icons::{icon_edit, icon_file_text, icon_filter, icon_trash, transaction_icon};
use super::{input_value, select_value};
use crate::filters::{FilterField, TransactionFilters, FILTER_CATEGORIES};
use crate::format::{capitalize, format_date, signed_amount};
use crate::ledger::{is_editable, EDIT_WINDOW_HOURS};
use crate::models::{Division, Transaction, TransactionType};

const SELECT_CLASS: &str = "w-full px-3 py-2 bg-white border border-slate-200 rounded-lg text-sm text-slate-700";

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
    pub filters: TransactionFilters,
    pub on_filter: Callback<(FilterField, String)>,
    pub on_edit: Callback<Transaction>,
    pub on_delete: Callback<String>,
}

fn filter_select(
    label: &'static str,
    field: FilterField,
    current: String,
    options: Vec<(&'static str, String)>,
    on_filter: &Callback<(FilterField, String)>,
) -> Html {
    let on_filter = on_filter.clone();
    let onchange = Callback::from(move |e: Event| on_filter.emit((field, select_value(&e))));
    html! {
        <div>
            <label class="block text-xs font-semibold text-slate-500 mb-1">{ label }</label>
            <select class={SELECT_CLASS} onchange={onchange}>
                <option value="" selected={current.is_empty()}>{"All"}</option>
                { for options.into_iter().map(|(value, text)| html! {
                    <option value={value} selected={current == value}>{ text }</option>
                }) }
            </select>
        </div>
    }
}

fn filter_date(
    label: &'static str,
    field: FilterField,
    current: String,
    min: Option<String>,
    on_filter: &Callback<(FilterField, String)>,
) -> Html {
    let on_filter = on_filter.clone();
    let oninput = Callback::from(move |e: InputEvent| on_filter.emit((field, input_value(&e))));
    html! {
        <div>
            <label class="block text-xs font-semibold text-slate-500 mb-1">{ label }</label>
            <input type="date" class={SELECT_CLASS} value={current} min={min} oninput={oninput} />
        </div>
    }
}

fn amount_tone(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "text-emerald-600",
        TransactionType::Expense => "text-rose-600",
        TransactionType::Transfer => "text-blue-600",
    }
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let show_filters = use_state(|| false);

    let toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| show_filters.set(!*show_filters))
    };

    let filters = &props.filters;
    let from = filters.raw(FilterField::From);
    let now = Utc::now();

    html! {
        <section class="bg-white rounded-2xl border border-slate-100 shadow-sm mt-8">
            <div class="flex items-center justify-between p-6 border-b border-slate-100">
                <h2 class="text-lg font-bold text-slate-800">{"Recent Transactions"}</h2>
                <button onclick={toggle_filters} class="flex items-center gap-2 px-3 py-2 text-sm font-semibold text-slate-600 rounded-lg hover:bg-slate-50">
                    { icon_filter() }
                    <span>{ if *show_filters { "Hide Filters" } else { "Filters" } }</span>
                </button>
            </div>

            if *show_filters {
                <div class="grid grid-cols-2 md:grid-cols-5 gap-4 p-6 bg-slate-50 border-b border-slate-100">
                    { filter_select(
                        "Type",
                        FilterField::Kind,
                        filters.raw(FilterField::Kind),
                        TransactionType::ALL.iter().map(|k| (k.as_str(), k.label().to_string())).collect(),
                        &props.on_filter,
                    ) }
                    { filter_select(
                        "Division",
                        FilterField::Division,
                        filters.raw(FilterField::Division),
                        Division::ALL.iter().map(|d| (d.as_str(), d.label().to_string())).collect(),
                        &props.on_filter,
                    ) }
                    { filter_select(
                        "Category",
                        FilterField::Category,
                        filters.raw(FilterField::Category),
                        FILTER_CATEGORIES.iter().map(|c| (*c, capitalize(c))).collect(),
                        &props.on_filter,
                    ) }
                    { filter_date("From", FilterField::From, from.clone(), None, &props.on_filter) }
                    { filter_date(
                        "To",
                        FilterField::To,
                        filters.raw(FilterField::To),
                        (!from.is_empty()).then_some(from),
                        &props.on_filter,
                    ) }
                </div>
            }

            if props.transactions.is_empty() {
                <div class="flex flex-col items-center gap-2 py-16 text-slate-400">
                    { icon_file_text() }
                    <p class="text-sm font-medium">{"No transactions found."}</p>
                </div>
            } else {
                <div class="overflow-x-auto">
                    <table class="w-full text-left text-sm">
                        <thead class="text-xs uppercase text-slate-400 border-b border-slate-100">
                            <tr>
                                <th class="px-6 py-3">{"Transaction"}</th>
                                <th class="px-6 py-3">{"Category"}</th>
                                <th class="px-6 py-3">{"Account"}</th>
                                <th class="px-6 py-3">{"Date"}</th>
                                <th class="px-6 py-3 text-right">{"Amount"}</th>
                                <th class="px-6 py-3 text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for props.transactions.iter().map(|tx| transaction_row(tx, now, &props.on_edit, &props.on_delete)) }
                        </tbody>
                    </table>
                </div>
            }
        </section>
    }
}

fn transaction_row(
    tx: &Transaction,
    now: chrono::DateTime<Utc>,
    on_edit: &Callback<Transaction>,
    on_delete: &Callback<String>,
) -> Html {
    let editable = is_editable(tx.created_at, now);
    let account = if tx.kind == TransactionType::Transfer {
        format!(
            "{} → {}",
            Transaction::account_label(tx.from_account.as_ref()),
            Transaction::account_label(tx.to_account.as_ref())
        )
    } else {
        Transaction::account_label(tx.from_account.as_ref()).to_string()
    };

    let edit = {
        let on_edit = on_edit.clone();
        let tx = tx.clone();
        Callback::from(move |_| on_edit.emit(tx.clone()))
    };
    let delete = {
        let on_delete = on_delete.clone();
        let id = tx.id.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };
    let edit_title = if editable {
        "Edit".to_string()
    } else {
        format!("Editing locked after {}h", EDIT_WINDOW_HOURS)
    };

    html! {
        <tr key={tx.id.clone()} class="border-b border-slate-50 hover:bg-slate-50">
            <td class="px-6 py-4">
                <div class="flex items-center gap-3">
                    <div class={classes!("p-2", "rounded-lg", "bg-slate-50", amount_tone(tx.kind))}>{ transaction_icon(tx.kind) }</div>
                    <div>
                        <p class="font-semibold text-slate-800">{ &tx.description }</p>
                        <p class="text-xs text-slate-400">{ tx.division.label() }</p>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 text-slate-600">{ capitalize(&tx.category) }</td>
            <td class="px-6 py-4 text-slate-600">{ account }</td>
            <td class="px-6 py-4 text-slate-500">{ format_date(tx.created_at) }</td>
            <td class={classes!("px-6", "py-4", "text-right", "font-bold", amount_tone(tx.kind))}>
                { signed_amount(tx.kind, tx.amount) }
            </td>
            <td class="px-6 py-4">
                <div class="flex justify-end gap-2">
                    <button onclick={edit} disabled={!editable} title={edit_title}
                        class="p-2 text-slate-400 hover:text-blue-600 rounded-lg disabled:opacity-30 disabled:cursor-not-allowed">
                        { icon_edit() }
                    </button>
                    <button onclick={delete} title="Delete" class="p-2 text-slate-400 hover:text-rose-600 rounded-lg">
                        { icon_trash() }
                    </button>
                </div>
            </td>
        </tr>
    }
}
