use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::icons::icon_close;
use super::{input_value, select_value, use_api, use_notifier};
use crate::format::capitalize;
use crate::ledger::{categories_for, TransactionDraft, DESCRIPTION_MAX_CHARS};
use crate::models::{Account, Division, Transaction, TransactionType};

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-slate-200 rounded-lg text-black";

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub open: bool,
    #[prop_or_default]
    pub editing: Option<Transaction>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<TransactionDraft>,
}

fn account_select(
    label: &'static str,
    current: &str,
    accounts: &[Account],
    onchange: Callback<Event>,
) -> Html {
    html! {
        <div>
            <label class="block text-sm font-medium text-slate-700 mb-1">{ label }</label>
            <select class={INPUT_CLASS} onchange={onchange} required={true}>
                <option value="" selected={current.is_empty()} disabled={true}>{"Select account"}</option>
                { for accounts.iter().map(|account| html! {
                    <option value={account.id.clone()} selected={account.id == current}>
                        { format!("{} ({})", account.name, account.kind.label()) }
                    </option>
                }) }
            </select>
        </div>
    }
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let client = use_api();
    let notifier = use_notifier();
    let accounts = use_state(Vec::<Account>::new);
    let draft = use_state(TransactionDraft::default);

    {
        let accounts = accounts.clone();
        let draft = draft.clone();
        let notifier = notifier.clone();
        use_effect_with_deps(
            move |(open, editing): &(bool, Option<Transaction>)| {
                if *open {
                    draft.set(TransactionDraft::for_dialog(editing.as_ref()));
                    spawn_local(async move {
                        match client.list_accounts().await {
                            Ok(list) => accounts.set(list),
                            Err(err) => notifier.api_error(&err, "Failed to load accounts"),
                        }
                    });
                }
                || ()
            },
            (props.open, props.editing.clone()),
        );
    }

    if !props.open {
        return html! {};
    }

    let update = {
        let draft = draft.clone();
        move |apply: fn(&mut TransactionDraft, String)| {
            let draft = draft.clone();
            move |value: String| {
                let mut next = (*draft).clone();
                apply(&mut next, value);
                draft.set(next);
            }
        }
    };

    let on_amount = {
        let set = update(|d, v| d.amount = v);
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_description = {
        let set = update(|d, v| d.description = v);
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_category = {
        let set = update(|d, v| d.category = v);
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_from = {
        let set = update(|d, v| d.from_account = v);
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_to = {
        let set = update(|d, v| d.to_account = v);
        Callback::from(move |e: Event| set(select_value(&e)))
    };

    let form = (*draft).clone().with_default_account(&accounts);

    let tab = |kind: TransactionType| {
        let active = form.kind == kind;
        let draft = draft.clone();
        let onclick = Callback::from(move |_| {
            let mut next = (*draft).clone();
            next.set_kind(kind);
            draft.set(next);
        });
        html! {
            <button type="button" onclick={onclick}
                class={classes!("flex-1", "py-2", "rounded-lg", "text-sm", "font-bold",
                    if active { "bg-white text-slate-900 shadow-sm" } else { "text-slate-500" })}>
                { kind.label() }
            </button>
        }
    };

    let division_radio = |division: Division| {
        let checked = form.division == division;
        let draft = draft.clone();
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*draft).clone();
            next.division = division;
            draft.set(next);
        });
        html! {
            <label class="flex items-center gap-2 text-sm text-slate-700">
                <input type="radio" name="division" value={division.as_str()}
                    checked={checked} onchange={onchange} />
                { division.label() }
            </label>
        }
    };

    let on_submit = {
        let form = form.clone();
        let notifier = notifier.clone();
        let on_submit = props.on_submit.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                notifier.error(err.to_string());
                return;
            }
            on_submit.emit(form.clone());
            on_close.emit(());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let is_transfer = form.kind == TransactionType::Transfer;
    let title = if props.editing.is_some() { "Edit Transaction" } else { "Add Transaction" };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-slate-900/50 backdrop-blur-sm p-4">
            <div class="bg-white rounded-2xl w-full max-w-lg max-h-[90vh] overflow-y-auto">
                <div class="flex items-center justify-between p-6 border-b border-slate-100">
                    <h2 class="text-xl font-bold text-slate-900">{ title }</h2>
                    <button onclick={on_close} class="text-slate-400 hover:text-slate-600">{ icon_close() }</button>
                </div>

                <form onsubmit={on_submit} class="p-6 space-y-4">
                    <div class="flex gap-2 p-1 bg-slate-100 rounded-xl">
                        { for TransactionType::ALL.into_iter().map(tab) }
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Amount (₹)"}</label>
                        <input type="number" step="0.01" min="0" class={INPUT_CLASS} placeholder="0.00"
                            value={form.amount.clone()} oninput={on_amount} required={true} />
                    </div>

                    if !is_transfer {
                        <div>
                            <label class="block text-sm font-medium text-slate-700 mb-1">{"Category"}</label>
                            <select class={INPUT_CLASS} onchange={on_category} required={true}>
                                <option value="" selected={form.category.is_empty()} disabled={true}>{"Select category"}</option>
                                { for categories_for(form.kind).iter().map(|category| html! {
                                    <option value={*category} selected={form.category == *category}>{ capitalize(category) }</option>
                                }) }
                            </select>
                        </div>
                    }

                    { account_select(
                        if is_transfer { "From Account" } else { "Account" },
                        &form.from_account,
                        &accounts,
                        on_from,
                    ) }

                    if is_transfer {
                        { account_select("To Account", &form.to_account, &accounts, on_to) }
                    }

                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Division"}</label>
                        <div class="flex gap-6">
                            { for Division::ALL.into_iter().map(division_radio) }
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Description"}</label>
                        <input type="text" class={INPUT_CLASS} placeholder="What was this for?"
                            maxlength={DESCRIPTION_MAX_CHARS.to_string()}
                            value={form.description.clone()} oninput={on_description} required={true} />
                    </div>

                    <button type="submit" class="w-full bg-blue-600 text-white h-12 mt-6 rounded-xl font-bold hover:bg-blue-700">
                        { if props.editing.is_some() { "Save Changes" } else { "Add Transaction" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
