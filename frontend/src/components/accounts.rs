use yew::prelude::*;

use super::icons::{account_icon, icon_close, icon_plus};
use super::{bind_value, select_value};
use crate::format::format_currency;
use crate::ledger::AccountDraft;
use crate::models::{Account, AccountType};

#[derive(Properties, PartialEq)]
pub struct AccountsPanelProps {
    pub accounts: Vec<Account>,
    pub on_add: Callback<()>,
}

#[function_component(AccountsPanel)]
pub fn accounts_panel(props: &AccountsPanelProps) -> Html {
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    html! {
        <section class="mb-10">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-bold text-slate-800">{"Your Accounts"}</h2>
                <button onclick={on_add.clone()} class="flex items-center gap-2 px-4 py-2 text-blue-600 hover:text-blue-700 font-bold rounded-lg hover:bg-blue-50">
                    { icon_plus() }
                    <span>{"Add Account"}</span>
                </button>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                { for props.accounts.iter().map(|account| html! {
                    <div key={account.id.clone()} class="bg-white p-6 rounded-2xl border border-slate-100 shadow-sm hover:shadow-md transition-all">
                        <div class="flex items-center justify-between mb-4">
                            <div class="bg-slate-50 p-2.5 rounded-xl text-slate-600">{ account_icon(account.kind) }</div>
                            <span class="text-[10px] uppercase font-black tracking-widest text-slate-400">{ account.kind.as_str() }</span>
                        </div>
                        <div class="mt-4 space-y-3">
                            <p class="text-slate-500 text-xs font-semibold truncate">{ &account.name }</p>
                            <h3 class="text-2xl font-black text-slate-900">{ format_currency(account.balance) }</h3>
                        </div>
                    </div>
                }) }

                if props.accounts.is_empty() {
                    <div class="col-span-full py-12 rounded-2xl border-2 border-dashed border-slate-200">
                        <button onclick={on_add} class="w-full flex flex-col items-center justify-center gap-3 text-slate-400 hover:text-slate-600">
                            <div class="bg-slate-50 p-4 rounded-full">{ icon_plus() }</div>
                            <p class="font-bold text-sm">{"Create Your Account"}</p>
                        </button>
                    </div>
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<AccountDraft>,
}

#[function_component(AccountModal)]
pub fn account_modal(props: &AccountModalProps) -> Html {
    let name = use_state(String::new);
    let balance = use_state(String::new);
    let kind = use_state(AccountType::default);

    {
        let name = name.clone();
        let balance = balance.clone();
        let kind = kind.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    name.set(String::new());
                    balance.set(String::new());
                    kind.set(AccountType::default());
                }
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            if let Some(selected) = AccountType::parse(&select_value(&e)) {
                kind.set(selected);
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let balance = balance.clone();
        let kind = kind.clone();
        let on_submit = props.on_submit.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(AccountDraft {
                name: (*name).clone(),
                balance: (*balance).clone(),
                kind: *kind,
            });
            on_close.emit(());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-slate-900/50 backdrop-blur-sm p-4">
            <div class="bg-white rounded-2xl w-full max-w-md">
                <div class="flex items-center justify-between p-6 border-b border-slate-100">
                    <h2 class="text-xl font-bold text-slate-900">{"Add New Account"}</h2>
                    <button onclick={on_close} class="text-slate-400 hover:text-slate-600">{ icon_close() }</button>
                </div>

                <form onsubmit={on_submit} class="p-6 space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Account Name"}</label>
                        <input type="text" class="w-full px-4 py-2 border border-slate-200 rounded-lg" placeholder="Enter Account Name"
                            value={(*name).clone()} oninput={bind_value(&name)} required={true} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Initial Balance (₹)"}</label>
                        <input type="number" step="0.01" class="w-full px-4 py-2 border border-slate-200 rounded-lg" placeholder="Enter Initial Balance"
                            value={(*balance).clone()} oninput={bind_value(&balance)} required={true} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Account Type"}</label>
                        <select class="w-full px-4 py-2 border border-slate-200 rounded-lg text-black" onchange={on_kind}>
                            { for AccountType::ALL.iter().map(|option| html! {
                                <option value={option.as_str()} selected={*option == *kind}>{ option.label() }</option>
                            }) }
                        </select>
                    </div>
                    <button type="submit" class="w-full bg-blue-600 text-white h-12 mt-6 rounded-xl font-bold hover:bg-blue-700">
                        {"Create Account"}
                    </button>
                </form>
            </div>
        </div>
    }
}
