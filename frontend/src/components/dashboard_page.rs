use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::accounts::{AccountModal, AccountsPanel};
use super::charts::Charts;
use super::icons::{icon_log_out, icon_plus};
use super::select_value;
use super::summary::SummaryCards;
use super::transaction_modal::TransactionModal;
use super::transactions::TransactionList;
use super::{use_api, use_notifier};
use crate::dashboard::{commit, load, today, DashboardAction, DashboardState, Mutation, Slice};
use crate::filters::{FilterField, Period};
use crate::ledger::{AccountDraft, TransactionDraft};
use crate::models::{Transaction, User};

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub user: Option<User>,
    pub on_logout: Callback<()>,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let client = use_api();
    let notifier = use_notifier();
    let state = use_reducer(DashboardState::default);
    let show_transaction = use_state(|| false);
    let editing = use_state(|| None::<Transaction>);
    let show_account = use_state(|| false);

    {
        let client = client.clone();
        let dispatcher = state.dispatcher();
        let request = state.refresh_request(today());
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    for (_, result) in load(&*client, &request, &Slice::ALL).await {
                        if let Ok(update) = result {
                            dispatcher.dispatch(DashboardAction::Apply(update));
                        }
                    }
                });
                || ()
            },
            (state.period, state.filters.clone()),
        );
    }

    let run_mutation = {
        let client = client.clone();
        let notifier = notifier.clone();
        let dispatcher = state.dispatcher();
        let request = state.refresh_request(today());
        Callback::from(move |mutation: Mutation| {
            let client = client.clone();
            let notifier = notifier.clone();
            let dispatcher = dispatcher.clone();
            let request = request.clone();
            spawn_local(async move {
                match commit(&*client, &mutation, &request).await {
                    Ok(updates) => {
                        notifier.success(mutation.success_message());
                        for (_, result) in updates {
                            if let Ok(update) = result {
                                dispatcher.dispatch(DashboardAction::Apply(update));
                            }
                        }
                    }
                    Err(err) => notifier.api_error(&err, mutation.failure_fallback()),
                }
            });
        })
    };

    let on_period = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            if let Some(period) = Period::parse(&select_value(&e)) {
                dispatcher.dispatch(DashboardAction::SelectPeriod(period));
            }
        })
    };

    let on_filter = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, raw): (FilterField, String)| {
            dispatcher.dispatch(DashboardAction::SetFilter(field, raw))
        })
    };

    let has_accounts = !state.data.accounts.is_empty();

    let on_fab = {
        let notifier = notifier.clone();
        let show_transaction = show_transaction.clone();
        let show_account = show_account.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            if has_accounts {
                editing.set(None);
                show_transaction.set(true);
            } else {
                notifier.error("Please create an account first");
                show_account.set(true);
            }
        })
    };

    let on_edit = {
        let show_transaction = show_transaction.clone();
        let editing = editing.clone();
        Callback::from(move |tx: Transaction| {
            editing.set(Some(tx));
            show_transaction.set(true);
        })
    };

    let on_delete = {
        let run_mutation = run_mutation.clone();
        Callback::from(move |id: String| {
            if confirm("Are you sure you want to delete this?") {
                run_mutation.emit(Mutation::DeleteTransaction(id));
            }
        })
    };

    let on_transaction_submit = {
        let run_mutation = run_mutation.clone();
        let editing = editing.clone();
        Callback::from(move |draft: TransactionDraft| {
            let mutation = match &*editing {
                Some(tx) => Mutation::UpdateTransaction {
                    id: tx.id.clone(),
                    draft,
                },
                None => Mutation::CreateTransaction(draft),
            };
            run_mutation.emit(mutation);
        })
    };

    let on_transaction_close = {
        let show_transaction = show_transaction.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            show_transaction.set(false);
            editing.set(None);
        })
    };

    let on_account_open = {
        let show_account = show_account.clone();
        Callback::from(move |_| show_account.set(true))
    };

    let on_account_close = {
        let show_account = show_account.clone();
        Callback::from(move |_| show_account.set(false))
    };

    let on_account_submit = {
        let run_mutation = run_mutation.clone();
        Callback::from(move |draft: AccountDraft| run_mutation.emit(Mutation::CreateAccount(draft)))
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    let greeting = match &props.user {
        Some(user) if !user.name.is_empty() => format!("Hello, {}!", user.name),
        _ => "Hello!".to_string(),
    };

    html! {
        <div class="min-h-screen bg-slate-50">
            <header class="bg-white border-b border-slate-100">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-extrabold text-slate-900">{ greeting }</h1>
                        <p class="text-sm text-slate-500">{"Here's where your money went."}</p>
                    </div>
                    <div class="flex items-center gap-4">
                        <select class="px-3 py-2 bg-white border border-slate-200 rounded-lg text-sm text-slate-700" onchange={on_period}>
                            { for Period::ALL.iter().map(|period| html! {
                                <option value={period.as_str()} selected={*period == state.period}>{ period.label() }</option>
                            }) }
                        </select>
                        <button onclick={on_logout} class="flex items-center gap-2 px-3 py-2 text-sm font-semibold text-slate-600 rounded-lg hover:bg-slate-50">
                            { icon_log_out() }
                            <span>{"Logout"}</span>
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-6 py-8">
                <AccountsPanel accounts={state.data.accounts.clone()} on_add={on_account_open} />

                if has_accounts {
                    <SummaryCards summary={state.data.summary.clone()} />
                    <Charts summary={state.data.summary.clone()} categories={state.data.categories.clone()} />
                    <TransactionList
                        transactions={state.data.transactions.clone()}
                        filters={state.filters.clone()}
                        on_filter={on_filter}
                        on_edit={on_edit}
                        on_delete={on_delete}
                    />
                }
            </main>

            <button onclick={on_fab} title="Add Transaction"
                class="fixed bottom-8 right-8 bg-blue-600 text-white p-4 rounded-full shadow-lg hover:bg-blue-700">
                { icon_plus() }
            </button>

            <TransactionModal
                open={*show_transaction}
                editing={(*editing).clone()}
                on_close={on_transaction_close}
                on_submit={on_transaction_submit}
            />
            <AccountModal open={*show_account} on_close={on_account_close} on_submit={on_account_submit} />
        </div>
    }
}
