//! Dashboard state machine and refetch orchestration.
//!
//! The dashboard keeps four independently fetched slices. Every successful
//! mutation is followed by one fetch of each slice; nothing is patched in
//! place. Responses are applied in arrival order, so a slow stale response
//! can overwrite a fresher one.

use std::rc::Rc;

use chrono::{NaiveDate, Utc};
use yew::Reducible;

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::filters::{FilterField, Period, ReportWindow, TransactionFilters, TransactionQuery};
use crate::ledger::{AccountDraft, TransactionDraft};
use crate::models::{Account, CategoryTotal, Summary, Transaction};
use crate::session::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slice {
    Summary,
    CategorySummary,
    Transactions,
    Accounts,
}

impl Slice {
    pub const ALL: [Slice; 4] = [
        Slice::Summary,
        Slice::CategorySummary,
        Slice::Transactions,
        Slice::Accounts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::CategorySummary => "category-summary",
            Self::Transactions => "transactions",
            Self::Accounts => "accounts",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateTransaction(TransactionDraft),
    UpdateTransaction { id: String, draft: TransactionDraft },
    DeleteTransaction(String),
    CreateAccount(AccountDraft),
}

impl Mutation {
    /// Slices to refetch once the mutation succeeds.
    pub fn refresh_plan(&self) -> &'static [Slice] {
        &Slice::ALL
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Mutation::CreateTransaction(_) => "Transaction added",
            Mutation::UpdateTransaction { .. } => "Transaction updated",
            Mutation::DeleteTransaction(_) => "Transaction deleted",
            Mutation::CreateAccount(_) => "Account created",
        }
    }

    pub fn failure_fallback(&self) -> &'static str {
        match self {
            Mutation::CreateTransaction(_) | Mutation::UpdateTransaction { .. } => "Action failed",
            Mutation::DeleteTransaction(_) => "Delete failed",
            Mutation::CreateAccount(_) => "Failed to create account",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardData {
    pub summary: Summary,
    pub categories: Vec<CategoryTotal>,
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliceUpdate {
    Summary(Summary),
    CategorySummary(Vec<CategoryTotal>),
    Transactions(Vec<Transaction>),
    Accounts(Vec<Account>),
}

/// Queries for one refresh, captured from the state at the time it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    pub window: ReportWindow,
    pub query: TransactionQuery,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub period: Period,
    pub filters: TransactionFilters,
    pub data: DashboardData,
}

impl DashboardState {
    /// Switching to a named period drops any custom date range.
    pub fn select_period(&mut self, period: Period) {
        self.period = period;
        self.filters.clear_dates();
    }

    pub fn set_filter(&mut self, field: FilterField, raw: &str) {
        self.filters.set(field, raw);
    }

    pub fn report_window(&self, today: NaiveDate) -> ReportWindow {
        ReportWindow::resolve(self.period, self.filters.from, self.filters.to, today)
    }

    pub fn transaction_query(&self, today: NaiveDate) -> TransactionQuery {
        TransactionQuery::new(&self.filters, self.period, today)
    }

    pub fn refresh_request(&self, today: NaiveDate) -> RefreshRequest {
        RefreshRequest {
            window: self.report_window(today),
            query: self.transaction_query(today),
        }
    }

    pub fn apply(&mut self, update: SliceUpdate) {
        match update {
            SliceUpdate::Summary(summary) => self.data.summary = summary,
            SliceUpdate::CategorySummary(categories) => self.data.categories = categories,
            SliceUpdate::Transactions(transactions) => self.data.transactions = transactions,
            SliceUpdate::Accounts(accounts) => self.data.accounts = accounts,
        }
    }
}

pub enum DashboardAction {
    SelectPeriod(Period),
    SetFilter(FilterField, String),
    Apply(SliceUpdate),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::SelectPeriod(period) => next.select_period(period),
            DashboardAction::SetFilter(field, raw) => next.set_filter(field, &raw),
            DashboardAction::Apply(update) => next.apply(update),
        }
        Rc::new(next)
    }
}

/// The date open-ended ranges end on.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Fetches each requested slice once, in order.
pub async fn load<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    request: &RefreshRequest,
    slices: &[Slice],
) -> Vec<(Slice, Result<SliceUpdate, ApiError>)> {
    let mut results = Vec::with_capacity(slices.len());
    for &slice in slices {
        let result = match slice {
            Slice::Summary => client.summary(&request.window).await.map(SliceUpdate::Summary),
            Slice::CategorySummary => client
                .category_summary(&request.window)
                .await
                .map(SliceUpdate::CategorySummary),
            Slice::Transactions => client
                .list_transactions(&request.query)
                .await
                .map(SliceUpdate::Transactions),
            Slice::Accounts => client.list_accounts().await.map(SliceUpdate::Accounts),
        };
        if let Err(err) = &result {
            tracing::error!(slice = slice.as_str(), error = %err, "failed to fetch dashboard slice");
        }
        results.push((slice, result));
    }
    results
}

/// Validates and sends a mutation, then reloads its refresh plan. Validation
/// failures return before any request is issued.
pub async fn commit<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    mutation: &Mutation,
    request: &RefreshRequest,
) -> Result<Vec<(Slice, Result<SliceUpdate, ApiError>)>, ApiError> {
    match mutation {
        Mutation::CreateTransaction(draft) => {
            let payload = draft.validate()?;
            client.create_transaction(&payload).await?;
        }
        Mutation::UpdateTransaction { id, draft } => {
            let payload = draft.validate()?;
            client.update_transaction(id, &payload).await?;
        }
        Mutation::DeleteTransaction(id) => client.delete_transaction(id).await?,
        Mutation::CreateAccount(draft) => {
            let account = draft.validate()?;
            client.create_account(&account).await?;
        }
    }
    tracing::info!(action = mutation.success_message(), "mutation committed");
    Ok(load(client, request, mutation.refresh_plan()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::parse_date;

    #[test]
    fn selecting_a_period_clears_the_range() {
        let mut state = DashboardState::default();
        state.set_filter(FilterField::From, "2025-01-01");
        state.set_filter(FilterField::To, "2025-01-31");
        state.set_filter(FilterField::Kind, "income");

        state.select_period(Period::Weekly);

        assert_eq!(state.filters.from, None);
        assert_eq!(state.filters.to, None);
        assert_eq!(state.filters.kind.map(|k| k.as_str()), Some("income"));
        let today = parse_date("2025-02-10").unwrap();
        assert_eq!(state.report_window(today), ReportWindow::Period(Period::Weekly));
    }

    #[test]
    fn a_date_overrides_the_selected_period() {
        let mut state = DashboardState::default();
        state.select_period(Period::Yearly);
        state.set_filter(FilterField::From, "2025-01-15");
        let today = parse_date("2025-02-10").unwrap();

        let request = state.refresh_request(today);

        let expected = ReportWindow::Range {
            from: parse_date("2025-01-15"),
            to: today,
        };
        assert_eq!(request.window, expected);
        assert_eq!(request.query.window, expected);
    }

    #[test]
    fn every_mutation_refreshes_each_slice_once() {
        let mutations = [
            Mutation::CreateTransaction(TransactionDraft::default()),
            Mutation::UpdateTransaction {
                id: "t1".into(),
                draft: TransactionDraft::default(),
            },
            Mutation::DeleteTransaction("t1".into()),
            Mutation::CreateAccount(AccountDraft::default()),
        ];
        for mutation in mutations {
            let mut plan = mutation.refresh_plan().to_vec();
            plan.sort();
            assert_eq!(plan, Slice::ALL.to_vec());
        }
    }

    #[test]
    fn reducer_applies_updates() {
        let state = Rc::new(DashboardState::default());
        let next = state.reduce(DashboardAction::Apply(SliceUpdate::Accounts(vec![Account {
            id: "a1".into(),
            name: "Cash Wallet".into(),
            kind: crate::models::AccountType::Cash,
            balance: rust_decimal::Decimal::new(500, 0),
        }])));
        assert_eq!(next.data.accounts.len(), 1);
    }
}
