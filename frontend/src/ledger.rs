//! Form state and client-side rules for transactions and accounts.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{
    Account, AccountType, Division, NewAccount, Transaction, TransactionPayload,
    TransactionType,
};

pub const EDIT_WINDOW_HOURS: i64 = 12;
pub const DESCRIPTION_MAX_CHARS: usize = 100;
pub const TRANSFER_CATEGORY: &str = "Transfer";

pub const INCOME_CATEGORIES: [&str; 4] = ["salary", "business", "gift", "other"];
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "food", "fuel", "medical", "movie", "loan", "shopping", "other",
];

pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
        TransactionType::Transfer => &[],
    }
}

/// Display-layer gate only; the backend decides whether an edit is accepted.
pub fn is_editable(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(created_at) <= Duration::hours(EDIT_WINDOW_HOURS)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub amount: String,
    pub category: String,
    pub division: Division,
    pub description: String,
    pub from_account: String,
    pub to_account: String,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            kind: TransactionType::Income,
            amount: String::new(),
            category: String::new(),
            division: Division::Personal,
            description: String::new(),
            from_account: String::new(),
            to_account: String::new(),
        }
    }
}

impl TransactionDraft {
    /// Blank form, preselecting the first account when there is one.
    pub fn new(accounts: &[Account]) -> Self {
        Self::default().with_default_account(accounts)
    }

    /// Form state for a freshly opened dialog: the edited record, or blank.
    pub fn for_dialog(editing: Option<&Transaction>) -> Self {
        editing.map(Self::from_transaction).unwrap_or_default()
    }

    /// Fills in the first account when no source account is chosen yet.
    pub fn with_default_account(mut self, accounts: &[Account]) -> Self {
        if self.from_account.is_empty() {
            if let Some(first) = accounts.first() {
                self.from_account = first.id.clone();
            }
        }
        self
    }

    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            kind: tx.kind,
            amount: tx.amount.normalize().to_string(),
            category: tx.category.clone(),
            division: tx.division,
            description: tx.description.clone(),
            from_account: tx
                .from_account
                .as_ref()
                .map(|a| a.id().to_string())
                .unwrap_or_default(),
            to_account: tx
                .to_account
                .as_ref()
                .map(|a| a.id().to_string())
                .unwrap_or_default(),
        }
    }

    /// Transfers carry a fixed category; leaving transfer drops it again.
    pub fn set_kind(&mut self, kind: TransactionType) {
        if kind == TransactionType::Transfer {
            self.category = TRANSFER_CATEGORY.to_string();
        } else if self.kind == TransactionType::Transfer {
            self.category.clear();
        }
        self.kind = kind;
    }

    pub fn validate(&self) -> Result<TransactionPayload, ValidationError> {
        let is_transfer = self.kind == TransactionType::Transfer;
        if is_transfer && self.from_account == self.to_account {
            return Err(ValidationError::SameTransferAccounts);
        }

        let amount = Decimal::from_str(self.amount.trim())
            .map_err(|_| ValidationError::InvalidAmount)?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingField("Description"));
        }
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong(DESCRIPTION_MAX_CHARS));
        }

        if self.from_account.is_empty() {
            return Err(ValidationError::MissingField("Account"));
        }

        let (category, to_account) = if is_transfer {
            if self.to_account.is_empty() {
                return Err(ValidationError::MissingField("Destination account"));
            }
            (TRANSFER_CATEGORY.to_string(), Some(self.to_account.clone()))
        } else {
            let category = self.category.trim().to_lowercase();
            if category.is_empty() {
                return Err(ValidationError::MissingField("Category"));
            }
            if !categories_for(self.kind).contains(&category.as_str()) {
                return Err(ValidationError::CategoryNotAllowed {
                    category,
                    kind: self.kind.as_str(),
                });
            }
            (category, None)
        };

        Ok(TransactionPayload {
            kind: self.kind,
            amount,
            category,
            division: self.division,
            description: description.to_string(),
            from_account: self.from_account.clone(),
            to_account,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountDraft {
    pub name: String,
    pub balance: String,
    pub kind: AccountType,
}

impl AccountDraft {
    pub fn validate(&self) -> Result<NewAccount, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("Account name"));
        }
        let balance = self.balance.trim();
        if balance.is_empty() {
            return Err(ValidationError::MissingField("Initial balance"));
        }
        let balance = Decimal::from_str(balance).map_err(|_| ValidationError::InvalidBalance)?;

        Ok(NewAccount {
            name: name.to_string(),
            kind: self.kind,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountRef;
    use chrono::TimeZone;

    fn transfer(from: &str, to: &str) -> TransactionDraft {
        let mut draft = TransactionDraft {
            amount: "100".into(),
            description: "move".into(),
            from_account: from.into(),
            to_account: to.into(),
            ..TransactionDraft::default()
        };
        draft.set_kind(TransactionType::Transfer);
        draft
    }

    #[test]
    fn edit_window_is_inclusive_at_twelve_hours() {
        let created = Utc.with_ymd_and_hms(2025, 3, 4, 8, 0, 0).unwrap();
        assert!(is_editable(created, created + Duration::hours(12)));
        assert!(!is_editable(created, created + Duration::hours(12) + Duration::seconds(1)));
        assert!(is_editable(created, created + Duration::minutes(5)));
    }

    #[test]
    fn transfer_to_same_account_is_rejected_first() {
        let mut draft = transfer("a1", "a1");
        draft.amount.clear();
        assert_eq!(draft.validate(), Err(ValidationError::SameTransferAccounts));
    }

    #[test]
    fn transfer_uses_fixed_category() {
        let payload = transfer("a1", "a2").validate().unwrap();
        assert_eq!(payload.category, TRANSFER_CATEGORY);
        assert_eq!(payload.to_account.as_deref(), Some("a2"));
    }

    #[test]
    fn leaving_transfer_clears_the_fixed_category() {
        let mut draft = transfer("a1", "a2");
        draft.set_kind(TransactionType::Expense);
        assert!(draft.category.is_empty());
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("Category")));
    }

    #[test]
    fn category_must_belong_to_the_record_type() {
        let draft = TransactionDraft {
            kind: TransactionType::Income,
            amount: "2500".into(),
            category: "food".into(),
            description: "lunch".into(),
            from_account: "a1".into(),
            ..TransactionDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::CategoryNotAllowed { .. })
        ));
    }

    #[test]
    fn expense_payload_drops_destination() {
        let draft = TransactionDraft {
            kind: TransactionType::Expense,
            amount: " 42.50 ".into(),
            category: "Food".into(),
            division: Division::Office,
            description: " team lunch ".into(),
            from_account: "a1".into(),
            to_account: "a2".into(),
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.amount, Decimal::new(4250, 2));
        assert_eq!(payload.category, "food");
        assert_eq!(payload.description, "team lunch");
        assert_eq!(payload.to_account, None);
    }

    #[test]
    fn rejects_non_positive_amounts_and_long_descriptions() {
        let mut draft = TransactionDraft {
            kind: TransactionType::Expense,
            amount: "0".into(),
            category: "fuel".into(),
            description: "petrol".into(),
            from_account: "a1".into(),
            ..TransactionDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::InvalidAmount));

        draft.amount = "10".into();
        draft.description = "x".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(
            draft.validate(),
            Err(ValidationError::DescriptionTooLong(DESCRIPTION_MAX_CHARS))
        );
    }

    #[test]
    fn account_draft_parses_balance() {
        let draft = AccountDraft {
            name: " Cash Wallet ".into(),
            balance: "500".into(),
            kind: AccountType::Cash,
        };
        let account = draft.validate().unwrap();
        assert_eq!(account.name, "Cash Wallet");
        assert_eq!(account.balance, Decimal::new(500, 0));

        let bad = AccountDraft {
            balance: "lots".into(),
            ..draft
        };
        assert_eq!(bad.validate(), Err(ValidationError::InvalidBalance));
    }

    #[test]
    fn opening_for_a_new_record_drops_the_previous_edit() {
        let edited = Transaction {
            id: "t1".into(),
            kind: TransactionType::Expense,
            amount: Decimal::new(250, 0),
            category: "food".into(),
            division: Division::Office,
            description: "groceries".into(),
            from_account: Some(AccountRef::Id("a2".into())),
            to_account: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 4, 8, 0, 0).unwrap(),
        };
        let editing = TransactionDraft::for_dialog(Some(&edited));
        assert_eq!(editing.description, "groceries");
        assert_eq!(editing.from_account, "a2");

        let fresh = TransactionDraft::for_dialog(None);
        assert_eq!(fresh, TransactionDraft::default());

        // Accounts that never loaded leave the source empty.
        let mut unloaded = fresh.with_default_account(&[]);
        unloaded.amount = "250".into();
        unloaded.category = "salary".into();
        unloaded.description = "bonus".into();
        assert_eq!(unloaded.validate(), Err(ValidationError::MissingField("Account")));
    }

    #[test]
    fn default_account_only_fills_an_empty_source() {
        let accounts = vec![
            Account {
                id: "a1".into(),
                name: "HDFC".into(),
                kind: AccountType::Bank,
                balance: Decimal::ZERO,
            },
            Account {
                id: "a2".into(),
                name: "Wallet".into(),
                kind: AccountType::Cash,
                balance: Decimal::ZERO,
            },
        ];
        assert_eq!(TransactionDraft::new(&accounts).from_account, "a1");

        let chosen = TransactionDraft {
            from_account: "a2".into(),
            ..TransactionDraft::default()
        };
        assert_eq!(chosen.with_default_account(&accounts).from_account, "a2");
    }
}
