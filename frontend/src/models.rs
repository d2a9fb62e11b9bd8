//! Wire types for the Money Manager REST API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Bank,
    Cash,
    Credit,
    Savings,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Bank,
        AccountType::Cash,
        AccountType::Credit,
        AccountType::Savings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::Credit => "credit",
            Self::Savings => "savings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bank => "Bank",
            Self::Cash => "Cash",
            Self::Credit => "Credit Card",
            Self::Savings => "Savings",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: AccountType,
    #[serde(default)]
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
    Transfer,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Income,
        TransactionType::Expense,
        TransactionType::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Transfer => "Transfer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Reporting tag. Does not affect balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    #[default]
    Personal,
    Office,
}

impl Division {
    pub const ALL: [Division; 2] = [Division::Personal, Division::Office];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Office => "office",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Office => "Office",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|division| division.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// The backend either populates the referenced account or sends its bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountRef {
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default)]
        name: String,
    },
    Id(String),
}

impl AccountRef {
    pub fn id(&self) -> &str {
        match self {
            AccountRef::Populated { id, .. } => id,
            AccountRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AccountRef::Populated { name, .. } if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub division: Division,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub from_account: Option<AccountRef>,
    #[serde(default)]
    pub to_account: Option<AccountRef>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Display name of an account reference; the account may have been removed.
    pub fn account_label(account: Option<&AccountRef>) -> &str {
        account.and_then(AccountRef::name).unwrap_or("Deleted")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "_id", alias = "category", default)]
    pub category: Option<String>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: Decimal,
}

impl CategoryTotal {
    pub fn label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or("Uncategorized")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body returned by login and registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ForgotPasswordResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordReset {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub division: Division,
    pub description: String,
    pub from_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account: Option<String>,
}
