use yew::prelude::*;

use crate::models::{AccountType, TransactionType};

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_landmark() -> Html {
    icon_base("M3 22h18M6 18v-7M10 18v-7M14 18v-7M18 18v-7M12 2l8 5H4z")
}
pub fn icon_piggy_bank() -> Html {
    icon_base("M19 9c0-3-3-5-7-5S5 6 5 9c0 2 1 3 2 4v4h3v-2h4v2h3v-4c1-1 2-2 2-4zM16 9h.01")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7")
}
pub fn icon_transfer() -> Html {
    icon_base("M16 3l4 4-4 4M20 7H4M8 21l-4-4 4-4M4 17h16")
}
pub fn icon_edit() -> Html {
    icon_base("M17 3a2.8 2.8 0 114 4L7.5 20.5 2 22l1.5-5.5z")
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6")
}
pub fn icon_filter() -> Html {
    icon_base("M22 3H2l8 9.46V19l4 2v-8.54z")
}
pub fn icon_file_text() -> Html {
    icon_base("M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6M16 13H8M16 17H8")
}
pub fn icon_arrow_left() -> Html {
    icon_base("M19 12H5M12 19l-7-7 7-7")
}

pub fn account_icon(kind: AccountType) -> Html {
    match kind {
        AccountType::Bank => icon_landmark(),
        AccountType::Credit => icon_credit_card(),
        AccountType::Savings => icon_piggy_bank(),
        AccountType::Cash => icon_wallet(),
    }
}

pub fn transaction_icon(kind: TransactionType) -> Html {
    match kind {
        TransactionType::Income => icon_trending_up(),
        TransactionType::Expense => icon_trending_down(),
        TransactionType::Transfer => icon_transfer(),
    }
}
