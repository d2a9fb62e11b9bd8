use rust_decimal::Decimal;
use yew::prelude::*;

use super::icons::{icon_trending_down, icon_trending_up, icon_wallet};
use crate::format::format_currency;
use crate::models::Summary;

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    TrendingUp,
    TrendingDown,
    Wallet,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    amount: Decimal,
    icon: StatIcon,
    tone: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border border-slate-100 flex items-center space-x-4">
            <div class={classes!("p-3", "rounded-xl", "bg-slate-50", props.tone)}>
                {
                    match props.icon {
                        StatIcon::TrendingUp => icon_trending_up(),
                        StatIcon::TrendingDown => icon_trending_down(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
            <div>
                <p class="text-slate-500 text-sm font-medium">{ props.title }</p>
                <h3 class={classes!("text-2xl", "font-bold", props.tone)}>{ format_currency(props.amount) }</h3>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Summary,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard title="Total Income" amount={props.summary.income} icon={StatIcon::TrendingUp} tone="text-emerald-600" />
            <StatCard title="Total Expenses" amount={props.summary.expense} icon={StatIcon::TrendingDown} tone="text-rose-600" />
            <StatCard title="Balance" amount={props.summary.balance} icon={StatIcon::Wallet} tone="text-blue-600" />
        </div>
    }
}
