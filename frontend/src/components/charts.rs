use rust_decimal::Decimal;
use yew::prelude::*;

use crate::format::{capitalize, format_currency, percent_of};
use crate::models::{CategoryTotal, Summary};

const COLORS: [&str; 7] = [
    "#0ea5e9", "#f43f5e", "#10b981", "#f59e0b", "#6366f1", "#8b5cf6", "#ec4899",
];

#[derive(Properties, PartialEq)]
pub struct ChartsProps {
    pub summary: Summary,
    pub categories: Vec<CategoryTotal>,
}

fn bar(label: &'static str, amount: Decimal, scale: Decimal, color: &'static str) -> Html {
    let height = percent_of(amount, scale);
    html! {
        <div class="flex flex-col items-center justify-end h-full gap-2">
            <span class="text-xs font-bold text-slate-500">{ format_currency(amount) }</span>
            <div class="w-12 rounded-t-md" style={format!("height: {}%; background: {}", height, color)}></div>
            <span class="text-xs font-semibold text-slate-600">{ label }</span>
        </div>
    }
}

#[function_component(Charts)]
pub fn charts(props: &ChartsProps) -> Html {
    let income = props.summary.income;
    let expense = props.summary.expense;
    let scale = income.max(expense);
    let category_total: Decimal = props.categories.iter().map(|c| c.total_amount).sum();

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-8">
            <div class="bg-white p-6 rounded-2xl border border-slate-100 h-80 flex flex-col">
                <h3 class="text-lg font-bold text-slate-800 mb-4">{"Income vs Expense"}</h3>
                <div class="flex-1 flex items-end justify-center gap-12 pb-2">
                    { bar("Income", income, scale, "#10b981") }
                    { bar("Expense", expense, scale, "#f43f5e") }
                </div>
            </div>

            <div class="bg-white p-6 rounded-2xl border border-slate-100 h-80 flex flex-col">
                <h3 class="text-lg font-bold text-slate-800 mb-4">{"Expense by Category"}</h3>
                if props.categories.is_empty() {
                    <p class="text-sm text-slate-400 m-auto">{"Nothing recorded for this period."}</p>
                } else {
                    <div class="space-y-3 overflow-y-auto">
                        { for props.categories.iter().enumerate().map(|(index, item)| {
                            let percent = percent_of(item.total_amount, category_total);
                            let color = COLORS[index % COLORS.len()];
                            html! {
                                <div class="flex flex-col gap-1 text-sm">
                                    <div class="flex items-center justify-between">
                                        <span class="font-semibold text-slate-700">{ capitalize(item.label()) }</span>
                                        <span class="text-slate-500">{ format!("{} · {}%", format_currency(item.total_amount), percent) }</span>
                                    </div>
                                    <div class="h-2 w-full bg-slate-100 rounded-full overflow-hidden">
                                        <div class="h-full" style={format!("width: {}%; background: {}", percent, color)}></div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
