//! Reporting windows and ledger filters.
//!
//! A named [`Period`] and an explicit date range are mutually exclusive. As
//! soon as either end of the range is set, queries switch to range mode and
//! the period is ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Division, TransactionType};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Categories offered by the ledger filter, across both record types.
pub const FILTER_CATEGORIES: [&str; 8] = [
    "food", "fuel", "medical", "movie", "loan", "salary", "gift", "other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Today",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == value.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Kind,
    Division,
    Category,
    From,
    To,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionFilters {
    pub kind: Option<TransactionType>,
    pub division: Option<Division>,
    pub category: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TransactionFilters {
    pub fn has_custom_dates(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn clear_dates(&mut self) {
        self.from = None;
        self.to = None;
    }

    /// Applies a raw form value. Blank or unparseable input clears the field.
    pub fn set(&mut self, field: FilterField, raw: &str) {
        let raw = raw.trim();
        match field {
            FilterField::Kind => self.kind = TransactionType::parse(raw),
            FilterField::Division => self.division = Division::parse(raw),
            FilterField::Category => {
                self.category = Some(raw.to_lowercase()).filter(|c| !c.is_empty())
            }
            FilterField::From => self.from = parse_date(raw),
            FilterField::To => self.to = parse_date(raw),
        }
    }

    /// Current value as the form control expects it.
    pub fn raw(&self, field: FilterField) -> String {
        match field {
            FilterField::Kind => self.kind.map(|k| k.as_str().to_string()),
            FilterField::Division => self.division.map(|d| d.as_str().to_string()),
            FilterField::Category => self.category.clone(),
            FilterField::From => self.from.map(format_date),
            FilterField::To => self.to.map(format_date),
        }
        .unwrap_or_default()
    }
}

/// The window a summary or ledger query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportWindow {
    Period(Period),
    Range {
        from: Option<NaiveDate>,
        to: NaiveDate,
    },
}

impl ReportWindow {
    /// Range mode wins whenever either date is set; an open-ended range ends
    /// `today`.
    pub fn resolve(
        period: Period,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        match (from, to) {
            (None, None) => ReportWindow::Period(period),
            (from, to) => ReportWindow::Range {
                from,
                to: to.unwrap_or(today),
            },
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self {
            ReportWindow::Period(period) => vec![("period".into(), period.as_str().into())],
            ReportWindow::Range { from, to } => {
                let mut pairs = Vec::with_capacity(2);
                if let Some(from) = from {
                    pairs.push(("from".into(), format_date(*from)));
                }
                pairs.push(("to".into(), format_date(*to)));
                pairs
            }
        }
    }
}

/// Filters plus the resolved window, as sent to `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub kind: Option<TransactionType>,
    pub division: Option<Division>,
    pub category: Option<String>,
    pub window: ReportWindow,
}

impl TransactionQuery {
    pub fn new(filters: &TransactionFilters, period: Period, today: NaiveDate) -> Self {
        Self {
            kind: filters.kind,
            division: filters.division,
            category: filters.category.clone(),
            window: ReportWindow::resolve(period, filters.from, filters.to, today),
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = self.kind {
            pairs.push(("type".to_string(), kind.as_str().to_string()));
        }
        if let Some(division) = self.division {
            pairs.push(("division".to_string(), division.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        pairs.extend(self.window.query_pairs());
        pairs
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        parse_date(raw).unwrap()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_dates_means_period_mode() {
        let window = ReportWindow::resolve(Period::Monthly, None, None, date("2025-03-10"));
        assert_eq!(window, ReportWindow::Period(Period::Monthly));
        assert_eq!(window.query_pairs(), pairs(&[("period", "monthly")]));
    }

    #[test]
    fn open_range_ends_today() {
        let today = date("2025-03-10");
        let window = ReportWindow::resolve(Period::Yearly, Some(date("2025-03-01")), None, today);
        assert_eq!(
            window.query_pairs(),
            pairs(&[("from", "2025-03-01"), ("to", "2025-03-10")])
        );
    }

    #[test]
    fn to_alone_still_switches_to_range_mode() {
        let window = ReportWindow::resolve(
            Period::Daily,
            None,
            Some(date("2025-02-28")),
            date("2025-03-10"),
        );
        assert_eq!(window.query_pairs(), pairs(&[("to", "2025-02-28")]));
    }

    #[test]
    fn ledger_query_keeps_filters_in_stable_order() {
        let mut filters = TransactionFilters::default();
        filters.set(FilterField::Kind, "expense");
        filters.set(FilterField::Division, "office");
        filters.set(FilterField::Category, "Fuel");

        let query = TransactionQuery::new(&filters, Period::Weekly, date("2025-03-10"));

        assert_eq!(
            query.query_pairs(),
            pairs(&[
                ("type", "expense"),
                ("division", "office"),
                ("category", "fuel"),
                ("period", "weekly"),
            ])
        );
    }

    #[test]
    fn blank_or_bad_values_clear_fields() {
        let mut filters = TransactionFilters::default();
        filters.set(FilterField::From, "2025-01-05");
        assert_eq!(filters.raw(FilterField::From), "2025-01-05");
        filters.set(FilterField::From, "");
        filters.set(FilterField::Kind, "refund");
        assert_eq!(filters, TransactionFilters::default());
    }
}
