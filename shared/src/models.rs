use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier: creation time in epoch milliseconds, bumped when
/// needed so it stays unique within its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// UTC day the id was issued
    pub fn created_on(self) -> NaiveDate {
        i64::try_from(self.0)
            .ok()
            .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
            .map(|at| at.date_naive())
            .unwrap_or_default()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spending category.
///
/// The expense form offers the five known categories; quick-add paths can
/// carry any other label, which is kept verbatim as `Custom`. Serialized as
/// its plain label. A `Custom` label is only built by [`Category::parse`],
/// so it never spells one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Groceries,
    Transport,
    Utilities,
    Healthcare,
    Other,
    Custom(CustomLabel),
}

/// Trimmed label of a category outside [`Category::KNOWN`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomLabel(String);

impl CustomLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Category {
    /// Categories offered by the expense form, in display order
    pub const KNOWN: [Category; 5] = [
        Category::Groceries,
        Category::Transport,
        Category::Utilities,
        Category::Healthcare,
        Category::Other,
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::Groceries => "Groceries",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
            Category::Custom(label) => label.as_str(),
        }
    }

    /// Map a free-text label onto a category. Known labels match
    /// case-insensitively; blank labels become `Other`.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Category::Other;
        }
        Self::KNOWN
            .into_iter()
            .find(|known| known.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Category::Custom(CustomLabel(trimmed.to_string())))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::parse(&label)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::parse(label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// One logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredExpense")]
pub struct Expense {
    pub id: RecordId,
    pub category: Category,
    /// What was bought, never blank
    pub item: String,
    /// Missing or non-numeric stored costs load as zero
    #[serde(serialize_with = "cost_json::serialize")]
    pub cost: Decimal,
    pub date: NaiveDate,
}

/// Stored shape of an [`Expense`]. Older releases saved whatever the date
/// input held, so a blank or unreadable date falls back to the day the
/// record was created, taken from its millisecond id.
#[derive(Deserialize)]
struct StoredExpense {
    id: RecordId,
    #[serde(default)]
    category: Category,
    item: String,
    #[serde(default, with = "cost_json")]
    cost: Decimal,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
}

impl From<StoredExpense> for Expense {
    fn from(stored: StoredExpense) -> Self {
        let date = stored.date.unwrap_or_else(|| stored.id.created_on());
        Self { id: stored.id, category: stored.category, item: stored.item, cost: stored.cost, date }
    }
}

fn lenient_date<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(|text| text.trim().split('T').next().unwrap_or_default())
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()))
}

/// Raw expense form input, validated by the ledger store on `add`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseDraft {
    pub category: Category,
    pub item: String,
    /// Cost exactly as typed; parsed at the store boundary
    pub cost: String,
    /// Defaults to today when `None`
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    pub fn new(category: impl Into<Category>, item: impl Into<String>, cost: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
            cost: cost.into(),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Partial update for an expense. Only the fields that are `Some` change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpensePatch {
    pub category: Option<Category>,
    pub item: Option<String>,
    /// Cost exactly as typed; parsed at the store boundary
    pub cost: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.item.is_none() && self.cost.is_none() && self.date.is_none()
    }
}

/// One household essentials checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssentialItem {
    pub id: RecordId,
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

/// Read-time view over the essentials checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EssentialsFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl EssentialsFilter {
    pub const ALL: [EssentialsFilter; 3] = [EssentialsFilter::All, EssentialsFilter::Pending, EssentialsFilter::Done];

    pub fn matches(self, item: &EssentialItem) -> bool {
        match self {
            EssentialsFilter::All => true,
            EssentialsFilter::Pending => !item.done,
            EssentialsFilter::Done => item.done,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EssentialsFilter::All => "All",
            EssentialsFilter::Pending => "Pending",
            EssentialsFilter::Done => "Completed",
        }
    }

    /// Accepts `all`, `pending` and `done`/`completed`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(EssentialsFilter::All),
            "pending" => Some(EssentialsFilter::Pending),
            "done" | "completed" => Some(EssentialsFilter::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EssentialsCounts {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

/// Costs are written as JSON numbers when an `f64` carries them exactly,
/// otherwise as decimal strings. The reader accepts both.
mod cost_json {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(cost: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        match cost.to_f64().filter(|float| exact_as_f64(cost, *float)) {
            Some(float) => serializer.serialize_f64(float),
            None => serializer.serialize_str(&cost.normalize().to_string()),
        }
    }

    fn exact_as_f64(cost: &Decimal, float: f64) -> bool {
        float.is_finite() && Decimal::from_str(&float.to_string()).map_or(false, |back| back == *cost)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(crate::validation::coerce_stored_cost(&value))
    }
}
