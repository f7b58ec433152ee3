use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_MIN_BUDGET: u32 = 0;
pub const DEFAULT_MAX_BUDGET: u32 = 100_000;
pub const NO_OS_PREFERENCE: &str = "No Preference";

/// What the user mainly does with a phone
///
/// Order matters: the form submits a 1-based index into this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UsageCategory {
    #[default]
    Casual,
    Entertainment,
    Gaming,
    Photography,
    Productivity,
}

impl UsageCategory {
    pub const ALL: [UsageCategory; 5] = [
        UsageCategory::Casual,
        UsageCategory::Entertainment,
        UsageCategory::Gaming,
        UsageCategory::Photography,
        UsageCategory::Productivity,
    ];

    /// Looks up a category by its 1-based form choice
    pub fn from_choice(choice: u8) -> Option<Self> {
        let index = usize::from(choice).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The 1-based form choice for this category
    pub fn choice(self) -> u8 {
        match self {
            UsageCategory::Casual => 1,
            UsageCategory::Entertainment => 2,
            UsageCategory::Gaming => 3,
            UsageCategory::Photography => 4,
            UsageCategory::Productivity => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UsageCategory::Casual => "Casual",
            UsageCategory::Entertainment => "Entertainment",
            UsageCategory::Gaming => "Gaming",
            UsageCategory::Photography => "Photography",
            UsageCategory::Productivity => "Productivity",
        }
    }

    /// CSS class suffix used to theme the bonus list
    pub fn css_class(self) -> String {
        self.label().to_lowercase()
    }
}

impl Display for UsageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Filter values submitted with a recommendation search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_budget: u32,
    pub max_budget: u32,
    pub os: String,
    pub usage: UsageCategory,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_budget: DEFAULT_MIN_BUDGET,
            max_budget: DEFAULT_MAX_BUDGET,
            os: NO_OS_PREFERENCE.to_string(),
            usage: UsageCategory::default(),
        }
    }
}

impl FilterCriteria {
    /// Builds criteria from raw form values.
    ///
    /// Blank fields fall back to their defaults. A literal "0" is kept as a
    /// real value. Anything that is present but unparseable is rejected.
    pub fn from_form(
        min_budget: &str,
        max_budget: &str,
        os: &str,
        usage_choice: &str,
    ) -> AppResult<Self> {
        let min_budget = parse_budget("minBudget", min_budget, DEFAULT_MIN_BUDGET)?;
        let max_budget = parse_budget("maxBudget", max_budget, DEFAULT_MAX_BUDGET)?;

        let os = match os.trim() {
            "" => NO_OS_PREFERENCE.to_string(),
            value => value.to_string(),
        };

        let usage = match usage_choice.trim() {
            "" => UsageCategory::default(),
            value => value
                .parse::<u8>()
                .ok()
                .and_then(UsageCategory::from_choice)
                .ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "usage choice must be between 1 and {}, got {:?}",
                        UsageCategory::ALL.len(),
                        value
                    ))
                })?,
        };

        Ok(Self {
            min_budget,
            max_budget,
            os,
            usage,
        })
    }

    /// Query parameters understood by the recommendation endpoint
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("minBudget", self.min_budget.to_string()),
            ("maxBudget", self.max_budget.to_string()),
            ("os", self.os.clone()),
            ("usageChoice", self.usage.choice().to_string()),
        ]
    }
}

fn parse_budget(field: &str, raw: &str, default: u32) -> AppResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<u32>().map_err(|_| {
        AppError::InvalidInput(format!(
            "{} must be a whole, non-negative amount, got {:?}",
            field, raw
        ))
    })
}
