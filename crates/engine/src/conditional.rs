//! Rule-based conditional formatting.
//!
//! Rules target a reference ("C:C", "A1:B5", "33") and contribute a
//! style class when their operator test passes for a cell's value.
//! Every enabled, matching rule applies: styling is a union, not a
//! first-match-wins selection. New rules sit at the front of the list
//! (most-recent-first), which affects display order only.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use gridlace_core::reference::reference_matches;

use crate::value::{coerce_number, CellValue};

/// Comparison applied to a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleOperator {
    GreaterThan,
    LessThan,
    Between,
    EqualTo,
    ContainsText,
    NotContainsText,
    IsEmpty,
    IsNotEmpty,
}

impl RuleOperator {
    /// Whether this operator compares against a value at all.
    pub fn takes_value(&self) -> bool {
        !matches!(self, RuleOperator::IsEmpty | RuleOperator::IsNotEmpty)
    }

    /// Whether this operator needs a second bound (only `between`).
    pub fn takes_second_value(&self) -> bool {
        matches!(self, RuleOperator::Between)
    }
}

/// The five named fill styles a rule can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStyle {
    Green,
    Red,
    Yellow,
    Blue,
    Purple,
}

impl RuleStyle {
    pub const ALL: [RuleStyle; 5] = [
        RuleStyle::Green,
        RuleStyle::Red,
        RuleStyle::Yellow,
        RuleStyle::Blue,
        RuleStyle::Purple,
    ];

    /// Stable CSS class injected into matching cells.
    pub fn class_name(&self) -> &'static str {
        match self {
            RuleStyle::Green => "gridlace-cf-green",
            RuleStyle::Red => "gridlace-cf-red",
            RuleStyle::Yellow => "gridlace-cf-yellow",
            RuleStyle::Blue => "gridlace-cf-blue",
            RuleStyle::Purple => "gridlace-cf-purple",
        }
    }
}

/// A single formatting rule. Mutated only by whole-rule replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    pub id: String,
    pub column_ref: String,
    pub operator: RuleOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<String>,
    #[serde(rename = "styleKey")]
    pub style: RuleStyle,
    pub enabled: bool,
}

impl ConditionalRule {
    /// New enabled rule with no comparison values.
    pub fn new(
        id: impl Into<String>,
        column_ref: impl Into<String>,
        operator: RuleOperator,
        style: RuleStyle,
    ) -> Self {
        Self {
            id: id.into(),
            column_ref: column_ref.into(),
            operator,
            value1: None,
            value2: None,
            style,
            enabled: true,
        }
    }

    /// Set the comparison value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value1 = Some(value.into());
        self
    }

    /// Set both bounds (for `between`).
    pub fn with_values(mut self, value1: impl Into<String>, value2: impl Into<String>) -> Self {
        self.value1 = Some(value1.into());
        self.value2 = Some(value2.into());
        self
    }

    /// Operator test against a cell value. Numeric comparisons require
    /// both sides to coerce; text comparisons are case-insensitive.
    pub fn matches(&self, value: &CellValue) -> bool {
        let value1 = self.value1.as_deref().unwrap_or("").trim();
        let value2 = self.value2.as_deref().unwrap_or("").trim();
        let text = value.display();
        let text = text.trim();

        match self.operator {
            RuleOperator::GreaterThan => match (value.to_number(), coerce_number(value1)) {
                (Some(left), Some(right)) => left > right,
                _ => false,
            },
            RuleOperator::LessThan => match (value.to_number(), coerce_number(value1)) {
                (Some(left), Some(right)) => left < right,
                _ => false,
            },
            RuleOperator::Between => {
                let (Some(left), Some(a), Some(b)) =
                    (value.to_number(), coerce_number(value1), coerce_number(value2))
                else {
                    return false;
                };
                left >= a.min(b) && left <= a.max(b)
            }
            RuleOperator::EqualTo => match (value.to_number(), coerce_number(value1)) {
                (Some(left), Some(right)) => left == right,
                _ => text.to_lowercase() == value1.to_lowercase(),
            },
            // No rule "contains nothing": an empty needle never matches.
            RuleOperator::ContainsText => {
                !value1.is_empty() && text.to_lowercase().contains(&value1.to_lowercase())
            }
            RuleOperator::NotContainsText => {
                !value1.is_empty() && !text.to_lowercase().contains(&value1.to_lowercase())
            }
            RuleOperator::IsEmpty => text.is_empty(),
            RuleOperator::IsNotEmpty => !text.is_empty(),
        }
    }

    /// Human-readable summary for the rule list panel.
    pub fn describe(&self) -> String {
        let column = self.column_ref.to_uppercase();
        let value1 = self.value1.as_deref().unwrap_or("");
        let value2 = self.value2.as_deref().unwrap_or("");
        match self.operator {
            RuleOperator::GreaterThan => format!("{} > {}", column, value1),
            RuleOperator::LessThan => format!("{} < {}", column, value1),
            RuleOperator::Between => format!("{} between {} and {}", column, value1, value2),
            RuleOperator::EqualTo => format!("{} = {}", column, value1),
            RuleOperator::ContainsText => format!("{} contains \"{}\"", column, value1),
            RuleOperator::NotContainsText => {
                format!("{} does not contain \"{}\"", column, value1)
            }
            RuleOperator::IsEmpty => format!("{} is empty", column),
            RuleOperator::IsNotEmpty => format!("{} is not empty", column),
        }
    }
}

/// Ordered rule list. Purely functional given its contents: no cached
/// state beyond the rules themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<ConditionalRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[ConditionalRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Insert at the front: the rule list displays most-recent-first.
    pub fn add(&mut self, rule: ConditionalRule) {
        self.rules.insert(0, rule);
    }

    /// Delete a rule. Returns false if no rule has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.id != id);
        self.rules.len() != before
    }

    /// Toggle a rule by whole-rule replacement.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.rules.iter_mut().find(|rule| rule.id == id) {
            Some(rule) => {
                *rule = ConditionalRule {
                    enabled,
                    ..rule.clone()
                };
                true
            }
            None => false,
        }
    }

    /// Styles contributed by every enabled rule whose reference covers
    /// `(row, col)` and whose operator test passes. Deduplicated,
    /// in list order.
    pub fn styles_for(&self, row: usize, col: usize, value: &CellValue) -> Vec<RuleStyle> {
        let mut seen = FxHashSet::default();
        let mut styles = Vec::new();
        for rule in &self.rules {
            if !rule.enabled {
                continue;
            }
            if !reference_matches(row, col, &rule.column_ref) {
                continue;
            }
            if !rule.matches(value) {
                continue;
            }
            if seen.insert(rule.style) {
                styles.push(rule.style);
            }
        }
        styles
    }
}
