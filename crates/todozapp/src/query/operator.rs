//! Condition operators.
//!
//! Operators are parsed from their names (`"gt"`, `"startsWith"`, ...). Names
//! that match no operator are kept as [`Operator::Unknown`] and evaluate to
//! `true`, so a condition object with a misspelled operator filters as if
//! that operator were absent.

use super::FieldValue;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Strict equality (`equals`, `eq`).
    Equals,
    /// Strict inequality (`notEquals`, `ne`).
    NotEquals,
    /// Case-insensitive substring of the text forms.
    Contains,
    /// Case-insensitive prefix of the text forms.
    StartsWith,
    /// Case-insensitive suffix of the text forms.
    EndsWith,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    /// Field value is a member of the operand list.
    In,
    /// Field value is not a member of the operand list.
    NotIn,
    /// Unrecognized name. Always matches.
    Unknown(String),
}

impl Operator {
    /// Parse an operator by name, warning when the name is not recognized.
    pub fn parse(name: &str) -> Self {
        let op = match name {
            "equals" | "eq" => Operator::Equals,
            "notEquals" | "ne" => Operator::NotEquals,
            "contains" => Operator::Contains,
            "startsWith" => Operator::StartsWith,
            "endsWith" => Operator::EndsWith,
            "greaterThan" | "gt" => Operator::GreaterThan,
            "lessThan" | "lt" => Operator::LessThan,
            "greaterThanOrEqual" | "gte" => Operator::GreaterThanOrEqual,
            "lessThanOrEqual" | "lte" => Operator::LessThanOrEqual,
            "in" => Operator::In,
            "notIn" => Operator::NotIn,
            other => Operator::Unknown(other.to_string()),
        };
        if let Operator::Unknown(name) = &op {
            tracing::warn!(operator = %name, "unknown filter operator, ignoring it");
        }
        op
    }

    /// Canonical name of the operator.
    pub fn name(&self) -> &str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "notEquals",
            Operator::Contains => "contains",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
            Operator::GreaterThanOrEqual => "greaterThanOrEqual",
            Operator::LessThanOrEqual => "lessThanOrEqual",
            Operator::In => "in",
            Operator::NotIn => "notIn",
            Operator::Unknown(name) => name,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Operator::Unknown(_))
    }

    /// Check whether `value` satisfies this operator against `operand`.
    pub fn evaluate(&self, value: &FieldValue, operand: &FieldValue) -> bool {
        match self {
            Operator::Equals => value.strict_eq(operand),
            Operator::NotEquals => !value.strict_eq(operand),
            Operator::Contains => text_pair(value, operand, |v, t| v.contains(t)),
            Operator::StartsWith => text_pair(value, operand, |v, t| v.starts_with(t)),
            Operator::EndsWith => text_pair(value, operand, |v, t| v.ends_with(t)),
            // NaN on either side makes every comparison false.
            Operator::GreaterThan => value.to_number() > operand.to_number(),
            Operator::LessThan => value.to_number() < operand.to_number(),
            Operator::GreaterThanOrEqual => value.to_number() >= operand.to_number(),
            Operator::LessThanOrEqual => value.to_number() <= operand.to_number(),
            Operator::In => operand
                .as_list()
                .is_some_and(|items| items.iter().any(|item| value.strict_eq(item))),
            Operator::NotIn => operand
                .as_list()
                .is_some_and(|items| !items.iter().any(|item| value.strict_eq(item))),
            Operator::Unknown(_) => true,
        }
    }
}

fn text_pair(value: &FieldValue, operand: &FieldValue, test: impl Fn(&str, &str) -> bool) -> bool {
    let value = value.to_text().to_lowercase();
    let operand = operand.to_text().to_lowercase();
    test(&value, &operand)
}

impl From<&str> for Operator {
    fn from(name: &str) -> Self {
        Operator::parse(name)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
