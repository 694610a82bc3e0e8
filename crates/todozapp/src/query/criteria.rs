//! Filter criteria.
//!
//! A [`Criteria`] comes in three shapes, chosen by the caller:
//!
//! - [`Criteria::Predicate`]: an arbitrary closure over a [`Todo`].
//! - [`Criteria::FieldMap`]: a [`FieldCriteria`] mapping field names to a
//!   literal (strict equality) or an operator [`Condition`].
//! - [`Criteria::FieldMatch`]: one field compared to one value, either exactly
//!   or as a case-insensitive substring.
//!
//! Every field entry must hold for a record to match, and every operator of a
//! condition must hold for its field. A record that lacks a named field never
//! matches.

use super::{FieldValue, Operator};
use crate::error::{Result, TodozError};
use crate::model::Todo;
use std::fmt;

/// What a single field must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Strict equality with a literal.
    Literal(FieldValue),
    /// All operators must hold against their operands.
    Operators(Vec<(Operator, FieldValue)>),
}

impl Condition {
    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Condition::Literal(expected) => value.strict_eq(expected),
            Condition::Operators(ops) => ops
                .iter()
                .all(|(op, operand)| op.evaluate(value, operand)),
        }
    }

    fn from_json(field: &str, json: &serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(ops) = json else {
            let literal = serde_json::from_value(json.clone()).map_err(|_| {
                TodozError::validation(format!("Unsupported literal for field '{}'", field))
            })?;
            return Ok(Condition::Literal(literal));
        };

        let mut parsed = Vec::with_capacity(ops.len());
        for (name, operand) in ops {
            let operand: FieldValue = serde_json::from_value(operand.clone()).map_err(|_| {
                TodozError::validation(format!(
                    "Operand of '{}' on field '{}' must be a scalar or a list",
                    name, field
                ))
            })?;
            parsed.push((Operator::parse(name), operand));
        }
        Ok(Condition::Operators(parsed))
    }
}

/// Field name to condition mapping, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCriteria {
    conditions: Vec<(String, Condition)>,
}

impl FieldCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to strictly equal `value`.
    pub fn equals(self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.condition(field, Condition::Literal(value.into()))
    }

    /// Require `op` to hold for `field`. Repeated calls for the same field
    /// accumulate into one condition object.
    pub fn with(
        mut self,
        field: impl Into<String>,
        op: impl Into<Operator>,
        operand: impl Into<FieldValue>,
    ) -> Self {
        let field = field.into();
        let entry = (op.into(), operand.into());
        let existing = self.conditions.iter_mut().find_map(|(name, condition)| {
            match condition {
                Condition::Operators(ops) if *name == field => Some(ops),
                _ => None,
            }
        });
        match existing {
            Some(ops) => ops.push(entry),
            None => self
                .conditions
                .push((field, Condition::Operators(vec![entry]))),
        }
        self
    }

    pub fn condition(mut self, field: impl Into<String>, condition: Condition) -> Self {
        self.conditions.push((field.into(), condition));
        self
    }

    /// AND the entries of `other` into this mapping.
    pub fn merge(mut self, other: FieldCriteria) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.conditions.iter().all(|(field, condition)| {
            todo.field(field)
                .is_some_and(|value| condition.matches(&value))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.conditions.iter().any(|(field, _)| field.is_empty()) {
            return Err(TodozError::validation("Field name must not be empty"));
        }
        Ok(())
    }

    /// Parse a JSON object such as `{"completed": false, "id": {"gt": 2}}`.
    ///
    /// Nested objects are condition objects; every other JSON value is a
    /// literal. Anything but an object at the top level is malformed.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(fields) = json else {
            return Err(TodozError::validation(
                "Criteria must be an object mapping field names to conditions",
            ));
        };

        let mut criteria = FieldCriteria::new();
        for (field, condition) in fields {
            criteria = criteria.condition(field.clone(), Condition::from_json(field, condition)?);
        }
        criteria.validate()?;
        Ok(criteria)
    }
}

/// How a [`Criteria::FieldMatch`] compares its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Exact,
    /// Case-insensitive substring of the text forms.
    Substring,
}

/// A filter over todos. See the module docs for the three shapes.
pub enum Criteria {
    Predicate(Box<dyn Fn(&Todo) -> bool>),
    FieldMap(FieldCriteria),
    FieldMatch {
        field: String,
        value: FieldValue,
        mode: MatchMode,
    },
}

impl Criteria {
    pub fn predicate(f: impl Fn(&Todo) -> bool + 'static) -> Self {
        Criteria::Predicate(Box::new(f))
    }

    pub fn field_match(
        field: impl Into<String>,
        value: impl Into<FieldValue>,
        mode: MatchMode,
    ) -> Self {
        Criteria::FieldMatch {
            field: field.into(),
            value: value.into(),
            mode,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Criteria::Predicate(f) => f(todo),
            Criteria::FieldMap(criteria) => criteria.matches(todo),
            Criteria::FieldMatch { field, value, mode } => {
                let Some(actual) = todo.field(field) else {
                    return false;
                };
                match mode {
                    MatchMode::Exact => actual.strict_eq(value),
                    MatchMode::Substring => Operator::Contains.evaluate(&actual, value),
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Criteria::Predicate(_) => Ok(()),
            Criteria::FieldMap(criteria) => criteria.validate(),
            Criteria::FieldMatch { field, .. } if field.is_empty() => {
                Err(TodozError::validation("Field name is required for filtering"))
            }
            Criteria::FieldMatch { .. } => Ok(()),
        }
    }
}

impl From<FieldCriteria> for Criteria {
    fn from(criteria: FieldCriteria) -> Self {
        Criteria::FieldMap(criteria)
    }
}

impl fmt::Debug for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::Predicate(_) => f.write_str("Predicate(<fn>)"),
            Criteria::FieldMap(criteria) => f.debug_tuple("FieldMap").field(criteria).finish(),
            Criteria::FieldMatch { field, value, mode } => f
                .debug_struct("FieldMatch")
                .field("field", field)
                .field("value", value)
                .field("mode", mode)
                .finish(),
        }
    }
}
