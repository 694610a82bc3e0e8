//! # Query Layer
//!
//! Filtering over todos is expressed with a small set of types instead of
//! ad-hoc closures per field:
//!
//! - **Values**: [`FieldValue`], the dynamic form of a field or operand
//! - **Operators**: [`Operator`], a closed set plus `Unknown` for names that
//!   match nothing
//! - **Conditions**: [`Condition`], a literal or a set of operators for one field
//! - **Criteria**: [`FieldCriteria`] (field map) and [`Criteria`] (predicate,
//!   field map, or single field match)
//!
//! ## Operators
//!
//! | Names | Semantics |
//! |-------|-----------|
//! | `equals`, `eq` / `notEquals`, `ne` | strict (in)equality |
//! | `contains`, `startsWith`, `endsWith` | case-insensitive, on text forms |
//! | `gt`, `lt`, `gte`, `lte` (and long names) | numeric, `NaN` never matches |
//! | `in`, `notIn` | membership; operand must be a list |
//!
//! Unknown operator names are accepted and ignored (they always match).
//!
//! ## Usage
//!
//! ```ignore
//! let criteria = FieldCriteria::new()
//!     .with("id", Operator::GreaterThan, 2)
//!     .equals("completed", false);
//! let open = store.filter(&criteria.into())?;
//! ```

mod criteria;
mod operator;
mod value;

pub use criteria::{Condition, Criteria, FieldCriteria, MatchMode};
pub use operator::Operator;
pub use value::FieldValue;
