use crate::schema::component::ComponentSchema;
use crate::schema::issue::{Issue, PathElem};
use serde_json::Value;

/// Declared type of a single prop field, with per-type constraints.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// UTF-8 string, optionally with a minimum character count.
    Str {
        /// Minimum number of characters, if any.
        min_len: Option<usize>,
    },
    /// String that must parse as an absolute URL.
    Url,
    /// Boolean.
    Bool,
    /// Integer, optionally bounded inclusively on either side.
    Int {
        /// Inclusive lower bound, if any.
        min: Option<i64>,
        /// Inclusive upper bound, if any.
        max: Option<i64>,
    },
    /// Number (integer or float), optionally bounded inclusively.
    Num {
        /// Inclusive lower bound, if any.
        min: Option<f64>,
        /// Inclusive upper bound, if any.
        max: Option<f64>,
    },
    /// One of a fixed set of string literals.
    StrEnum(Vec<String>),
    /// One of a fixed set of integer literals.
    IntEnum(Vec<i64>),
    /// Array, optionally with a minimum length and a per-item record schema.
    List {
        /// Minimum number of items, if any.
        min_items: Option<usize>,
        /// Schema every item must satisfy, if any. Items are checked
        /// structurally; item-level defaults are not filled in.
        item: Option<Box<ComponentSchema>>,
    },
    /// Nested object checked structurally against a record schema.
    Record(Box<ComponentSchema>),
}

impl FieldType {
    /// Unbounded string.
    pub fn string() -> Self {
        Self::Str { min_len: None }
    }

    /// String restricted to a fixed set of literals.
    pub fn str_enum(values: &[&str]) -> Self {
        Self::StrEnum(values.iter().map(|s| s.to_string()).collect())
    }

    /// Integer restricted to a fixed set of literals.
    pub fn int_enum(values: &[i64]) -> Self {
        Self::IntEnum(values.to_vec())
    }

    pub(crate) fn check(&self, path: &mut Vec<PathElem>, value: &Value, issues: &mut Vec<Issue>) {
        match self {
            FieldType::Str { min_len } => match value.as_str() {
                None => issues.push(Issue::at(path, "must be a string")),
                Some(s) => {
                    if let Some(min) = min_len
                        && s.chars().count() < *min
                    {
                        let msg = if *min == 1 {
                            String::from("must not be empty")
                        } else {
                            format!("must be at least {min} characters")
                        };
                        issues.push(Issue::at(path, msg));
                    }
                }
            },
            FieldType::Url => match value.as_str() {
                None => issues.push(Issue::at(path, "must be a string")),
                Some(s) => {
                    if url::Url::parse(s).is_err() {
                        issues.push(Issue::at(path, "must be a valid URL"));
                    }
                }
            },
            FieldType::Bool => {
                if !value.is_boolean() {
                    issues.push(Issue::at(path, "must be a boolean"));
                }
            }
            FieldType::Int { min, max } => match value.as_i64() {
                None => issues.push(Issue::at(path, "must be an integer")),
                Some(n) => {
                    let below = min.is_some_and(|lo| n < lo);
                    let above = max.is_some_and(|hi| n > hi);
                    if below || above {
                        issues.push(Issue::at(path, bounds_message(*min, *max)));
                    }
                }
            },
            FieldType::Num { min, max } => match value.as_f64() {
                None => issues.push(Issue::at(path, "must be a number")),
                Some(x) => {
                    let below = min.is_some_and(|lo| x < lo);
                    let above = max.is_some_and(|hi| x > hi);
                    if below || above {
                        issues.push(Issue::at(path, bounds_message(*min, *max)));
                    }
                }
            },
            FieldType::StrEnum(allowed) => {
                let ok = value.as_str().is_some_and(|s| allowed.iter().any(|a| a == s));
                if !ok {
                    issues.push(Issue::at(
                        path,
                        format!("must be one of: {}", allowed.join(", ")),
                    ));
                }
            }
            FieldType::IntEnum(allowed) => {
                let ok = value.as_i64().is_some_and(|n| allowed.contains(&n));
                if !ok {
                    let list = allowed
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    issues.push(Issue::at(path, format!("must be one of: {list}")));
                }
            }
            FieldType::List { min_items, item } => match value.as_array() {
                None => issues.push(Issue::at(path, "must be an array")),
                Some(items) => {
                    if let Some(min) = min_items
                        && items.len() < *min
                    {
                        let msg = if *min == 1 {
                            String::from("must not be empty")
                        } else {
                            format!("must have at least {min} items")
                        };
                        issues.push(Issue::at(path, msg));
                    }
                    if let Some(schema) = item {
                        for (i, entry) in items.iter().enumerate() {
                            path.push(PathElem::Index(i));
                            match entry.as_object() {
                                None => issues.push(Issue::at(path, "must be an object")),
                                Some(obj) => schema.check_fields(path, obj, issues),
                            }
                            path.pop();
                        }
                    }
                }
            },
            FieldType::Record(schema) => match value.as_object() {
                None => issues.push(Issue::at(path, "must be an object")),
                Some(obj) => schema.check_fields(path, obj, issues),
            },
        }
    }
}

fn bounds_message<T: std::fmt::Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("must be between {lo} and {hi}"),
        (Some(lo), None) => format!("must be at least {lo}"),
        (None, Some(hi)) => format!("must be at most {hi}"),
        (None, None) => String::from("is out of range"),
    }
}

/// Schema for one prop field: declared type, requiredness, optional default.
///
/// A field with a default is never reported missing; normalization fills the
/// default in when the field is absent.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub(crate) ty: FieldType,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
}

impl FieldSchema {
    /// Field that must be present.
    pub fn required(ty: FieldType) -> Self {
        Self {
            ty,
            required: true,
            default: None,
        }
    }

    /// Field that may be absent; absent fields stay absent after
    /// normalization.
    pub fn optional(ty: FieldType) -> Self {
        Self {
            ty,
            required: false,
            default: None,
        }
    }

    /// Field that may be absent; normalization fills `default` in when it is.
    pub fn defaulted(ty: FieldType, default: Value) -> Self {
        Self {
            ty,
            required: false,
            default: Some(default),
        }
    }

    /// Declared type of the field.
    pub fn field_type(&self) -> &FieldType {
        &self.ty
    }

    /// Whether the field must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Default filled in by normalization when the field is absent, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/field.rs"]
mod tests;
