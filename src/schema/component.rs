use crate::schema::field::FieldSchema;
use crate::schema::issue::{Issue, PathElem};
use serde_json::{Map, Value};

/// Capability every component prop schema provides.
///
/// The section validator dispatches to a `PropSchema` through the
/// [`SchemaCatalog`](crate::SchemaCatalog), keyed by the section's
/// `component` id. Implementations either hand back a normalized copy of the
/// props (declared defaults filled in) or every issue they can find; they
/// never stop at the first problem.
pub trait PropSchema: Send + Sync {
    /// Validate `props`, returning normalized props or all issues found.
    ///
    /// Issue paths are relative to the props object itself.
    fn validate(&self, props: &Map<String, Value>) -> Result<Map<String, Value>, Vec<Issue>>;
}

/// Declarative field-table prop schema.
///
/// Fields are checked in declaration order. Schemas are open by default:
/// props not named in the table pass through validation and normalization
/// untouched. [`ComponentSchema::closed`] flips that to rejection.
#[derive(Debug, Clone, Default)]
pub struct ComponentSchema {
    fields: Vec<(String, FieldSchema)>,
    closed: bool,
}

impl ComponentSchema {
    /// Empty open schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Re-adding a name replaces the earlier definition.
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = schema;
        } else {
            self.fields.push((name, schema));
        }
        self
    }

    /// Reject props not named in the field table.
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[(String, FieldSchema)] {
        &self.fields
    }

    /// Structural check only: requiredness and per-field types, no defaults.
    /// Also used for nested records and list items.
    pub(crate) fn check_fields(
        &self,
        path: &mut Vec<PathElem>,
        props: &Map<String, Value>,
        issues: &mut Vec<Issue>,
    ) {
        for (name, field) in &self.fields {
            match props.get(name) {
                None => {
                    if field.required {
                        path.push(PathElem::field(name));
                        issues.push(Issue::at(path, "is required"));
                        path.pop();
                    }
                }
                Some(value) => {
                    path.push(PathElem::field(name));
                    field.ty.check(path, value, issues);
                    path.pop();
                }
            }
        }

        if self.closed {
            for key in props.keys() {
                if !self.fields.iter().any(|(name, _)| name == key) {
                    path.push(PathElem::field(key));
                    issues.push(Issue::at(path, "is not a recognized field"));
                    path.pop();
                }
            }
        }
    }
}

impl PropSchema for ComponentSchema {
    fn validate(&self, props: &Map<String, Value>) -> Result<Map<String, Value>, Vec<Issue>> {
        let mut issues = Vec::new();
        let mut path = Vec::new();
        self.check_fields(&mut path, props, &mut issues);
        if !issues.is_empty() {
            return Err(issues);
        }

        let mut out = props.clone();
        for (name, field) in &self.fields {
            if !out.contains_key(name)
                && let Some(default) = &field.default
            {
                out.insert(name.clone(), default.clone());
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/component.rs"]
mod tests;
