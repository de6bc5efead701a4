use serde_json::{Map, Value};
use std::fmt;

/// One element of a document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElem {
    /// A named object field.
    Field(String),
    /// A zero-based array index.
    Index(usize),
}

impl PathElem {
    /// Build a [`PathElem::Field`] value.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }
}

/// A single validation finding, addressed by its path into the document.
///
/// Issues are data, not errors: validators collect every one they find and
/// hand the caller the full set in an [`IssueReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Path from the document root to the offending value.
    pub path: Vec<PathElem>,
    /// What is wrong with the value at `path`.
    pub message: String,
}

impl Issue {
    /// Build an issue at `path`.
    pub fn at(path: &[PathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// Render the path in dotted form, e.g. `page.sections[0].props`.
    ///
    /// An empty path renders as `(root)`.
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

pub(crate) fn format_path(path: &[PathElem]) -> String {
    if path.is_empty() {
        return String::from("(root)");
    }
    let mut s = String::new();
    for p in path {
        match p {
            PathElem::Field(name) => {
                if !s.is_empty() {
                    s.push('.');
                }
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Every issue found while validating one document.
///
/// The report is only ever produced non-empty: a document with no issues
/// validates into a normalized [`PageSpec`](crate::PageSpec) instead.
#[derive(Debug, Clone)]
pub struct IssueReport {
    issues: Vec<Issue>,
}

impl IssueReport {
    pub(crate) fn from_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// All issues, in the order they were found (document order).
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Number of issues in the report.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the report holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Render the report as a JSON tree keyed by dotted path.
    ///
    /// Each key maps to the list of messages found at that path:
    ///
    /// ```json
    /// { "page.meta.title": ["is required"], "page.sections[1]": ["text-block: body is required"] }
    /// ```
    pub fn details(&self) -> Value {
        let mut map = Map::new();
        for issue in &self.issues {
            let key = issue.path_string();
            let entry = map
                .entry(key)
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(messages) = entry {
                messages.push(Value::String(issue.message.clone()));
            }
        }
        Value::Object(map)
    }
}

impl fmt::Display for IssueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for IssueReport {}

#[cfg(test)]
#[path = "../../tests/unit/schema/issue.rs"]
mod tests;
