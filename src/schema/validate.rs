use crate::page::model::{PageBody, PageDocument, PageMeta, PageSpec, SectionSpec};
use crate::schema::catalog::SchemaCatalog;
use crate::schema::component::PropSchema;
use crate::schema::issue::{Issue, IssueReport, PathElem, format_path};
use crate::schema::version::PAGESPEC_VERSION;
use serde_json::{Map, Value};
use std::sync::Arc;

/// How the validator treats component prop schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Dispatch every registered component's prop schema (the default).
    #[default]
    Strict,
    /// Keep envelope checks but skip prop validation entirely, treating
    /// every component as unregistered. No prop defaults are filled in.
    Permissive,
}

/// Whole-document `PageSpec` validator.
///
/// Envelope checks (version literal, meta block, theme, section list shape)
/// run over the raw JSON; each section's props are then dispatched to the
/// catalog schema selected by the section's own `component` id. Every issue
/// found is collected; the document is accepted whole or rejected whole.
pub struct PageSpecValidator {
    catalog: Arc<SchemaCatalog>,
    mode: ValidationMode,
}

impl PageSpecValidator {
    /// Strict validator over `catalog`.
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self {
            catalog,
            mode: ValidationMode::Strict,
        }
    }

    /// Validator with an explicit [`ValidationMode`].
    pub fn with_mode(catalog: Arc<SchemaCatalog>, mode: ValidationMode) -> Self {
        Self { catalog, mode }
    }

    /// The configured mode.
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// The catalog sections are dispatched against.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Validate a wrapped raw document.
    pub fn validate(&self, doc: &PageDocument) -> Result<PageSpec, IssueReport> {
        self.validate_value(doc.raw())
    }

    #[tracing::instrument(skip(self, doc))]
    /// Validate a raw JSON document into a normalized [`PageSpec`].
    ///
    /// On success the returned document is a new value: declared defaults
    /// filled in, section order untouched, unknown props preserved. On
    /// failure the report carries every issue found. The input is never
    /// mutated.
    pub fn validate_value(&self, doc: &Value) -> Result<PageSpec, IssueReport> {
        let Some(root) = doc.as_object() else {
            return Err(IssueReport::from_issues(vec![Issue::at(
                &[],
                "document must be a JSON object",
            )]));
        };

        // A wrong format version means nothing else in the document can be
        // interpreted under this schema, so it short-circuits.
        if root.get("version").and_then(Value::as_u64) != Some(PAGESPEC_VERSION) {
            return Err(IssueReport::from_issues(vec![Issue::at(
                &[PathElem::field("version")],
                format!("version must be {PAGESPEC_VERSION}"),
            )]));
        }

        let mut issues = Vec::new();

        let page = match root.get("page") {
            None => {
                issues.push(Issue::at(&[PathElem::field("page")], "is required"));
                return Err(IssueReport::from_issues(issues));
            }
            Some(value) => match value.as_object() {
                None => {
                    issues.push(Issue::at(&[PathElem::field("page")], "must be an object"));
                    return Err(IssueReport::from_issues(issues));
                }
                Some(page) => page,
            },
        };

        let meta = check_meta(page, &mut issues);
        let theme = check_theme(page, &mut issues);
        let sections = self.check_sections(page, &mut issues);

        if let (Some(meta), Some(theme), Some(sections)) = (meta, theme, sections)
            && issues.is_empty()
        {
            Ok(PageSpec {
                version: PAGESPEC_VERSION,
                page: PageBody {
                    meta,
                    theme,
                    sections,
                },
            })
        } else {
            Err(IssueReport::from_issues(issues))
        }
    }

    fn check_sections(
        &self,
        page: &Map<String, Value>,
        issues: &mut Vec<Issue>,
    ) -> Option<Vec<SectionSpec>> {
        let base = [PathElem::field("page"), PathElem::field("sections")];
        let list = match page.get("sections") {
            None => {
                issues.push(Issue::at(&base, "is required"));
                return None;
            }
            Some(Value::Array(list)) => list,
            Some(_) => {
                issues.push(Issue::at(&base, "must be an array"));
                return None;
            }
        };
        if list.is_empty() {
            issues.push(Issue::at(&base, "must have at least 1 section"));
            return None;
        }

        let mut out = Vec::with_capacity(list.len());
        let mut ok = true;
        for (index, entry) in list.iter().enumerate() {
            match self.check_section(index, entry, issues) {
                Some(section) => out.push(section),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }

    fn check_section(
        &self,
        index: usize,
        entry: &Value,
        issues: &mut Vec<Issue>,
    ) -> Option<SectionSpec> {
        let path = [
            PathElem::field("page"),
            PathElem::field("sections"),
            PathElem::Index(index),
        ];
        let Some(obj) = entry.as_object() else {
            issues.push(Issue::at(&path, "must be an object"));
            return None;
        };

        let component = match obj.get("component") {
            None => {
                issues.push(Issue::at(
                    &with_field(&path, "component"),
                    "is required",
                ));
                return None;
            }
            Some(value) => match value.as_str() {
                None => {
                    issues.push(Issue::at(
                        &with_field(&path, "component"),
                        "must be a string",
                    ));
                    return None;
                }
                Some(s) => s.to_owned(),
            },
        };

        let props = match obj.get("props") {
            None => Map::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(_) => {
                issues.push(Issue::at(&with_field(&path, "props"), "must be an object"));
                return None;
            }
        };

        if self.mode == ValidationMode::Permissive {
            return Some(SectionSpec { component, props });
        }

        // Dispatch by the component id carried in the section itself.
        // Unregistered components pass through untouched.
        let Some(schema) = self.catalog.lookup(&component) else {
            return Some(SectionSpec { component, props });
        };

        match schema.validate(&props) {
            Ok(normalized) => Some(SectionSpec {
                component,
                props: normalized,
            }),
            Err(inner) => {
                for issue in inner {
                    issues.push(Issue::at(
                        &path,
                        format!("{component}: {} {}", format_path(&issue.path), issue.message),
                    ));
                }
                None
            }
        }
    }
}

fn with_field(path: &[PathElem], name: &str) -> Vec<PathElem> {
    let mut p = path.to_vec();
    p.push(PathElem::field(name));
    p
}

fn check_meta(page: &Map<String, Value>, issues: &mut Vec<Issue>) -> Option<PageMeta> {
    let base = [PathElem::field("page"), PathElem::field("meta")];
    let meta = match page.get("meta") {
        None => {
            issues.push(Issue::at(&base, "is required"));
            return None;
        }
        Some(value) => match value.as_object() {
            None => {
                issues.push(Issue::at(&base, "must be an object"));
                return None;
            }
            Some(meta) => meta,
        },
    };

    let title = match meta.get("title") {
        None => {
            issues.push(Issue::at(&with_field(&base, "title"), "is required"));
            None
        }
        Some(value) => match value.as_str() {
            None => {
                issues.push(Issue::at(&with_field(&base, "title"), "must be a string"));
                None
            }
            Some(s) => Some(s.to_owned()),
        },
    };
    let description = check_optional_string(meta, &base, "description", issues);
    let og_image = check_optional_string(meta, &base, "ogImage", issues);

    Some(PageMeta {
        title: title?,
        description: description?,
        og_image: og_image?,
    })
}

fn check_optional_string(
    obj: &Map<String, Value>,
    base: &[PathElem],
    name: &str,
    issues: &mut Vec<Issue>,
) -> Option<Option<String>> {
    match obj.get(name) {
        None => Some(None),
        Some(value) => match value.as_str() {
            None => {
                issues.push(Issue::at(&with_field(base, name), "must be a string"));
                None
            }
            Some(s) => Some(Some(s.to_owned())),
        },
    }
}

fn check_theme(page: &Map<String, Value>, issues: &mut Vec<Issue>) -> Option<String> {
    let base = [PathElem::field("page"), PathElem::field("theme")];
    match page.get("theme") {
        None => {
            issues.push(Issue::at(&base, "is required"));
            None
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(_) => {
            issues.push(Issue::at(&base, "must be a non-empty string"));
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
