use super::*;

#[test]
fn path_renders_dotted_with_indices() {
    let issue = Issue::at(
        &[
            PathElem::field("page"),
            PathElem::field("sections"),
            PathElem::Index(2),
            PathElem::field("props"),
        ],
        "must be an object",
    );
    assert_eq!(issue.path_string(), "page.sections[2].props");
    assert_eq!(issue.to_string(), "page.sections[2].props: must be an object");
}

#[test]
fn empty_path_renders_as_root() {
    let issue = Issue::at(&[], "document must be a JSON object");
    assert_eq!(issue.path_string(), "(root)");
}

#[test]
fn report_groups_messages_by_path() {
    let report = IssueReport::from_issues(vec![
        Issue::at(&[PathElem::field("version")], "version must be 1"),
        Issue::at(
            &[PathElem::field("page"), PathElem::field("theme")],
            "is required",
        ),
        Issue::at(
            &[PathElem::field("page"), PathElem::field("theme")],
            "must be a non-empty string",
        ),
    ]);
    assert_eq!(report.len(), 3);

    let details = report.details();
    let theme = details["page.theme"].as_array().unwrap();
    assert_eq!(theme.len(), 2);
    assert_eq!(details["version"][0], "version must be 1");
}

#[test]
fn report_display_joins_lines() {
    let report = IssueReport::from_issues(vec![
        Issue::at(&[PathElem::field("version")], "version must be 1"),
        Issue::at(&[PathElem::field("page")], "must be an object"),
    ]);
    let s = report.to_string();
    assert_eq!(s.lines().count(), 2);
    assert!(s.contains("version: version must be 1"));
}
