use crate::ast::DirectiveNode;
use crate::mergers::merge_directives;
use crate::mergers::tests::test_utils::names;

fn directive(name: &str) -> DirectiveNode {
    DirectiveNode::new(name)
}

#[test]
fn incoming_applications_of_known_directives_are_dropped() {
    let existing = vec![directive("a"), directive("b")];
    let incoming = vec![directive("b"), directive("c")];

    let merged = merge_directives(&existing, &incoming);

    assert_eq!(names(&merged), vec!["a", "b", "c"]);
}

#[test]
fn existing_applications_are_kept_whole() {
    let mut with_arg = directive("tag");
    with_arg.arguments.push((
        "name".to_string(),
        crate::ast::Value::String("existing".to_string()),
    ));
    let mut incoming_tag = directive("tag");
    incoming_tag.arguments.push((
        "name".to_string(),
        crate::ast::Value::String("incoming".to_string()),
    ));

    let merged = merge_directives(&[with_arg.clone()], &[incoming_tag]);

    assert_eq!(merged, vec![with_arg]);
}

#[test]
fn repeated_existing_applications_are_kept_but_incoming_ones_collapse() {
    let existing = vec![directive("tag"), directive("tag")];
    let incoming = vec![directive("other"), directive("other")];

    let merged = merge_directives(&existing, &incoming);

    assert_eq!(names(&merged), vec!["tag", "tag", "other"]);
}

#[test]
fn repeated_incoming_applications_keep_the_first() {
    let mut first = directive("key");
    first.arguments.push((
        "fields".to_string(),
        crate::ast::Value::String("id".to_string()),
    ));

    let merged = merge_directives(&[], &[first.clone(), directive("key")]);

    assert_eq!(merged, vec![first]);
}

#[test]
fn empty_sides() {
    let some = vec![directive("a")];

    assert!(merge_directives(&[], &[]).is_empty());
    assert_eq!(merge_directives(&some, &[]), some);
    assert_eq!(merge_directives(&[], &some), some);
}
