use bookmark_tree::{parse_tree, BookmarkTreeNode, FolderIndex};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

/// Assigns unique ids to a generated tree, in pre-order
fn number(node: &mut BookmarkTreeNode, next: &mut usize) {
    node.id = next.to_string();
    *next += 1;
    if let Some(children) = node.children.as_mut() {
        for child in children {
            number(child, next);
        }
    }
}

fn arb_node() -> impl Strategy<Value = BookmarkTreeNode> {
    let title = prop_oneof![Just(String::new()), "[a-z]{1,6}"];
    let leaf = prop_oneof![
        (title.clone(), "[a-z]{1,4}").prop_map(|(title, host)| {
            BookmarkTreeNode::bookmark("", title, format!("https://{}.example", host))
        }),
        title.clone().prop_map(|title| BookmarkTreeNode::folder("", title, vec![])),
    ];

    leaf.prop_recursive(4, 48, 6, move |inner| {
        (title.clone(), prop::collection::vec(inner, 0..6))
            .prop_map(|(title, children)| BookmarkTreeNode::folder("", title, children))
    })
}

fn arb_tree() -> impl Strategy<Value = BookmarkTreeNode> {
    prop::collection::vec(arb_node(), 0..5).prop_map(|children| {
        let mut root = BookmarkTreeNode::root(children);
        number(&mut root, &mut 0);
        root
    })
}

fn bookmark_ids(tree: &BookmarkTreeNode) -> HashSet<String> {
    tree.walk()
        .filter(|node| node.is_bookmark())
        .map(|node| node.id.clone())
        .collect()
}

proptest! {
    #[test]
    fn parsing_is_idempotent(tree in arb_tree()) {
        let roots = vec![tree];
        let first = parse_tree(&roots);
        let second = parse_tree(&roots);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bookmarks_never_appear_as_folders(tree in arb_tree()) {
        let bookmarks = bookmark_ids(&tree);
        let index = parse_tree(std::slice::from_ref(&tree));

        for option in &index.top_level {
            prop_assert!(!bookmarks.contains(&option.id));
        }
        for group in &index.groups {
            prop_assert!(!bookmarks.contains(&group.id));
            for option in &group.options {
                prop_assert!(!bookmarks.contains(&option.id));
            }
        }
    }

    #[test]
    fn top_level_lists_titled_root_children(tree in arb_tree()) {
        let expected: Vec<_> = tree
            .children()
            .iter()
            .filter(|child| child.is_folder() && !child.title.is_empty())
            .map(|child| child.id.clone())
            .collect();

        let index = parse_tree(std::slice::from_ref(&tree));
        let actual: Vec<_> = index.top_level.iter().map(|o| o.id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn one_group_per_titled_folder(tree in arb_tree()) {
        let expected: Vec<_> = tree
            .walk()
            .filter(|node| node.is_folder() && !node.title.is_empty())
            .map(|node| node.id.clone())
            .collect();

        let index = parse_tree(std::slice::from_ref(&tree));
        let actual: Vec<_> = index.groups.iter().map(|g| g.id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_parse_browser_tree() {
    let json = r#"[{
        "id": "0",
        "title": "",
        "children": [
            {"id": "1", "parentId": "0", "index": 0, "title": "Bookmarks bar", "children": [
                {"id": "10", "parentId": "1", "index": 0, "title": "Rust", "children": [
                    {"id": "11", "parentId": "10", "index": 0, "title": "Book", "url": "https://doc.rust-lang.org/book/"}
                ]},
                {"id": "12", "parentId": "1", "index": 1, "title": "Docs", "url": "https://docs.rs"}
            ]},
            {"id": "2", "parentId": "0", "index": 1, "title": "Other bookmarks", "children": []}
        ]
    }]"#;

    let roots: Vec<BookmarkTreeNode> = serde_json::from_str(json).unwrap();
    let index = parse_tree(&roots);

    let top: Vec<_> = index.top_level.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(top, vec!["Bookmarks bar", "Other bookmarks"]);

    let groups: Vec<_> = index
        .groups
        .iter()
        .map(|g| (g.title.as_str(), g.options.len()))
        .collect();
    assert_eq!(
        groups,
        vec![("Bookmarks bar", 1), ("Rust", 0), ("Other bookmarks", 0)]
    );
}

#[test]
fn test_unchanged_tree_parses_identically() {
    let roots = vec![BookmarkTreeNode::root(vec![BookmarkTreeNode::folder(
        "1",
        "Bookmarks bar",
        vec![BookmarkTreeNode::folder("2", "Nested", vec![])],
    )])];

    let first: FolderIndex = parse_tree(&roots);
    assert_eq!(first, parse_tree(&roots));
}
