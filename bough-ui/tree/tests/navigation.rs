use std::sync::Arc;

use bough_ui_tree::{
    DrillInReason, Mode, NavigationError, Node, Tree, TreeNavigator,
    resolve_level,
};
use serde_json::json;

fn scenario_tree() -> Arc<Tree> {
    let json = json!([
        {
            "name": "A",
            "children": [{ "name": "A1" }, { "name": "A2" }]
        },
        { "name": "B" }
    ]);
    let tree = Tree::from_json(&json.to_string()).expect("tree should parse");
    Arc::new(tree)
}

fn level_names(navigator: &TreeNavigator) -> Vec<String> {
    navigator
        .view()
        .level()
        .iter()
        .map(|node| node.name().to_owned())
        .collect()
}

#[test]
fn breadcrumb_scenario_restores_drilled_into_parent() {
    let mut navigator = TreeNavigator::create(scenario_tree(), Mode::Column);

    assert_eq!(navigator.view().depth(), 0);
    assert_eq!(level_names(&navigator), vec!["A", "B"]);
    assert!(navigator.view().selected().is_none());

    navigator.select(Some("A")).expect("select A");
    assert_eq!(navigator.view().selected().map(Node::name), Some("A"));

    navigator.drill_in().expect("drill into A");
    {
        let view = navigator.view();
        assert_eq!(view.depth(), 1);
        assert_eq!(view.path(), ["A"]);
        assert_eq!(view.parent().map(Node::name), Some("A"));
        assert!(view.selected().is_none());
    }
    assert_eq!(level_names(&navigator), vec!["A1", "A2"]);

    navigator.select(Some("A1")).expect("select A1");
    navigator.drill_out().expect("drill out to root");

    let view = navigator.view();
    assert_eq!(view.depth(), 0);
    assert!(view.path().is_empty());
    assert_eq!(view.selected().map(Node::name), Some("A"));
    assert_eq!(level_names(&navigator), vec!["A", "B"]);
}

#[test]
fn drill_in_then_drill_out_round_trips_depth_path_and_level() {
    let tree = scenario_tree();
    let mut navigator = TreeNavigator::create(Arc::clone(&tree), Mode::Column);
    navigator.select(Some("A")).expect("select A");
    let depth = navigator.view().depth();
    let path = navigator.view().path().to_vec();
    let level = level_names(&navigator);

    navigator.drill_in().expect("drill into A");
    navigator.drill_out().expect("drill back out");

    assert_eq!(navigator.view().depth(), depth);
    assert_eq!(navigator.view().path(), path.as_slice());
    assert_eq!(level_names(&navigator), level);
    assert_eq!(navigator.view().selected().map(Node::name), Some("A"));
}

#[test]
fn drill_out_at_root_fails_without_changing_state() {
    let mut navigator = TreeNavigator::create(scenario_tree(), Mode::Column);
    navigator.select(Some("B")).expect("select B");

    assert_eq!(navigator.drill_out(), Err(NavigationError::InvalidDrillOut));
    assert_eq!(navigator.view().depth(), 0);
    assert_eq!(navigator.view().selected().map(Node::name), Some("B"));
}

#[test]
fn drill_in_requires_a_selected_node_with_children() {
    let mut navigator = TreeNavigator::create(scenario_tree(), Mode::Column);

    assert_eq!(
        navigator.drill_in(),
        Err(NavigationError::InvalidDrillIn {
            reason: DrillInReason::NoSelection,
        })
    );

    navigator.select(Some("B")).expect("select B");
    assert_eq!(
        navigator.drill_in(),
        Err(NavigationError::InvalidDrillIn {
            reason: DrillInReason::Leaf {
                name: String::from("B"),
            },
        })
    );
    assert_eq!(navigator.view().depth(), 0);
}

#[test]
fn resolving_unknown_root_reports_path_resolution_error() {
    let tree = scenario_tree();

    let err = resolve_level(&tree, &[String::from("Z")])
        .expect_err("no root sibling named Z");

    assert_eq!(
        err,
        NavigationError::PathResolution {
            segment: String::from("Z"),
            depth: 0,
        }
    );
}

#[test]
fn resolving_twice_yields_equal_levels() {
    let tree = scenario_tree();
    let path = [String::from("A")];

    let first = resolve_level(&tree, &path).expect("first");
    let second = resolve_level(&tree, &path).expect("second");

    assert_eq!(first, second);
}

#[test]
fn nested_mode_lists_expanded_levels_without_depth() {
    let mut navigator = TreeNavigator::create(scenario_tree(), Mode::Column);
    navigator.set_mode(Mode::Nested);

    navigator.activate(&[String::from("A")]).expect("expand A");
    navigator
        .activate(&[String::from("A"), String::from("A2")])
        .expect("highlight A2");

    {
        let view = navigator.view();
        assert_eq!(view.mode(), Mode::Nested);
        assert_eq!(view.depth(), 0);
        assert_eq!(view.selected().map(Node::name), Some("A2"));
    }
    assert_eq!(
        navigator.select(Some("A")),
        Err(NavigationError::UnsupportedInMode {
            operation: "select",
            mode: Mode::Nested,
        })
    );
}
