use deeplink::{Component, Node, Params, RemoveError};

fn route(pattern: &str) -> Vec<Component> {
    let mut components: Vec<Component> = pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| Component::parse(segment).unwrap())
        .collect();
    components.push(Component::Empty);
    components
}

#[test]
fn remove_restores_previous_structure() {
    let routes = [
        "/",
        "/users",
        "/users/:id",
        "/users/:id/posts/:post",
        "/files/**path",
        "/mirror/*",
    ];

    let mut tree = Node::new();
    let empty = tree.clone();

    for (index, pattern) in routes.iter().enumerate() {
        tree.insert(&route(pattern), index).unwrap();
    }

    // removal in registration order, pruning as we go
    for (index, pattern) in routes.iter().enumerate() {
        assert_eq!(tree.remove(&route(pattern)), Ok(index), "{pattern}");
        assert_eq!(
            tree.remove(&route(pattern)),
            Err(RemoveError::RouteNotFound),
            "{pattern} was not fully removed"
        );
    }

    assert!(tree.is_empty());
    assert_eq!(tree, empty);
}

#[test]
fn pruning_stops_at_ancestors_with_state() {
    let mut tree = Node::new();
    tree.insert(&route("/a/b"), 1).unwrap();
    tree.insert(&route("/a/b/c/d"), 2).unwrap();

    let mut expected = Node::new();
    expected.insert(&route("/a/b"), 1).unwrap();

    assert_eq!(tree.remove(&route("/a/b/c/d")), Ok(2));
    assert_eq!(tree, expected, "the c/d chain should be pruned, /a/b kept");

    let mut params = Params::default();
    assert_eq!(tree.at(&["a", "b"], &mut params), Some(&1));
}

#[test]
fn removal_descends_by_structure_not_by_match() {
    let mut tree = Node::new();
    tree.insert(&route("/users/:id"), 1).unwrap();

    // a literal that *would* match is not the registered structure
    assert_eq!(
        tree.remove(&route("/users/42")),
        Err(RemoveError::RouteNotFound)
    );
    // parameter names must agree
    assert_eq!(
        tree.remove(&route("/users/:other")),
        Err(RemoveError::RouteNotFound)
    );

    assert_eq!(tree.remove(&route("/users/:id")), Ok(1));
}

#[test]
fn catch_all_removal_requires_name_equality() {
    let mut tree = Node::new();
    tree.insert(&route("/files/**path"), 1).unwrap();

    assert_eq!(
        tree.remove(&route("/files/**other")),
        Err(RemoveError::RouteNotFound)
    );
    assert_eq!(
        tree.remove(&route("/files/**")),
        Err(RemoveError::RouteNotFound)
    );
    assert_eq!(tree.remove(&route("/files/**path")), Ok(1));
    assert!(tree.is_empty());
}

#[test]
fn misplaced_catch_all_is_rejected() {
    let mut tree = Node::new();
    tree.insert(&route("/files/**path"), 1).unwrap();

    assert_eq!(
        tree.remove(&route("/files/**path/x")),
        Err(RemoveError::MisplacedCatchAllComponent(Some(
            "path".to_owned()
        )))
    );

    // the failed removal must not have taken anything
    assert_eq!(tree.remove(&route("/files/**path")), Ok(1));
}

#[test]
fn sibling_edges_survive_removal() {
    let mut tree = Node::new();
    tree.insert(&route("/users/list"), 1).unwrap();
    tree.insert(&route("/users/:name"), 2).unwrap();

    assert_eq!(tree.remove(&route("/users/list")), Ok(1));

    let mut params = Params::default();
    assert_eq!(tree.at(&["users", "list"], &mut params), Some(&2));
    assert_eq!(params.get("name"), Some("list"));
}
