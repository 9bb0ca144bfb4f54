use arbor::{NodeRef, Tree};

pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(true)
        .try_init();
}

/// R
/// ├── A
/// │   ├── D
/// │   └── E
/// ├── B
/// └── C
pub fn setup() -> Tree<&'static str> {
    init_logger();

    let mut tree = Tree::new();
    tree.add_root("R").unwrap();
    let children = tree.add_children(["A", "B", "C"]).unwrap();
    tree.set_position(&children[0]).unwrap();
    tree.add_children(["D", "E"]).unwrap();

    tree
}

pub fn elements<T: Clone>(nodes: &[NodeRef<T>]) -> Vec<T> {
    nodes.iter().map(|node| node.element().clone()).collect()
}
