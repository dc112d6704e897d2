use derive_more::{AsRef, Deref, Display, From, Into};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

/// Opaque icon reference, resolved by whoever renders the menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct IconTag(String);

crate::impl_string_newtype!(IconTag);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Work attached to a leaf. The engine never looks inside.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action")
    }
}

/// Builder for a node before it is placed in a tree.
#[derive(Debug, Clone)]
pub struct MenuItem {
    label: Label,
    icon: Option<IconTag>,
    action: Option<Action>,
    radius: Option<f64>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Label::new(label),
            icon: None,
            action: None,
            radius: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(IconTag::new(icon));
        self
    }

    pub fn action(mut self, f: impl Fn() + 'static) -> Self {
        self.action = Some(Action::new(f));
        self
    }

    /// Ring radius to use while this node is the one being displayed.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

#[derive(Debug, Clone)]
pub struct MenuNode {
    pub label: Label,
    pub icon: Option<IconTag>,
    pub action: Option<Action>,
    pub radius: Option<f64>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl MenuNode {
    fn from_item(item: MenuItem, parent: Option<NodeId>) -> Self {
        Self {
            label: item.label,
            icon: item.icon,
            action: item.action,
            radius: item.radius,
            children: Vec::new(),
            parent,
        }
    }

    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Menu hierarchy stored in an arena. Children own nothing; `parent` links are plain ids, and
/// nodes can only be appended, so every chain of parents ends at the root.
#[derive(Debug, Clone)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![MenuNode::from_item(MenuItem::new(root_label), None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Appends `item` as the last child of `parent`. Returns `None`, leaving the tree
    /// untouched, when `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, item: MenuItem) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        self.nodes.get_mut(parent.0)?.children.push(id);
        self.nodes.push(MenuNode::from_item(item, Some(parent)));
        Some(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn is_branch(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(MenuNode::is_branch)
    }

    pub fn depth(&self, id: NodeId) -> usize {
        std::iter::successors(self.parent(id), |&p| self.parent(p)).count()
    }

    /// Labels from the root down to `id`, root included.
    pub fn path(&self, id: NodeId) -> Vec<&Label> {
        let mut labels: Vec<&Label> = std::iter::successors(Some(id), |&n| self.parent(n))
            .filter_map(|n| self.node(n).map(|node| &node.label))
            .collect();
        labels.reverse();
        labels
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = MenuTree::new("root");
        let a = tree.add_child(tree.root(), MenuItem::new("a")).unwrap();
        let b = tree.add_child(tree.root(), MenuItem::new("b").icon("folder")).unwrap();
        let c = tree.add_child(tree.root(), MenuItem::new("c")).unwrap();

        assert_eq!(tree.children(tree.root()), &[a, b, c]);
        assert_eq!(tree.node(b).unwrap().icon, Some(IconTag::new("folder")));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_branch_and_parent_links() {
        let mut tree = MenuTree::new("root");
        let load = tree.add_child(tree.root(), MenuItem::new("Load")).unwrap();
        let scene = tree.add_child(load, MenuItem::new("Main")).unwrap();
        let single = tree.add_child(scene, MenuItem::new("Single").action(|| {})).unwrap();

        assert!(tree.is_branch(tree.root()));
        assert!(tree.is_branch(load));
        assert!(!tree.is_branch(single));
        assert_eq!(tree.parent(single), Some(scene));
        assert_eq!(tree.parent(tree.root()), None);
        assert!(tree.node(tree.root()).unwrap().is_root());
        assert_eq!(tree.depth(single), 3);
        assert_eq!(tree.depth(tree.root()), 0);

        let path: Vec<&str> = tree.path(single).iter().map(|l| l.as_str()).collect();
        assert_eq!(path, ["root", "Load", "Main", "Single"]);
    }

    #[test]
    fn test_action_invocation() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut tree = MenuTree::new("root");
        let leaf = tree
            .add_child(
                tree.root(),
                MenuItem::new("go").action(move || counter.set(counter.get() + 1)),
            )
            .unwrap();

        let action = tree.node(leaf).and_then(|n| n.action.clone()).unwrap();
        action.invoke();
        action.invoke();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_unknown_node_queries_are_empty() {
        let tree = MenuTree::new("root");
        let ghost = NodeId(42);
        assert!(tree.node(ghost).is_none());
        assert!(tree.children(ghost).is_empty());
        assert!(!tree.is_branch(ghost));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_foreign_parent_is_rejected() {
        let mut other = MenuTree::new("other");
        let a = other.add_child(other.root(), MenuItem::new("a")).unwrap();
        let b = other.add_child(a, MenuItem::new("b")).unwrap();

        let mut tree = MenuTree::new("root");
        assert_eq!(tree.add_child(b, MenuItem::new("stray")), None);
        assert_eq!(tree.add_child(NodeId(42), MenuItem::new("stray")), None);
        assert_eq!(tree.len(), 1);
        assert!(tree.is_empty());
    }
}
