use crate::{Point, Rectangle};

/// Handle of a node inside an `RTree`'s arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node stores. A node holds points or children, never both.
#[derive(Clone, Debug)]
pub enum NodeKind {
    Leaf(Vec<Point>),
    Internal(Vec<NodeId>),
}

#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) mbr: Rectangle,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn new_leaf(parent: Option<NodeId>) -> Self {
        Node {
            mbr: Rectangle::new_empty(),
            parent,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    pub fn mbr(&self) -> Rectangle {
        self.mbr
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Number of entries: points for a leaf, children for an internal node.
    pub fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(points) => points.len(),
            NodeKind::Internal(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The leaf's points; empty for internal nodes.
    pub fn points(&self) -> &[Point] {
        match &self.kind {
            NodeKind::Leaf(points) => points,
            NodeKind::Internal(_) => &[],
        }
    }

    /// The internal node's children; empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Internal(children) => children,
        }
    }
}
