//! Tree widget — a hierarchical selector rendered as indented text.
//!
//! Nodes live in an arena addressed by `NodeId`; the rendered text is a
//! projection of that arena. Each visible node renders as one line:
//!
//! ```text
//! + collapsed branch
//! - expanded branch
//!   . leaf
//! ```
//!
//! Children are indented one `INDENT` unit deeper than their parent's own
//! output, and a node whose name is hidden still indents its children.
//! The renderer never skips a depth level, so for any line at depth `d`
//! the nearest preceding lines at depths `d-1, d-2, …` are its ancestors.
//!
//! Activating a line either toggles a branch or reports the leaf's path
//! (innermost name first, root name last) as a `TreeEvent`.

/// One indentation unit.
pub const INDENT: &str = "  ";
/// Marker of a branch whose children are hidden.
pub const MARKER_COLLAPSED: &str = "+ ";
/// Marker of a branch whose children are shown.
pub const MARKER_EXPANDED: &str = "- ";
/// Marker of a node without children.
pub const MARKER_LEAF: &str = ". ";

/// Stable index of a node in its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Line prefix describing a node's kind and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Leaf,
    Collapsed,
    Expanded,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Leaf => MARKER_LEAF,
            Marker::Collapsed => MARKER_COLLAPSED,
            Marker::Expanded => MARKER_EXPANDED,
        }
    }

    pub fn is_branch(self) -> bool {
        !matches!(self, Marker::Leaf)
    }
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
    hide_name: bool,
}

impl Node {
    fn new(name: String, parent: Option<NodeId>) -> Self {
        Self {
            name,
            parent,
            children: Vec::new(),
            expanded: false,
            hide_name: false,
        }
    }
}

/// One visible line of the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub node: NodeId,
    pub depth: usize,
    pub marker: Marker,
}

/// What activating a line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// A branch changed its expand state. No activation happened.
    Toggled { path: Vec<String>, expanded: bool },
    /// A leaf was chosen. The tree is unchanged.
    Activated { path: Vec<String> },
}

/// Arena-backed tree with a synthetic, hidden, always-expanded root.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut root = Node::new(root_name.into(), None);
        root.expanded = true;
        root.hide_name = true;
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a collapsed child under `parent`.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.into(), Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.nodes[id.0].expanded
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.nodes[id.0].expanded = expanded;
    }

    /// Flip the expand flag and return the new state.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        let node = &mut self.nodes[id.0];
        node.expanded = !node.expanded;
        node.expanded
    }

    pub fn set_name_hidden(&mut self, id: NodeId, hidden: bool) {
        self.nodes[id.0].hide_name = hidden;
    }

    /// First child of `parent` with the given name.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.name(c) == name)
    }

    /// Names from `id` up to and including the root, innermost first.
    pub fn path(&self, id: NodeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(self.name(node).to_string());
            current = self.parent(node);
        }
        path
    }

    fn marker(&self, id: NodeId) -> Marker {
        let node = &self.nodes[id.0];
        if node.children.is_empty() {
            Marker::Leaf
        } else if node.expanded {
            Marker::Expanded
        } else {
            Marker::Collapsed
        }
    }

    /// Visible lines in render order.
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        self.collect_rows(self.root(), 0, &mut rows);
        rows
    }

    fn collect_rows(&self, id: NodeId, depth: usize, rows: &mut Vec<Row>) {
        let node = &self.nodes[id.0];
        let marker = self.marker(id);
        if !node.hide_name {
            rows.push(Row {
                node: id,
                depth,
                marker,
            });
        }
        if marker == Marker::Expanded {
            for &child in &node.children {
                self.collect_rows(child, depth + 1, rows);
            }
        }
    }

    /// Text of one row, without the trailing newline.
    pub fn row_text(&self, row: &Row) -> String {
        format!(
            "{}{}{}",
            INDENT.repeat(row.depth),
            row.marker.as_str(),
            self.name(row.node)
        )
    }

    /// Rendered lines, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.rows().iter().map(|r| self.row_text(r)).collect()
    }

    /// Full rendering; every line is newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Activate the line under the cursor (0-based).
    ///
    /// Branches toggle; leaves report their path. Returns `None` when the
    /// cursor is past the last rendered line.
    pub fn activate(&mut self, cursor_line: usize) -> Option<TreeEvent> {
        let row = *self.rows().get(cursor_line)?;
        let path = self.path(row.node);
        if row.marker.is_branch() {
            let expanded = self.toggle(row.node);
            Some(TreeEvent::Toggled { path, expanded })
        } else {
            Some(TreeEvent::Activated { path })
        }
    }
}
