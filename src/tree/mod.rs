// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::ast::Value;

mod summary;

/// What a tree node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Scalar,
    Array,
    Object,
}

/// How a node hangs off its parent: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeKey {
    Property(String),
    Index(usize),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Property(name) => write!(f, "{}", name),
            NodeKey::Index(i) => write!(f, "{}", i),
        }
    }
}

/// One renderable node of a projected tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    /// Key under the parent; `None` for the root.
    pub key: Option<NodeKey>,
    pub kind: NodeKind,
    /// Short display text: the scalar's JSON form, or a child count.
    pub summary: String,
    pub children: Vec<TreeNode>,
    pub collapsed: bool,
    /// Stable path-derived id, e.g. `$.users[0].name`. Keys containing
    /// `.` or `[` can collide; identities are opaque lookup keys, not
    /// parseable paths.
    pub identity: String,
}

impl TreeNode {
    /// Only containers with at least one child can collapse.
    pub fn is_collapsible(&self) -> bool {
        self.kind != NodeKind::Scalar && !self.children.is_empty()
    }

    /// Flip this node's collapse state. No-op on leaves and empty containers.
    pub fn toggle(&mut self) {
        if self.is_collapsible() {
            self.collapsed = !self.collapsed;
        }
    }

    /// Find a node by identity.
    ///
    /// Descends only into children whose identity prefixes the target,
    /// so lookups skip unrelated subtrees.
    pub fn find(&self, identity: &str) -> Option<&TreeNode> {
        if self.identity == identity {
            return Some(self);
        }
        for child in &self.children {
            if identity_extends(identity, &child.identity) {
                if let Some(found) = child.find(identity) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Find a node by identity, mutably. See [`TreeNode::find`].
    pub fn find_mut(&mut self, identity: &str) -> Option<&mut TreeNode> {
        if self.identity == identity {
            return Some(self);
        }
        for child in &mut self.children {
            if identity_extends(identity, &child.identity) {
                if let Some(found) = child.find_mut(identity) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// True when `target` is `prefix` itself or continues it at a selector
/// boundary, so `$.a` does not claim `$.ab`.
fn identity_extends(target: &str, prefix: &str) -> bool {
    match target.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}

/// Project a value into a renderable tree.
///
/// Every node starts expanded. With `prior`, nodes whose identity was
/// collapsed in the prior tree come back collapsed, so rebuilding after
/// an edit keeps the caller's collapse state. Identities collapsed in
/// the prior tree but absent from the new one are simply dropped.
pub fn project(value: &Value, prior: Option<&TreeNode>) -> TreeNode {
    let mut collapsed = HashSet::new();
    if let Some(prior_root) = prior {
        collect_collapsed(prior_root, &mut collapsed);
    }
    build(value, None, String::from("$"), &collapsed)
}

fn collect_collapsed<'a>(node: &'a TreeNode, into: &mut HashSet<&'a str>) {
    if node.collapsed {
        into.insert(node.identity.as_str());
    }
    for child in &node.children {
        collect_collapsed(child, into);
    }
}

fn build(
    value: &Value,
    key: Option<NodeKey>,
    identity: String,
    collapsed: &HashSet<&str>,
) -> TreeNode {
    let (kind, children) = match value {
        Value::Array(elements) => {
            let children = elements
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    build(child, Some(NodeKey::Index(i)), format!("{}[{}]", identity, i), collapsed)
                })
                .collect();
            (NodeKind::Array, children)
        }
        Value::Object(entries) => {
            let children = entries
                .iter()
                .map(|(k, child)| {
                    build(
                        child,
                        Some(NodeKey::Property(k.clone())),
                        format!("{}.{}", identity, k),
                        collapsed,
                    )
                })
                .collect();
            (NodeKind::Object, children)
        }
        _ => (NodeKind::Scalar, Vec::new()),
    };

    let mut node = TreeNode {
        key,
        kind,
        summary: summary::summarize(value),
        children,
        collapsed: false,
        identity,
    };
    node.collapsed = node.is_collapsible() && collapsed.contains(node.identity.as_str());
    node
}
