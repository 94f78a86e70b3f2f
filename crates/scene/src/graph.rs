use glam::Mat4;
use handspace_common::{NodeId, Transform};
use std::collections::BTreeMap;
use tracing::debug;

/// Errors from scene graph lookups.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("no node matches selector {selector:?}")]
    SelectorNotFound { selector: String },
    #[error("node {id:?} no longer exists")]
    NodeNotFound { id: NodeId },
}

/// Per-node data stored in the graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub selector: String,
    pub transform: Transform,
}

/// A flat scene graph of named nodes with world-space transforms.
///
/// Externally owned and externally mutated; the input pipeline only reads it.
/// Selectors are unique node names (e.g. `player-left-controller`); resolving
/// one yields a typed [`NodeId`] handle that callers cache instead of
/// re-running string lookups every tick.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: BTreeMap<NodeId, Node>,
    selectors: BTreeMap<String, NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under a unique selector. Re-using a selector rebinds it
    /// to the new node.
    pub fn insert(&mut self, selector: impl Into<String>, transform: Transform) -> NodeId {
        let selector = selector.into();
        let id = NodeId::new();
        if self.selectors.insert(selector.clone(), id).is_some() {
            debug!(%selector, "selector rebound to new node");
        }
        self.nodes.insert(
            id,
            Node {
                selector,
                transform,
            },
        );
        id
    }

    /// Resolve a selector to its node handle.
    pub fn resolve(&self, selector: &str) -> Result<NodeId, SceneError> {
        self.selectors
            .get(selector)
            .copied()
            .ok_or_else(|| SceneError::SelectorNotFound {
                selector: selector.to_owned(),
            })
    }

    /// The node's world transform as a 4x4 matrix.
    pub fn world_transform(&self, id: NodeId) -> Result<Mat4, SceneError> {
        self.nodes
            .get(&id)
            .map(|node| node.transform.matrix())
            .ok_or(SceneError::NodeNotFound { id })
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Update a node's transform. Returns false if the node is gone.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) -> bool {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.transform = transform;
            true
        } else {
            false
        }
    }

    /// Remove a node. Returns the data if it existed.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let removed = self.nodes.remove(&id);
        if let Some(ref node) = removed {
            self.selectors.remove(&node.selector);
        }
        removed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only access to all nodes (BTreeMap for deterministic iteration).
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }
}
