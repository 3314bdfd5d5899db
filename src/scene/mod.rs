//! Minimal transform hierarchy that pointer rays are cast against.
//!
//! The scene stores named nodes in insertion order. A node's parent is
//! always inserted before the node itself, so one forward pass over the
//! node list refreshes every world matrix. Nodes may carry a local-space
//! box collider (what rays hit) and an external link (what a click opens).
//! The link of a group node applies to every collider beneath it.

pub mod link;
mod ray;

use glam::{Mat4, Vec2};
use rustc_hash::FxHashMap;

pub use ray::{Aabb, Ray};

use crate::camera::Camera;

/// Handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Index of the node in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node of the hierarchy.
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    parent: Option<NodeId>,
    local: Mat4,
    world: Mat4,
    collider: Option<Aabb>,
    link: Option<String>,
}

impl SceneNode {
    /// Node name (unique within its scene).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Transform relative to the parent.
    #[must_use]
    pub fn local_transform(&self) -> Mat4 {
        self.local
    }

    /// Cached world transform as of the last
    /// [`Scene::update_world_matrices`].
    #[must_use]
    pub fn world_transform(&self) -> Mat4 {
        self.world
    }

    /// Local-space collider, if this node can be hit.
    #[must_use]
    pub fn collider(&self) -> Option<&Aabb> {
        self.collider.as_ref()
    }

    /// Raw link as attached, without validation.
    #[must_use]
    pub fn raw_link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

/// One ray/collider intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Node whose collider was hit.
    pub node: NodeId,
    /// World-space distance from the ray origin.
    pub distance: f32,
}

/// Ray-casting capability the pointer controller depends on.
pub trait Raycaster {
    /// Cast a ray from the camera through normalized device coordinates and
    /// return every hit, nearest first.
    fn cast_from_ndc(&self, ndc: Vec2, camera: &Camera) -> Vec<RayHit>;

    /// The node itself or its nearest ancestor carrying a well-formed link.
    fn interactive_ancestor(&self, node: NodeId) -> Option<NodeId>;

    /// The well-formed link attached directly to `node`.
    fn link(&self, node: NodeId) -> Option<&str>;
}

/// Flat, insertion-ordered node storage with name lookup.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    by_name: FxHashMap<String, NodeId>,
    dirty: bool,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node without a collider. A name that is already taken is
    /// re-pointed at the new node.
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        local: Mat4,
    ) -> NodeId {
        self.push(name.into(), parent, local, None)
    }

    /// Add a node with a local-space box collider.
    pub fn add_box(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        local: Mat4,
        collider: Aabb,
    ) -> NodeId {
        self.push(name.into(), parent, local, Some(collider))
    }

    fn push(
        &mut self,
        name: String,
        parent: Option<NodeId>,
        local: Mat4,
        collider: Option<Aabb>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        // Unknown parents are dropped so the forward world pass stays valid
        let parent = parent.filter(|p| p.index() < self.nodes.len());
        let _ = self.by_name.insert(name.clone(), id);
        self.nodes.push(SceneNode {
            name,
            parent,
            local,
            world: local,
            collider,
            link: None,
        });
        self.dirty = true;
        id
    }

    /// Attach (or replace) the external link on a node.
    pub fn set_link(&mut self, id: NodeId, url: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.link = Some(url.into());
        }
    }

    /// Remove the external link from a node.
    pub fn clear_link(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.link = None;
        }
    }

    /// Replace a node's local transform.
    pub fn set_transform(&mut self, id: NodeId, local: Mat4) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.local = local;
            self.dirty = true;
        }
    }

    /// Look up a node by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Whether any transform changed since the last world-matrix update.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recompute cached world matrices if any transform changed.
    pub fn update_world_matrices(&mut self) {
        if !self.dirty {
            return;
        }
        for i in 0..self.nodes.len() {
            let parent_world = self.nodes[i]
                .parent
                .map_or(Mat4::IDENTITY, |p| self.nodes[p.index()].world);
            self.nodes[i].world = parent_world * self.nodes[i].local;
        }
        self.dirty = false;
    }

    /// Cast `ray` against every collider, nearest hit first.
    #[must_use]
    pub fn cast_ray(&self, ray: &Ray) -> Vec<RayHit> {
        if self.dirty {
            log::debug!("ray cast against stale world matrices");
        }
        let mut hits: Vec<RayHit> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| {
                let aabb = node.collider.as_ref()?;
                let distance =
                    ray.intersect_transformed_aabb(aabb, &node.world)?;
                Some(RayHit {
                    node: NodeId(i as u32),
                    distance,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

impl Raycaster for Scene {
    fn cast_from_ndc(&self, ndc: Vec2, camera: &Camera) -> Vec<RayHit> {
        camera
            .ray_from_ndc(ndc)
            .map_or_else(Vec::new, |ray| self.cast_ray(&ray))
    }

    fn interactive_ancestor(&self, node: NodeId) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.link(id).is_some() {
                return Some(id);
            }
            current = self.node(id)?.parent;
        }
        None
    }

    fn link(&self, node: NodeId) -> Option<&str> {
        let raw = self.node(node)?.link.as_deref()?;
        if link::is_well_formed(raw) {
            Some(raw)
        } else {
            log::debug!("ignoring malformed link {raw:?} on node {node:?}");
            None
        }
    }
}
