//! Mesh and scene graph methods for `GltfBuilder`

use super::super::types::{GltfMesh, GltfNode, GltfScene};
use super::GltfBuilder;

impl GltfBuilder {
    /// Add a mesh. Returns the mesh index.
    pub fn add_mesh(&mut self, mesh: GltfMesh) -> usize {
        let mesh_idx = self.meshes.len();
        self.meshes.push(mesh);
        mesh_idx
    }

    /// Add a node. Returns the node index.
    pub fn add_node(&mut self, node: GltfNode) -> usize {
        let node_idx = self.nodes.len();
        self.nodes.push(node);
        node_idx
    }

    /// Add a scene. Returns the scene index.
    pub fn add_scene(&mut self, scene: GltfScene) -> usize {
        let scene_idx = self.scenes.len();
        self.scenes.push(scene);
        scene_idx
    }

    /// Nodes no other node lists as a child, in insertion order.
    pub(crate) fn root_nodes(&self) -> Vec<usize> {
        let is_child = |idx: usize| {
            self.nodes
                .iter()
                .filter_map(|n| n.children.as_deref())
                .any(|children| children.contains(&idx))
        };
        (0..self.nodes.len()).filter(|&i| !is_child(i)).collect()
    }
}
