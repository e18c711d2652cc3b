//! Fixed triangle export.
//!
//! Produces a self-contained glTF 2.0 document for a single indexed triangle,
//! whatever the caller passes in.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::gltf::{GltfBuilder, GltfDocument, GltfMesh, GltfNode, GltfPrimitive, GltfScene};

/// Triangle corners, counter-clockwise in the XY plane.
pub const TRIANGLE_POSITIONS: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

/// Triangle indices.
///
/// The packed index section is followed by one zero `u16` of padding so the
/// positions start at byte 8.
pub const TRIANGLE_INDICES: [u16; 3] = [0, 1, 2];

/// Assemble the triangle document.
#[must_use]
pub fn triangle_document() -> GltfDocument {
    let mut builder = GltfBuilder::new();

    let indices = builder.add_indices(&TRIANGLE_INDICES);
    let positions = builder.add_positions(&TRIANGLE_POSITIONS);

    let mesh = builder.add_mesh(GltfMesh {
        primitives: vec![GltfPrimitive::triangles(positions, Some(indices))],
        name: None,
    });
    let node = builder.add_node(GltfNode::new(mesh));
    builder.add_scene(GltfScene { nodes: vec![node] });

    builder.build_document()
}

/// Export the triangle as an embedded glTF JSON string.
///
/// `export_list` is accepted for call-site compatibility with model exporters
/// and is not read.
///
/// # Panics
/// Panics if the assembled document fails validation or serialization. Both
/// indicate a defect in the builder, not a runtime condition.
pub fn export_to_gltf<T>(export_list: &[T]) -> String {
    tracing::debug!("Exporting fixed triangle ({} objects ignored)", export_list.len());

    let doc = triangle_document();
    if let Err(e) = doc.validate() {
        tracing::error!("Triangle document is inconsistent: {e}");
        panic!("triangle document violates glTF invariants: {e}");
    }

    match doc.to_json() {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Triangle document failed to serialize: {e}");
            panic!("triangle document failed to serialize: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gltf::{AccessorBounds, AccessorType, BufferTarget, ComponentType, Mode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_triangle_layout() {
        let doc = triangle_document();

        assert_eq!(doc.buffers.len(), 1);
        assert_eq!(doc.buffers[0].byte_length, 44);

        let views: Vec<_> = doc
            .buffer_views
            .iter()
            .map(|v| (v.buffer, v.byte_offset, v.byte_length, v.target))
            .collect();
        assert_eq!(views, vec![
            (0, 0, 6, BufferTarget::ElementArrayBuffer),
            (0, 8, 36, BufferTarget::ArrayBuffer),
        ]);

        let index_acc = &doc.accessors[0];
        assert_eq!(index_acc.accessor_type, AccessorType::Scalar);
        assert_eq!(index_acc.component_type, ComponentType::UnsignedShort);
        assert_eq!(index_acc.count, 3);
        assert_eq!(index_acc.min, Some(AccessorBounds::Integer(vec![0])));
        assert_eq!(index_acc.max, Some(AccessorBounds::Integer(vec![2])));

        let pos_acc = &doc.accessors[1];
        assert_eq!(pos_acc.accessor_type, AccessorType::Vec3);
        assert_eq!(pos_acc.component_type, ComponentType::Float);
        assert_eq!(pos_acc.min, Some(AccessorBounds::Float(vec![0.0, 0.0, 0.0])));
        assert_eq!(pos_acc.max, Some(AccessorBounds::Float(vec![1.0, 1.0, 0.0])));
    }

    #[test]
    fn test_triangle_graph() {
        let doc = triangle_document();
        let prim = &doc.meshes[0].primitives[0];

        assert_eq!(prim.attributes.position, 1);
        assert_eq!(prim.attributes.normal, None);
        assert_eq!(prim.indices, Some(0));
        assert_eq!(prim.mode, Mode::Triangles);
        assert_eq!(doc.nodes, vec![GltfNode::new(0)]);
        assert_eq!(doc.scenes, vec![GltfScene { nodes: vec![0] }]);
        assert_eq!(doc.scene, 0);
    }

    #[test]
    fn test_export_ignores_input() {
        assert_eq!(export_to_gltf::<()>(&[]), export_to_gltf(&["Body", "Pad"]));
    }
}
