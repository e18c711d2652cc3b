//! Core glTF 2.0 structure types.
//!
//! Optional fields are plain `Option`s; `None` serializes as `null` and is
//! pruned from the emitted tree by [`super::serialize`].

use serde::Serialize;

use super::enums::{AccessorType, BufferTarget, ComponentType, Mode};

/// Asset metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfAsset {
    pub version: String,
}

/// Binary buffer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfBuffer {
    #[serde(rename = "byteLength")]
    pub byte_length: usize,
    pub uri: String,
}

/// Buffer view (slice of a buffer)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfBufferView {
    pub buffer: usize,
    #[serde(rename = "byteOffset")]
    pub byte_offset: usize,
    #[serde(rename = "byteLength")]
    pub byte_length: usize,
    pub target: BufferTarget,
    #[serde(rename = "byteStride")]
    pub byte_stride: Option<usize>,
}

impl GltfBufferView {
    /// One past the last byte of the buffer this view covers, or `None` if
    /// that position is not representable.
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        self.byte_offset.checked_add(self.byte_length)
    }
}

/// Per-component `min`/`max` of an accessor.
///
/// Integer component types carry whole numbers so they serialize as `2`,
/// not `2.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AccessorBounds {
    Integer(Vec<i64>),
    Float(Vec<f32>),
}

/// Accessor for typed buffer data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfAccessor {
    #[serde(rename = "bufferView")]
    pub buffer_view: usize,
    #[serde(rename = "byteOffset")]
    pub byte_offset: usize,
    #[serde(rename = "type")]
    pub accessor_type: AccessorType,
    #[serde(rename = "componentType")]
    pub component_type: ComponentType,
    pub count: usize,
    pub min: Option<AccessorBounds>,
    pub max: Option<AccessorBounds>,
}

impl GltfAccessor {
    /// Size of one tightly packed element in bytes.
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.accessor_type.component_count() * self.component_type.size()
    }
}

/// Named vertex channels of a primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GltfAttributes {
    #[serde(rename = "POSITION")]
    pub position: usize,
    #[serde(rename = "NORMAL")]
    pub normal: Option<usize>,
}

/// Mesh primitive (one drawable unit)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GltfPrimitive {
    pub attributes: GltfAttributes,
    pub indices: Option<usize>,
    pub mode: Mode,
}

impl GltfPrimitive {
    /// Indexed triangle list over the given position accessor.
    #[must_use]
    pub fn triangles(position: usize, indices: Option<usize>) -> Self {
        Self {
            attributes: GltfAttributes {
                position,
                normal: None,
            },
            indices,
            mode: Mode::Triangles,
        }
    }

    /// Every accessor index this primitive references.
    pub fn accessor_refs(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.attributes.position)
            .chain(self.attributes.normal)
            .chain(self.indices)
    }
}

/// Mesh definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GltfMesh {
    pub primitives: Vec<GltfPrimitive>,
    pub name: Option<String>,
}

/// Node in the scene graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfNode {
    pub mesh: usize,
    pub children: Option<Vec<usize>>,
    pub translation: [f32; 3],
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl GltfNode {
    /// Node holding `mesh` with an identity transform.
    #[must_use]
    pub fn new(mesh: usize) -> Self {
        Self {
            mesh,
            children: None,
            translation: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

/// Scene definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GltfScene {
    pub nodes: Vec<usize>,
}

/// Complete glTF document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfDocument {
    pub asset: GltfAsset,
    pub scene: usize,
    pub scenes: Vec<GltfScene>,
    pub nodes: Vec<GltfNode>,
    pub meshes: Vec<GltfMesh>,
    pub buffers: Vec<GltfBuffer>,
    #[serde(rename = "bufferViews")]
    pub buffer_views: Vec<GltfBufferView>,
    pub accessors: Vec<GltfAccessor>,
}
