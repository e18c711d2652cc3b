//! Vertex attribute methods for `GltfBuilder`

use glam::Vec3;

use super::super::enums::{AccessorType, BufferTarget, ComponentType};
use super::super::types::{AccessorBounds, GltfAccessor, GltfBufferView};
use super::{GltfBuilder, VERTEX_ALIGNMENT};

impl GltfBuilder {
    /// Append a `u16` index array. Returns the accessor index.
    pub fn add_indices(&mut self, indices: &[u16]) -> usize {
        self.align(ComponentType::UnsignedShort.size());
        let byte_offset = self.buffer.len();

        for &idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }

        let min = indices.iter().min().map(|&v| AccessorBounds::Integer(vec![i64::from(v)]));
        let max = indices.iter().max().map(|&v| AccessorBounds::Integer(vec![i64::from(v)]));

        let bv_idx = self.push_view(byte_offset, BufferTarget::ElementArrayBuffer);
        self.push_accessor(GltfAccessor {
            buffer_view: bv_idx,
            byte_offset: 0,
            accessor_type: AccessorType::Scalar,
            component_type: ComponentType::UnsignedShort,
            count: indices.len(),
            min,
            max,
        })
    }

    /// Append vertex positions. Returns the accessor index.
    ///
    /// The accessor carries the componentwise bounding box as `min`/`max`.
    pub fn add_positions(&mut self, positions: &[[f32; 3]]) -> usize {
        let byte_offset = self.write_vec3s(positions);

        let (min, max) = positions
            .iter()
            .map(|&p| Vec3::from_array(p))
            .fold(None, |bounds: Option<(Vec3, Vec3)>, p| {
                Some(bounds.map_or((p, p), |(lo, hi)| (lo.min(p), hi.max(p))))
            })
            .map_or((None, None), |(lo, hi)| {
                (
                    Some(AccessorBounds::Float(lo.to_array().to_vec())),
                    Some(AccessorBounds::Float(hi.to_array().to_vec())),
                )
            });

        let bv_idx = self.push_view(byte_offset, BufferTarget::ArrayBuffer);
        self.push_accessor(GltfAccessor {
            buffer_view: bv_idx,
            byte_offset: 0,
            accessor_type: AccessorType::Vec3,
            component_type: ComponentType::Float,
            count: positions.len(),
            min,
            max,
        })
    }

    /// Append vertex normals. Returns the accessor index.
    pub fn add_normals(&mut self, normals: &[[f32; 3]]) -> usize {
        let byte_offset = self.write_vec3s(normals);

        let bv_idx = self.push_view(byte_offset, BufferTarget::ArrayBuffer);
        self.push_accessor(GltfAccessor {
            buffer_view: bv_idx,
            byte_offset: 0,
            accessor_type: AccessorType::Vec3,
            component_type: ComponentType::Float,
            count: normals.len(),
            min: None,
            max: None,
        })
    }

    fn write_vec3s(&mut self, values: &[[f32; 3]]) -> usize {
        self.align(VERTEX_ALIGNMENT);
        let byte_offset = self.buffer.len();

        for v in values.iter().flatten() {
            self.buffer.extend_from_slice(&v.to_le_bytes());
        }

        byte_offset
    }

    /// Close the section that started at `byte_offset` with a buffer view.
    fn push_view(&mut self, byte_offset: usize, target: BufferTarget) -> usize {
        let byte_length = self.buffer.len() - byte_offset;
        tracing::debug!(
            "Buffer view {}: offset {}, length {} ({:?})",
            self.buffer_views.len(),
            byte_offset,
            byte_length,
            target
        );

        let bv_idx = self.buffer_views.len();
        self.buffer_views.push(GltfBufferView {
            buffer: 0,
            byte_offset,
            byte_length,
            target,
            byte_stride: None,
        });
        bv_idx
    }

    fn push_accessor(&mut self, accessor: GltfAccessor) -> usize {
        let acc_idx = self.accessors.len();
        self.accessors.push(accessor);
        acc_idx
    }
}
