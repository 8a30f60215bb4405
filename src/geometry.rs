use std::f32::consts::PI;

use glam::Vec3;

use crate::types::Vertex;

/// Indexed triangle list
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Upper bound on sphere segments along either axis
pub const MAX_SPHERE_SEGMENTS: u32 = 1024;

/// UV sphere centred on the origin.
///
/// Poles lie on the Y axis; the seam sits on -X. Triangles wind
/// counter-clockwise seen from outside.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let width_segments = width_segments.clamp(3, MAX_SPHERE_SEGMENTS);
    let height_segments = height_segments.clamp(2, MAX_SPHERE_SEGMENTS);
    let row = width_segments + 1;

    let mut vertices = Vec::with_capacity((row * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let dir = Vec3::new(
                -(u * 2.0 * PI).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * 2.0 * PI).sin() * (v * PI).sin(),
            );
            vertices.push(Vertex {
                position: (dir * radius).to_array(),
                normal: dir.normalize_or_zero().to_array(),
                uv: [u, 1.0 - v],
            });
        }
    }

    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // The pole rows collapse to a single triangle per quad
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Single-quad plane in the XY plane facing +Z
pub fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let corner = |x: f32, y: f32, u: f32, v: f32| Vertex {
        position: [x, y, 0.0],
        normal: [0.0, 0.0, 1.0],
        uv: [u, v],
    };

    MeshData {
        vertices: vec![
            corner(-hw, hh, 0.0, 1.0),
            corner(hw, hh, 1.0, 1.0),
            corner(-hw, -hh, 0.0, 0.0),
            corner(hw, -hh, 1.0, 0.0),
        ],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}
