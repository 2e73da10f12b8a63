use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::engine::generation::ParticleField;

/// Quad corners in billboard space, scaled by the material's particle size.
const QUAD_CORNERS: [[f32; 2]; 4] = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]];

/// Two triangles per quad, counter-clockwise.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Build a mesh with four vertices per particle. Every vertex of a quad
/// carries the particle centre as its position, its corner in `UV_0` and the
/// particle colour.
pub fn build_particle_mesh(field: &ParticleField) -> Mesh {
    let vertex_count = field.len() * QUAD_CORNERS.len();
    let mut positions = Vec::with_capacity(vertex_count);
    let mut corners = Vec::with_capacity(vertex_count);
    let mut colours = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(field.len() * QUAD_INDICES.len());

    for (i, (position, colour)) in field.positions().iter().zip(field.colours()).enumerate() {
        let base = (i * QUAD_CORNERS.len()) as u32;
        for corner in QUAD_CORNERS {
            positions.push(*position);
            corners.push(corner);
            colours.push([colour[0], colour[1], colour[2], 1.0]);
        }
        indices.extend(QUAD_INDICES.iter().map(|index| base + index));
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
