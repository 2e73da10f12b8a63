use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use constants::render_settings::ParticleStyle;

const PARTICLE_SHADER: &str = "shaders/particle.wgsl";

/// Uniform block read by `particle.wgsl`.
#[derive(Debug, Clone, Copy, Default, PartialEq, ShaderType)]
pub struct ParticleSettings {
    pub tint: Vec4,
    pub size: f32,
    pub opacity: f32,
    /// Non-zero to use per-vertex colours instead of `tint`
    pub vertex_colours: u32,
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleMaterial {
    #[uniform(0)]
    pub settings: ParticleSettings,
}

impl From<&ParticleStyle> for ParticleMaterial {
    fn from(style: &ParticleStyle) -> Self {
        let [r, g, b] = style.tint;
        Self {
            settings: ParticleSettings {
                tint: Vec4::new(r, g, b, 1.0),
                size: style.size,
                opacity: style.opacity,
                vertex_colours: u32::from(style.vertex_colours),
            },
        }
    }
}

impl Material for ParticleMaterial {
    fn vertex_shader() -> ShaderRef {
        PARTICLE_SHADER.into()
    }

    fn fragment_shader() -> ShaderRef {
        PARTICLE_SHADER.into()
    }

    /// Overlapping particles add up their brightness.
    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(2),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(5),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Quads are turned towards the camera in the shader.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}
