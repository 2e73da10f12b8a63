use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use bevy::window::PrimaryWindow;
use constants::cosmic::{
    COSMIC_CAMERA_DISTANCE, SPIRAL_COLOUR, SPIRAL_SPIN_RATE, STARFIELD_COLOUR,
    STARFIELD_HALF_WIDTH, STARFIELD_SPIN_RATE, STARFIELD_STARS,
};
use constants::galaxy::GALAXY_SPIN_RATE;
use constants::render_settings::{
    COSMIC_SPIRAL_STYLE, GALAXY_STYLE, ParticleStyle, STARFIELD_STYLE,
};

use crate::engine::animation::fly_through::{FlyThrough, FlyThroughCamera};
use crate::engine::animation::spin::ParticleSpin;
use crate::engine::camera::scene_camera::spawn_scene_camera;
use crate::engine::core::window_config::create_cosmic_window;
use crate::engine::generation::{
    ArmSpiralParams, ParticleField, SpiralGalaxyParams, arm_spiral, spiral_galaxy, starfield,
};
use crate::engine::mesh::particle_mesh::build_particle_mesh;
use crate::engine::render::particle_material::ParticleMaterial;

use super::scene_id::SceneId;
use super::surfaces::RenderSurfaces;

/// Spawn both scenes: the galaxy into the primary window, the cosmic
/// backdrop into a second window. The scenes share no entities.
pub fn build_scenes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ParticleMaterial>>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
    fly_through: Res<FlyThrough>,
    surfaces: Res<RenderSurfaces>,
) {
    let Ok(galaxy_window) = primary_window.single() else {
        warn!("No primary window, galaxy intro not built");
        return;
    };
    commands.entity(galaxy_window).insert(SceneId::Galaxy);
    let mut cosmic = create_cosmic_window();
    surfaces.bind(SceneId::Cosmic, &mut cosmic);
    let cosmic_window = commands.spawn((cosmic, SceneId::Cosmic)).id();

    let mut rng = rand::thread_rng();

    // Galaxy intro
    let galaxy_camera = spawn_scene_camera(
        &mut commands,
        SceneId::Galaxy,
        galaxy_window,
        fly_through.distance,
    );
    commands.entity(galaxy_camera).insert(FlyThroughCamera);

    let galaxy = spiral_galaxy(&SpiralGalaxyParams::default(), &mut rng);
    let mut particles = ParticleBatch {
        commands: &mut commands,
        meshes: &mut *meshes,
        materials: &mut *materials,
    };
    particles.spawn(SceneId::Galaxy, &galaxy, &GALAXY_STYLE, GALAXY_SPIN_RATE);

    // Cosmic backdrop
    let stars = starfield(
        STARFIELD_STARS,
        STARFIELD_HALF_WIDTH,
        STARFIELD_COLOUR,
        &mut rng,
    );
    let spiral = arm_spiral(&ArmSpiralParams::default(), SPIRAL_COLOUR, &mut rng);
    particles.spawn(SceneId::Cosmic, &stars, &STARFIELD_STYLE, STARFIELD_SPIN_RATE);
    particles.spawn(
        SceneId::Cosmic,
        &spiral,
        &COSMIC_SPIRAL_STYLE,
        SPIRAL_SPIN_RATE,
    );
    spawn_scene_camera(
        &mut commands,
        SceneId::Cosmic,
        cosmic_window,
        COSMIC_CAMERA_DISTANCE,
    );

    info!(
        "Scenes built: galaxy {} stars, cosmic {} stars + {} spiral",
        galaxy.len(),
        stars.len(),
        spiral.len()
    );
}

/// Borrowed asset stores for spawning several particle objects in a row.
struct ParticleBatch<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<ParticleMaterial>,
}

impl ParticleBatch<'_, '_, '_> {
    fn spawn(&mut self, scene: SceneId, field: &ParticleField, style: &ParticleStyle, spin: Vec3) {
        self.commands.spawn((
            Mesh3d(self.meshes.add(build_particle_mesh(field))),
            MeshMaterial3d(self.materials.add(ParticleMaterial::from(style))),
            Transform::IDENTITY,
            Visibility::Visible,
            ParticleSpin::new(spin),
            scene.render_layers(),
            scene,
            // Billboards reach past the mesh bounds.
            NoFrustumCulling,
        ));
    }
}
