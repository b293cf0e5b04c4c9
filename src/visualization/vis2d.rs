use std::collections::VecDeque;

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::log::LogPlugin;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use log::error;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct ClockText;

pub const SCALE: f32 = 200.0; // pixels per AU at zoom 1
pub const TRAIL_LEN: usize = 300; // positions kept per body
const SUN_RADIUS: f32 = 30.0;
const PLANET_RADIUS: f32 = 15.0;
const ZOOM_IN: f32 = 1.1;
const ZOOM_OUT: f32 = 0.9;

const PALETTE: [(f32, f32, f32); 6] = [
    (0.35, 0.55, 0.95),
    (0.85, 0.35, 0.30),
    (0.40, 0.80, 0.45),
    (0.75, 0.50, 0.85),
    (0.90, 0.65, 0.30),
    (0.45, 0.75, 0.80),
];

/// Simulation plane -> world pixels. +y in the simulation points down the screen.
pub fn to_screen(x: &NVec3) -> Vec2 {
    Vec2::new(x.x as f32 * SCALE, -(x.y as f32) * SCALE)
}

/// Projection scale after one zoom step, `zoom_in` makes bodies look bigger
pub fn zoom(scale: f32, zoom_in: bool) -> f32 {
    if zoom_in { scale / ZOOM_IN } else { scale / ZOOM_OUT }
}

/// Camera offset for one pan key, one grid cell (1 AU) per press
pub fn pan_step(key: KeyCode) -> Option<Vec2> {
    match key {
        KeyCode::Numpad4 => Some(Vec2::new(-SCALE, 0.0)),
        KeyCode::Numpad6 => Some(Vec2::new(SCALE, 0.0)),
        KeyCode::Numpad8 => Some(Vec2::new(0.0, SCALE)),
        KeyCode::Numpad2 => Some(Vec2::new(0.0, -SCALE)),
        _ => None,
    }
}

/// Last `TRAIL_LEN` screen positions of one body, oldest first
#[derive(Component, Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    pub color: Color,
}

impl Trail {
    pub fn new(color: Color) -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_LEN),
            color,
        }
    }

    pub fn push(&mut self, p: Vec2) {
        if self.points.len() == TRAIL_LEN {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.registry.len());

    App::new()
        .insert_resource(scenario)
        // logging goes through env_logger, set up in main
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_systems(Startup, (setup_bodies_system, setup_hud_system))
        .add_systems(
            Update,
            (keyboard_system, camera_system, physics_step_system, sync_transforms_system, trail_system, hud_system).chain(),
        )
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.registry.all().enumerate() {
        // first body is the sun
        let (radius, color) = if i == 0 {
            (SUN_RADIUS, Color::srgb(1.0, 1.0, 0.0))
        } else {
            let (r, g, b) = PALETTE[(i - 1) % PALETTE.len()];
            (PLANET_RADIUS, Color::srgb(r, g, b))
        };
        let p = to_screen(&body.position());

        // registry order decides the layer
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(p.x, p.y, i as f32),
                ..Default::default()
            },
            BodyIndex(i),
            Trail::new(color),
        ));
    }
}

fn setup_hud_system(mut commands: Commands) {
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 18.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..Default::default()
        }),
        ClockText,
    ));
}

// Main-row +/-/= pick the time scale, the numpad drives the camera
fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>) {
    let clock = &mut scenario.integrator.clock;

    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_pause();
    }
    if keys.just_pressed(KeyCode::Equal) {
        clock.faster();
    }
    if keys.just_pressed(KeyCode::Minus) {
        clock.slower();
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

fn camera_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut camera: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
    mut trails: Query<&mut Trail>,
) {
    let Ok((mut transform, mut projection)) = camera.get_single_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::NumpadAdd) {
        projection.scale = zoom(projection.scale, true);
    }
    if keys.just_pressed(KeyCode::NumpadSubtract) {
        projection.scale = zoom(projection.scale, false);
    }
    if keys.just_pressed(KeyCode::NumpadEnter) {
        projection.scale = 1.0;
    }

    for key in keys.get_just_pressed() {
        if let Some(offset) = pan_step(*key) {
            transform.translation += offset.extend(0.0);
        }
    }
    if keys.just_pressed(KeyCode::Numpad5) {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }

    // a re-centred view starts with fresh trails
    if keys.any_just_pressed([KeyCode::NumpadEnter, KeyCode::Numpad5]) {
        for mut trail in &mut trails {
            trail.clear();
        }
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    if let Err(e) = scenario.advance(time.delta_seconds_f64()) {
        // keep the window alive on a frozen state
        error!("step failed, pausing: {e}");
        scenario.integrator.clock.set_paused(true);
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform, &mut Trail)>) {
    let positions: Vec<_> = scenario.registry.all().map(|b| to_screen(&b.position())).collect();
    for (BodyIndex(i), mut transform, mut trail) in &mut query {
        if let Some(p) = positions.get(*i) {
            transform.translation.x = p.x;
            transform.translation.y = p.y;
            if !scenario.integrator.is_paused() {
                trail.push(*p);
            }
        }
    }
}

fn trail_system(mut gizmos: Gizmos, query: Query<&Trail>) {
    for trail in &query {
        if trail.len() > 1 {
            gizmos.linestrip_2d(trail.points(), trail.color);
        }
    }
}

fn hud_system(scenario: Res<Scenario>, diagnostics: Res<DiagnosticsStore>, mut query: Query<&mut Text, With<ClockText>>) {
    let clock = &scenario.integrator.clock;
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    for mut text in &mut query {
        text.sections[0].value = format!(
            "{} per second{}   FPS: {fps:5.1}\n[space] pause  [+/-] speed  [numpad +/-/enter] zoom  [numpad 2468/5] pan  [esc] quit",
            clock.scale_label(),
            if clock.is_paused() { " (paused)" } else { "" },
        );
    }
}
