use bevy::app::AppExit;
use bevy::log::info;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::WindowResolution;

use crate::simulation::integrator::euler_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::trajectory::Trajectory;
use crate::visualization::framebuffer::{FrameBuffer, Rgb};

/// Seconds per simulation tick (~100 Hz)
const TICK_SECONDS: f64 = 0.01;

const COLOR_BACKGROUND: Rgb = 0x1b1b1b;
const COLOR_BODY: Rgb = 0xffffff;
const COLOR_TRAJECTORY_A: Rgb = 0x4cff42;
const COLOR_TRAJECTORY_B: Rgb = 0xff1430;

/// Trail history for both bodies
#[derive(Resource)]
struct Trails {
    a: Trajectory,
    b: Trajectory,
}

/// The CPU pixel buffer every frame is composed into
#[derive(Resource)]
struct Frame(FrameBuffer);

/// Handle of the window-sized image the frame buffer is presented through
#[derive(Resource)]
struct Surface(Handle<Image>);

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy viewer, {}x{} surface", scenario.bounds.width, scenario.bounds.height);

    let width = scenario.bounds.width as u32;
    let height = scenario.bounds.height as u32;
    let trails = Trails {
        a: Trajectory::new(scenario.parameters.trajectory_len),
        b: Trajectory::new(scenario.parameters.trajectory_len),
    };
    let frame = Frame(FrameBuffer::new(width as usize, height as usize));

    App::new()
        .insert_resource(scenario)
        .insert_resource(trails)
        .insert_resource(frame)
        .insert_resource(Time::<Fixed>::from_seconds(TICK_SECONDS))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbiting Planets".into(),
                resolution: WindowResolution::new(width as f32, height as f32),
                decorations: false,
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_surface_system)
        .add_systems(
            FixedUpdate,
            (
                draw_frame_system,
                physics_step_system,
                record_trails_system,
                present_surface_system,
            )
                .chain(),
        )
        .add_systems(Update, quit_system)
        .run();
}

/// Startup system: spawn the camera and the window-sized sprite the frame
/// buffer is blitted onto
fn setup_surface_system(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    scenario: Res<Scenario>,
) {
    commands.spawn(Camera2dBundle::default());

    let width = scenario.bounds.width as u32;
    let height = scenario.bounds.height as u32;
    let image = Image::new_fill(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0x1b, 0x1b, 0x1b, 0xff],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    let handle = images.add(image);

    commands.spawn(SpriteBundle {
        texture: handle.clone(),
        ..Default::default()
    });
    commands.insert_resource(Surface(handle));

    info!("surface ready, {}x{}", width, height);
}

/// Compose the frame: background, both trails, then both bodies. Runs
/// before the physics step on purpose, so the bodies are drawn at the
/// previous step's positions while the trail already holds the post-step
/// ones; the one-step visual lag is deliberate
fn draw_frame_system(mut frame: ResMut<Frame>, scenario: Res<Scenario>, trails: Res<Trails>) {
    let fb = &mut frame.0;
    let dot_radius = scenario.parameters.trajectory_width;

    fb.clear(COLOR_BACKGROUND);
    fb.fill_trajectory(&trails.a, dot_radius, COLOR_TRAJECTORY_A);
    fb.fill_trajectory(&trails.b, dot_radius, COLOR_TRAJECTORY_B);
    fb.fill_circle(scenario.system.a.x, scenario.system.a.radius, COLOR_BODY);
    fb.fill_circle(scenario.system.b.x, scenario.system.b.radius, COLOR_BODY);
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        bounds,
        kicks,
    } = &mut *scenario;

    euler_step(system, kicks, parameters, bounds);
}

fn record_trails_system(scenario: Res<Scenario>, mut trails: ResMut<Trails>) {
    trails.a.push(&scenario.system.a);
    trails.b.push(&scenario.system.b);
}

/// Copy the composed frame into the surface texture; Bevy re-uploads the
/// image on mutation and presents it with the next render pass
fn present_surface_system(
    frame: Res<Frame>,
    surface: Res<Surface>,
    mut images: ResMut<Assets<Image>>,
) {
    if let Some(image) = images.get_mut(&surface.0) {
        frame.0.write_rgba(&mut image.data);
    }
}

/// Space quits; closing the window is handled by the window plugin
fn quit_system(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Space) {
        exit.send(AppExit);
    }
}
