use std::path::PathBuf;

use bevy::{
    color::palettes::css,
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    time::common_conditions::on_timer,
};
use clap::Parser;
use kakeya::{
    config::sweep::SweepSetup,
    geometry::{line_segment::LineSegment, Bounds},
    motion::{schedule::FrameCursor, slide::SlidePhase, Sweep, SweepFrame},
    view::{
        common::{
            self, add_camera, draw_grid, draw_indicator, draw_segment, needle_gizmo_config,
            spawn_label, spawn_panel_title, spawn_triangle, NeedleGizmos, LABEL_FONT_SIZE,
            TITLE_FONT_SIZE,
        },
        panel::{grid_cells, PanelFrame},
    },
};
use log::{debug, error, info};
use nalgebra::Point2;

const ROTATION_BOUNDS: Bounds = Bounds::new((-1.2, 1.2), (-1.2, 1.2));
const SLIDE_BOUNDS: Bounds = Bounds::new((-0.1, 1.1), (-0.1, 1.0));
const HEADER_HEIGHT: f32 = 60.0;
const FOOTER_HEIGHT: f32 = 90.0;

// Resources.

#[derive(Resource)]
struct SweepRes(pub Sweep);

#[derive(Resource)]
struct FrameCursorRes(pub FrameCursor);

// The artifacts of the most recent frame. Replaced wholesale on every tick.
#[derive(Resource, Default)]
struct CurrentFrame(pub Option<SweepFrame>);

#[derive(Resource)]
struct SweepPanels {
    pub window: Vec2,
    pub rotation: PanelFrame,
    pub slide: PanelFrame,
}

impl SweepPanels {
    fn layout(window: Vec2) -> Self {
        let area = Rect::new(
            -window.x / 2.0,
            -window.y / 2.0 + FOOTER_HEIGHT,
            window.x / 2.0,
            window.y / 2.0 - HEADER_HEIGHT,
        );
        let cells = grid_cells(area, 2, 1, 30.0);
        SweepPanels {
            window,
            rotation: PanelFrame::fit(ROTATION_BOUNDS, cells[0]),
            slide: PanelFrame::fit(SLIDE_BOUNDS, cells[1]),
        }
    }
}

// / Resources.

fn add_sweep_scene(
    mut commands: Commands,
    sweep: Res<SweepRes>,
    panels: Res<SweepPanels>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let sweep = &sweep.0;

    // Rotation panel: the swept disk and its pivot.
    let rot = &panels.rotation;
    let pivot = rot.transformed_point(&sweep.rotation.pivot);
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(rot.transform_coord(sweep.rotation.needle_length)))),
        MeshMaterial2d(materials.add(Color::from(css::BLUE).with_alpha(0.2))),
        Transform::from_translation(pivot.extend(0.0)),
    ));
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(rot.transform_coord(0.03)))),
        MeshMaterial2d(materials.add(Color::BLACK)),
        Transform::from_translation(pivot.extend(0.5)),
    ));
    spawn_panel_title(&mut commands, rot, "Method 1: Rotate 360° around an endpoint");
    spawn_label(
        &mut commands,
        format!(
            "Swept Area = π×{}² ≈ {:.3}",
            sweep.rotation.needle_length,
            sweep.rotation.swept_area()
        ),
        rot.transformed_point(&Point2::new(0.0, -1.1)),
        LABEL_FONT_SIZE,
    );

    // Slide panel: the swept triangle and its labelled vertices.
    let sl = &panels.slide;
    let triangle = &sweep.slide.triangle;
    spawn_triangle(
        &mut commands,
        &mut meshes,
        &mut materials,
        sl,
        triangle,
        Color::from(css::GREEN).with_alpha(0.2),
    );
    let vertex_mesh = meshes.add(Circle::new(4.0));
    let vertex_material = materials.add(Color::from(css::BLUE).with_alpha(0.7));
    let labels = [
        ("A", Vec2::new(-10.0, 10.0)),
        ("B", Vec2::new(10.0, 10.0)),
        ("C", Vec2::new(0.0, 14.0)),
    ];
    for (v, (name, offset)) in triangle.vertices.iter().zip(labels) {
        let p = sl.transformed_point(v);
        commands.spawn((
            Mesh2d(vertex_mesh.clone()),
            MeshMaterial2d(vertex_material.clone()),
            Transform::from_translation(p.extend(0.5)),
        ));
        spawn_label(&mut commands, name, p + offset, LABEL_FONT_SIZE);
    }
    spawn_panel_title(&mut commands, sl, "Method 2: Sliding inside an equilateral triangle");
    let [_, b, _] = triangle.vertices;
    spawn_label(
        &mut commands,
        format!("Swept Area ≈ {:.3}", sweep.slide.swept_area()),
        sl.transformed_point(&Point2::new(b.x / 2.0, -0.08)),
        LABEL_FONT_SIZE,
    );

    let (w, h) = (panels.window.x, panels.window.y);
    spawn_label(
        &mut commands,
        "Kakeya Conjecture: Two Methods of Needle Rotation",
        Vec2::new(0.0, h / 2.0 - HEADER_HEIGHT / 2.0),
        TITLE_FONT_SIZE + 4.0,
    );
    spawn_label(
        &mut commands,
        format!(
            "Left: Rotating needle 360° around an endpoint sweeps a full disk with area π ≈ {:.3}\n\
             Right: Sliding needle inside an equilateral triangle (A→C→B→A) sweeps only the triangle with area ≈ {:.3}\n\
             Conclusion: The triangle method achieves needle reversal with much smaller swept area",
            sweep.rotation.swept_area(),
            sweep.slide.swept_area(),
        ),
        Vec2::new(0.0, -h / 2.0 + FOOTER_HEIGHT / 2.0),
        LABEL_FONT_SIZE,
    );
    debug!("Scene laid out for a {}x{} window", w, h);
}

fn advance_frame(
    sweep: Res<SweepRes>,
    mut cursor: ResMut<FrameCursorRes>,
    mut current: ResMut<CurrentFrame>,
) {
    let Some(frame) = cursor.0.next_frame() else {
        return;
    };
    // Nothing to discard before the first frame.
    if current.0.replace(sweep.0.update(frame)).is_none() {
        debug!("Drew first frame, {}", frame);
    }
}

fn draw_needles(
    mut gizmos: Gizmos,
    mut needle_gizmos: Gizmos<NeedleGizmos>,
    sweep: Res<SweepRes>,
    panels: Res<SweepPanels>,
    current: Res<CurrentFrame>,
) {
    draw_grid(&mut gizmos, &panels.rotation, 0.5);
    draw_grid(&mut gizmos, &panels.slide, 0.2);

    // Starting positions, for reference.
    let sweep = &sweep.0;
    let initial_color = Color::from(css::RED).with_alpha(0.35);
    draw_segment(
        &mut needle_gizmos,
        &panels.rotation,
        &sweep.rotation.needle(0),
        initial_color,
    );
    let [a, b, _] = sweep.slide.triangle.vertices;
    draw_segment(
        &mut needle_gizmos,
        &panels.slide,
        &LineSegment::new(a, b),
        initial_color,
    );

    let Some(frame) = &current.0 else {
        return;
    };
    for (panel, needle_frame, tip) in [
        (&panels.rotation, &frame.rotation, 0.08),
        (&panels.slide, &frame.slide, 0.05),
    ] {
        draw_segment(&mut needle_gizmos, panel, &needle_frame.needle, css::RED);
        draw_indicator(&mut gizmos, panel, &needle_frame.indicator, tip, css::DARK_RED);
    }
}

fn print_phase_table(sweep: &Sweep) {
    println!("\nSlide phase boundaries:");
    for phase in SlidePhase::ALL {
        let frame = phase.index() * sweep.slide.frames_per_phase;
        let needle = sweep.slide.needle(frame);
        println!(
            "  {:?} (frame {}): start=({:.3}, {:.3}) end=({:.3}, {:.3})",
            phase, frame, needle.start.x, needle.start.y, needle.end.x, needle.end.y
        );
    }
    println!("\nTriangle/disk area ratio: {:.3}", sweep.area_ratio());
}

#[derive(Debug, clap::Parser)]
#[command(
    name = "needle_sweep",
    about = "Animate two ways of turning a unit needle around..."
)]
struct SweepCli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[arg(short = 'w', long = "window-size", default_value = "1400.0")]
    pub window_size: f32,

    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u64>,

    // Print the setup and exit without opening a window.
    #[arg(long = "print")]
    pub print: bool,
}

fn main() {
    env_logger::init();
    let args = SweepCli::parse();

    let mut setup = match &args.config {
        Some(path) => match SweepSetup::parse(path) {
            Ok(setup) => setup,
            Err(e) => {
                error!("Could not load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SweepSetup::default(),
    };
    if let Some(interval_ms) = args.interval_ms {
        setup.schedule.interval_ms = interval_ms;
        if let Err(e) = setup.validate() {
            error!("{}", e);
            std::process::exit(1);
        }
    }

    setup.print();
    let sweep = Sweep::new(&setup);

    if args.print {
        print_phase_table(&sweep);
        return;
    }

    let window_size = Vec2::new(args.window_size, args.window_size / 2.0);
    info!(
        "Animating {} frames every {} ms",
        setup.schedule.len(),
        setup.schedule.interval_ms
    );

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Kakeya needle sweep".to_string(),
                        resolution: (window_size.x, window_size.y).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                }),
        )
        .add_plugins((LogDiagnosticsPlugin::default(), FrameTimeDiagnosticsPlugin))
        .insert_gizmo_config(NeedleGizmos, needle_gizmo_config())
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(SweepPanels::layout(window_size))
        .insert_resource(SweepRes(sweep))
        .insert_resource(FrameCursorRes(FrameCursor::new(setup.schedule.clone())))
        .init_resource::<CurrentFrame>()
        .add_systems(Startup, (add_camera, add_sweep_scene))
        .add_systems(
            Update,
            (
                advance_frame.run_if(on_timer(setup.schedule.interval())),
                draw_needles,
                common::close_on_esc,
            ),
        )
        .run();

    info!("Done!");
}
