use std::path::PathBuf;

use bevy::{color::palettes::css, prelude::*};
use clap::Parser;
use kakeya::{
    config::construction::ConstructionSetup,
    construction::{besicovitch_steps, Panel, CAPTION_HEIGHT, PANEL_BOUNDS},
    view::{
        common::{
            self, add_camera, draw_grid, draw_segment, spawn_label, spawn_panel_title,
            spawn_triangle, tint_color, LABEL_FONT_SIZE, TITLE_FONT_SIZE,
        },
        panel::{grid_cells, PanelFrame},
    },
};
use log::{error, info};
use nalgebra::Point2;

const N_COLS: usize = 3;
const N_ROWS: usize = 2;
const HEADER_HEIGHT: f32 = 50.0;
const FOOTER_HEIGHT: f32 = 80.0;
const POINT_RADIUS: f32 = 1.5;

#[derive(Resource)]
struct Panels(pub Vec<(PanelFrame, Panel)>);

#[derive(Resource)]
struct WindowSize(pub Vec2);

fn layout(panels: Vec<Panel>, window: Vec2) -> Vec<(PanelFrame, Panel)> {
    let area = Rect::new(
        -window.x / 2.0,
        -window.y / 2.0 + FOOTER_HEIGHT,
        window.x / 2.0,
        window.y / 2.0 - HEADER_HEIGHT,
    );
    grid_cells(area, N_COLS, N_ROWS, 30.0)
        .into_iter()
        .zip(panels)
        .map(|(cell, panel)| (PanelFrame::fit(PANEL_BOUNDS, cell), panel))
        .collect()
}

fn add_panels(
    mut commands: Commands,
    panels: Res<Panels>,
    window: Res<WindowSize>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Every point of the limit cloud shares one mesh and material.
    let point_mesh = meshes.add(Circle::new(POINT_RADIUS));
    let point_material = materials.add(Color::from(css::BLUE).with_alpha(0.3));

    for (frame, panel) in panels.0.iter() {
        for piece in &panel.pieces {
            spawn_triangle(
                &mut commands,
                &mut meshes,
                &mut materials,
                frame,
                &piece.triangle,
                tint_color(piece.tint, piece.alpha),
            );
        }
        for p in &panel.points {
            commands.spawn((
                Mesh2d(point_mesh.clone()),
                MeshMaterial2d(point_material.clone()),
                Transform::from_translation(frame.transformed_point(p).extend(0.5)),
            ));
        }
        spawn_panel_title(&mut commands, frame, panel.title.clone());
        spawn_label(
            &mut commands,
            panel.caption.clone(),
            frame.transformed_point(&Point2::new(PANEL_BOUNDS.centre().x, CAPTION_HEIGHT)),
            LABEL_FONT_SIZE,
        );
    }

    let window = window.0;
    spawn_label(
        &mut commands,
        "Visualizing the Besicovitch Construction Step by Step",
        Vec2::new(0.0, window.y / 2.0 - HEADER_HEIGHT / 2.0),
        TITLE_FONT_SIZE + 4.0,
    );
    spawn_label(
        &mut commands,
        "Key Insight: By infinitely repeating the process of splitting triangles and overlapping them cleverly,\n\
         we can cover ALL directions while making the total area arbitrarily small.\n\
         This is the essence of Besicovitch's proof that Kakeya sets can have zero area.",
        Vec2::new(0.0, -window.y / 2.0 + FOOTER_HEIGHT / 2.0),
        LABEL_FONT_SIZE,
    );
}

fn draw_rays(mut gizmos: Gizmos, panels: Res<Panels>) {
    for (frame, panel) in panels.0.iter() {
        draw_grid(&mut gizmos, frame, 0.5);
        let color = Color::from(css::RED).with_alpha(panel.rays.alpha);
        for ray in &panel.rays.rays {
            draw_segment(&mut gizmos, frame, ray, color);
        }
    }
}

fn print_summary(panels: &[Panel]) {
    println!("\nPanels:");
    for panel in panels {
        println!(
            "  {}: {} pieces (total area {:.3}), {} rays, {} points",
            panel.title,
            panel.pieces.len(),
            panel.total_area(),
            panel.rays.rays.len(),
            panel.points.len()
        );
    }
    println!(
        "\n\
SUMMARY OF THE CONSTRUCTION:
1. Start with a triangle that covers a range of directions
2. Split it into smaller triangles
3. Translate the pieces so they overlap heavily
4. Each piece still contains segments in its original direction range
5. By arranging them cleverly, together they cover ALL directions
6. Repeat this process infinitely many times
7. In the limit, the area can be made smaller than any positive number ε
8. But the set still contains a unit segment in EVERY direction"
    );
}

#[derive(Debug, clap::Parser)]
#[command(
    name = "besicovitch_steps",
    about = "Show the Besicovitch construction step by step..."
)]
struct StepsCli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[arg(short = 'w', long = "window-size", default_value = "1400.0")]
    pub window_size: f32,

    // Print the panels and exit without opening a window.
    #[arg(long = "print")]
    pub print: bool,
}

fn main() {
    env_logger::init();
    let args = StepsCli::parse();

    let setup = match &args.config {
        Some(path) => match ConstructionSetup::parse(path) {
            Ok(setup) => setup,
            Err(e) => {
                error!("Could not load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ConstructionSetup::default(),
    };
    setup.print();

    let panels = match besicovitch_steps(&setup) {
        Ok(panels) => panels,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("Built {} panels", panels.len());

    if args.print {
        print_summary(&panels);
        return;
    }

    let window_size = Vec2::new(args.window_size, args.window_size * 2.0 / 3.0);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Besicovitch construction".to_string(),
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
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(Panels(layout(panels, window_size)))
        .insert_resource(WindowSize(window_size))
        .add_systems(Startup, (add_camera, add_panels))
        .add_systems(Update, (draw_rays, common::close_on_esc))
        .run();

    info!("Done!");
}
