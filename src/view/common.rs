use bevy::{color::palettes::css, prelude::*};
use colorgrad::Gradient;

use crate::{
    construction::Tint,
    geometry::{arange, line_segment::LineSegment, triangle::Triangle},
    motion::indicator::DirectionIndicator,
};

use super::panel::PanelFrame;

pub const TITLE_FONT_SIZE: f32 = 18.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;

// Thick lines for the needles themselves.
#[derive(GizmoConfigGroup, Default, Reflect)]
pub struct NeedleGizmos;

pub fn needle_gizmo_config() -> GizmoConfig {
    GizmoConfig {
        line_width: 4.0,
        ..Default::default()
    }
}

pub fn close_on_esc(
    mut commands: Commands,
    focused_windows: Query<(Entity, &Window)>,
    input: Res<ButtonInput<KeyCode>>,
) {
    for (window, focus) in focused_windows.iter() {
        if !focus.focused {
            continue;
        }

        if input.just_pressed(KeyCode::Escape) {
            commands.entity(window).despawn();
        }
    }
}

pub fn add_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn tint_color(tint: Tint, alpha: f32) -> Color {
    match tint {
        Tint::Red => Color::from(css::RED).with_alpha(alpha),
        Tint::Green => Color::from(css::GREEN).with_alpha(alpha),
        Tint::Blue => Color::from(css::BLUE).with_alpha(alpha),
        Tint::Palette { index, of } => {
            let g = colorgrad::preset::turbo();
            let c = g.at(index as f32 / of.max(1) as f32);
            Color::srgba(c.r, c.g, c.b, alpha)
        }
    }
}

pub fn spawn_triangle(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    frame: &PanelFrame,
    triangle: &Triangle,
    color: Color,
) {
    let [a, b, c] = triangle.vertices.map(|v| frame.transformed_point(&v));
    commands.spawn((
        Mesh2d(meshes.add(Triangle2d::new(a, b, c))),
        MeshMaterial2d(materials.add(color)),
        Transform::default(),
    ));
}

pub fn spawn_label(commands: &mut Commands, text: impl Into<String>, position: Vec2, font_size: f32) {
    commands.spawn((
        Text2d::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::BLACK),
        // Above the filled shapes.
        Transform::from_translation(position.extend(1.0)),
    ));
}

// Title just above the panel's plot area.
pub fn spawn_panel_title(commands: &mut Commands, frame: &PanelFrame, title: impl Into<String>) {
    let rect = frame.screen_rect();
    spawn_label(
        commands,
        title,
        Vec2::new(rect.center().x, rect.max.y + TITLE_FONT_SIZE),
        TITLE_FONT_SIZE,
    );
}

pub fn draw_segment<Config: GizmoConfigGroup>(
    gizmos: &mut Gizmos<Config>,
    frame: &PanelFrame,
    seg: &LineSegment,
    color: impl Into<Color>,
) {
    gizmos.line_2d(
        frame.transformed_point(&seg.start),
        frame.transformed_point(&seg.end),
        color,
    );
}

pub fn draw_indicator(
    gizmos: &mut Gizmos,
    frame: &PanelFrame,
    indicator: &DirectionIndicator,
    tip_length: f64,
    color: impl Into<Color>,
) {
    if !indicator.is_visible() {
        return;
    }
    gizmos
        .arrow_2d(
            frame.transformed_point(&indicator.origin),
            frame.transformed_point(&indicator.tip()),
            color,
        )
        .with_tip_length(frame.transform_coord(tip_length));
}

// Faint grid lines every `step` plot units, plus a border.
pub fn draw_grid(gizmos: &mut Gizmos, frame: &PanelFrame, step: f64) {
    let grid_color = Color::BLACK.with_alpha(0.1);
    let b = frame.bounds;
    let rect = frame.screen_rect();
    for x in arange((b.x.0 / step).ceil() * step, b.x.1, step) {
        let sx = frame.transformed_point(&nalgebra::Point2::new(x, b.y.0)).x;
        gizmos.line_2d(Vec2::new(sx, rect.min.y), Vec2::new(sx, rect.max.y), grid_color);
    }
    for y in arange((b.y.0 / step).ceil() * step, b.y.1, step) {
        let sy = frame.transformed_point(&nalgebra::Point2::new(b.x.0, y)).y;
        gizmos.line_2d(Vec2::new(rect.min.x, sy), Vec2::new(rect.max.x, sy), grid_color);
    }
    gizmos.rect_2d(
        Isometry2d::from_translation(rect.center()),
        rect.size(),
        Color::BLACK.with_alpha(0.6),
    );
}
