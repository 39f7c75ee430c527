//! Demo binary: a spinning cube pushed through the full pipeline
//!
//! Plays the part of the excluded collaborators: owns the pixel buffer,
//! runs the frame loop, and hands already-projected integer coordinates to
//! the rasterizer. Per frame: model transform -> camera view-projection ->
//! homogeneous divide -> NDC clip test -> screen coordinates -> draw.

use log::{info, warn};
use macroquad::prelude::*;

use raster_engine::geometry::ndc_to_screen;
use raster_engine::raster;
use raster_engine::scene::Scene;
use raster_engine::{Mat4, Vec3};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Internal render resolution; the window scales it up
const WIDTH: usize = 320;
const HEIGHT: usize = 240;

const SCENE_PATH: &str = "assets/demo_scene.ron";
const GRID_SPACING: usize = 16;

/// Unit-cube corners, back face first
fn cube_corners() -> [Vec3; 8] {
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ]
}

const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0), // back
    (4, 5), (5, 6), (6, 7), (7, 4), // front
    (0, 4), (1, 5), (2, 6), (3, 7), // sides
];

/// Cube faces as triangles, wound so the edge cross product points outward
const CUBE_FACES: [[usize; 3]; 12] = [
    [4, 5, 6], [4, 6, 7], // front (+z)
    [1, 0, 3], [1, 3, 2], // back (-z)
    [0, 4, 7], [0, 7, 3], // left (-x)
    [5, 1, 2], [5, 2, 6], // right (+x)
    [7, 6, 2], [7, 2, 3], // top (+y)
    [0, 1, 5], [0, 5, 4], // bottom (-y)
];

fn window_conf() -> Conf {
    Conf {
        window_title: format!("raster demo v{}", VERSION),
        window_width: WIDTH as i32 * 3,
        window_height: HEIGHT as i32 * 3,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut scene = match Scene::load(SCENE_PATH) {
        Ok(scene) => {
            info!("loaded scene from {}", SCENE_PATH);
            scene
        }
        Err(e) => {
            info!("using built-in scene ({})", e);
            Scene::default()
        }
    };

    let mut image = Image::gen_image_color(WIDTH as u16, HEIGHT as u16, BLACK);
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);

    let corners = cube_corners();
    let mut reported_singular = false;

    loop {
        let dt = get_frame_time();
        scene.model.rotation.y += scene.spin_speed * dt;
        scene.model.rotation.x += scene.spin_speed * 0.4 * dt;

        let vp = match scene.camera.view_projection() {
            Ok(vp) => vp,
            Err(e) => {
                if !reported_singular {
                    warn!("camera transform: {}, falling back to identity", e);
                    reported_singular = true;
                }
                Mat4::IDENTITY
            }
        };
        let mvp = scene.model.matrix() * vp;

        // world -> clip -> homogeneous divide -> NDC clip test -> screen
        let mut screen: [Option<(i32, i32)>; 8] = [None; 8];
        for (corner, out) in corners.iter().zip(screen.iter_mut()) {
            *out = mvp
                .transform_projective_point(*corner)
                .filter(|ndc| ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0)
                .map(|ndc| ndc_to_screen(ndc, WIDTH, HEIGHT));
        }

        let frame = &mut image.bytes;
        raster::clear(frame, WIDTH, HEIGHT, scene.background);
        raster::grid(frame, WIDTH, HEIGHT, GRID_SPACING, scene.grid_color);

        for (i, face) in CUBE_FACES.iter().enumerate() {
            if let (Some(a), Some(b), Some(c)) = (screen[face[0]], screen[face[1]], screen[face[2]])
            {
                // Outward winding appears clockwise on a y-down screen;
                // cull faces pointing away.
                let area = (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0);
                if area <= 0 {
                    continue;
                }
                let shade = 0.6 + 0.4 * (i as f32 / (CUBE_FACES.len() - 1) as f32);
                raster::triangle(
                    frame,
                    WIDTH,
                    HEIGHT,
                    a.0,
                    a.1,
                    b.0,
                    b.1,
                    c.0,
                    c.1,
                    scene.fill_color.shade(shade),
                );
            }
        }

        for &(start, end) in CUBE_EDGES.iter() {
            if let (Some(a), Some(b)) = (screen[start], screen[end]) {
                raster::line(frame, WIDTH, HEIGHT, a.0, a.1, b.0, b.1, scene.wire_color);
            }
        }

        texture.update(&image);

        clear_background(BLACK);
        draw_texture_ex(
            &texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}
