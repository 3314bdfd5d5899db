//! `walkthrough` executable: opens a window over a small demo studio.
//!
//! Usage: `walkthrough [options.toml]`. Keys `1`, `2`, `3` and `H` fly to
//! the configured viewpoints; drag to orbit, shift-drag to pan, scroll to
//! zoom, and click a highlighted object to open its link.

use std::path::Path;

use glam::{Mat4, Vec3};
use walkthrough::options::Options;
use walkthrough::scene::{Aabb, Scene};
use walkthrough::{Viewer, WalkthroughError};

/// Demo studio: a desk with a monitor, a shelf of project boxes and a
/// wall of social frames, some carrying links.
fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    let desk = scene.add_box(
        "desk",
        None,
        Mat4::from_translation(Vec3::new(0.0, 0.4, 0.0)),
        Aabb::from_half_extents(Vec3::new(1.2, 0.4, 0.6)),
    );
    let monitor = scene.add_box(
        "monitor",
        Some(desk),
        Mat4::from_translation(Vec3::new(0.0, 0.7, -0.2)),
        Aabb::from_half_extents(Vec3::new(0.5, 0.3, 0.03)),
    );
    scene.set_link(monitor, "https://example.org/about");

    let shelf = scene.add_group(
        "projects",
        None,
        Mat4::from_translation(Vec3::new(-1.5, 1.4, -2.8)),
    );
    for (i, url) in ["https://example.org/p/1", "https://example.org/p/2"]
        .into_iter()
        .enumerate()
    {
        let x = i as f32 * 0.6 - 0.3;
        let item = scene.add_box(
            format!("project-{i}"),
            Some(shelf),
            Mat4::from_translation(Vec3::new(x, 0.0, 0.0)),
            Aabb::from_half_extents(Vec3::splat(0.2)),
        );
        scene.set_link(item, url);
    }

    let wall = scene.add_group(
        "social-wall",
        None,
        Mat4::from_translation(Vec3::new(4.4, 1.0, 2.0)),
    );
    let frames = [
        ("mail", Vec3::new(0.0, 0.3, -0.5), "mailto:hello@example.org"),
        ("code", Vec3::new(0.0, 0.3, 0.5), "https://example.org/code"),
        ("blank", Vec3::new(0.0, -0.3, 0.0), ""),
    ];
    for (name, offset, url) in frames {
        let frame = scene.add_box(
            name,
            Some(wall),
            Mat4::from_translation(offset),
            Aabb::from_half_extents(Vec3::new(0.02, 0.2, 0.2)),
        );
        if !url.is_empty() {
            scene.set_link(frame, url);
        }
    }

    scene.update_world_matrices();
    scene
}

fn main() -> Result<(), WalkthroughError> {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    Viewer::builder()
        .with_options(options)
        .with_scene(demo_scene())
        .with_title("Walkthrough")
        .build()
        .run()
}
