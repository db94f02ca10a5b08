//! Shape generation for 2D primitives
//!
//! Turns a [`Scene`] into a triangle list in clip space, ready for a
//! vertex buffer laid out by [`Vertex::desc`].

use glam::Vec2;

use super::vertex::Vertex;
use crate::scene::{Scene, Sprite};
use crate::sim::Rect;

/// Map world pixels (origin top-left, y down) to clip space (y up)
#[inline]
pub fn to_clip(p: Vec2, world: Vec2) -> Vec2 {
    Vec2::new(p.x / world.x * 2.0 - 1.0, 1.0 - p.y / world.y * 2.0)
}

/// Two triangles covering a rectangle
pub fn rect(r: &Rect, color: [f32; 4], world: Vec2) -> [Vertex; 6] {
    let tl = to_clip(r.pos, world);
    let br = to_clip(r.pos + r.size, world);
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Generate vertices for every sprite in the scene, in draw order.
/// Degenerate (zero-area) sprites are skipped.
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let sprites = scene.sprites();
    let mut vertices = Vec::with_capacity(sprites.len() * 6);
    append_sprites(&mut vertices, &sprites, scene.size);
    vertices
}

fn append_sprites(out: &mut Vec<Vertex>, sprites: &[Sprite], world: Vec2) {
    for sprite in sprites {
        if sprite.rect.size.x <= 0.0 || sprite.rect.size.y <= 0.0 {
            continue;
        }
        out.extend_from_slice(&rect(&sprite.rect, sprite.color, world));
    }
}
