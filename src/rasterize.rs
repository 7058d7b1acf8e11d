//! UV footprint rasterization for texture-painting reference.
//!
//! Walks every face in mesh pre-order and paints its UV footprint into
//! a square RGBA image, colored by face normal. The output is a
//! painting aid, not geometry: faces that cannot produce a sensible
//! footprint are skipped silently, and later faces overwrite earlier
//! ones where footprints overlap, so the result is deterministic but
//! author-order dependent.

use cgmath::{Vector2, Vector3};
use image::{Rgba, RgbaImage};

use crate::data_structures::model::{Mesh, Model};
use crate::snap::Snap;

/// Paint the UV layout of all faces into a `resolution` x `resolution`
/// image, initialized fully transparent.
pub fn rasterize(model: &Model, resolution: u32, snap: &Snap) -> RgbaImage {
    let mut image = RgbaImage::new(resolution, resolution);
    for mesh in &model.meshes {
        rasterize_mesh(&mut image, mesh, resolution, snap);
    }
    image
}

fn rasterize_mesh(image: &mut RgbaImage, mesh: &Mesh, resolution: u32, snap: &Snap) {
    for face in &mesh.faces {
        if face.vertices.len() < 3 || face.vertices.len() > 4 {
            continue;
        }
        // Authoring UVs have a bottom-left origin, the image a top-left
        // one: V flips before scaling to pixels.
        let points: Vec<Vector2<f32>> = face
            .vertices
            .iter()
            .map(|vertex| {
                let u = snap.apply(vertex.texture.x);
                let v = snap.apply(1.0 - vertex.texture.y);
                Vector2::new(u * resolution as f32, v * resolution as f32)
            })
            .collect();
        if distinct_points(&points) < 3 {
            // Collapsed footprint, nothing worth painting.
            continue;
        }
        fill_polygon(image, &points, face_colour(face.normal));
    }
    for child in &mesh.children {
        rasterize_mesh(image, child, resolution, snap);
    }
}

fn distinct_points(points: &[Vector2<f32>]) -> usize {
    let mut seen: Vec<Vector2<f32>> = Vec::with_capacity(points.len());
    for p in points {
        if !seen.contains(p) {
            seen.push(*p);
        }
    }
    seen.len()
}

/// Color a face by its authored normal. Negative components fold to
/// positive and are attenuated, so back-facing and front-facing regions
/// read as distinct but both stay colorful.
fn face_colour(normal: Vector3<f32>) -> Rgba<u8> {
    let channel = |c: f32| {
        let c = if c < 0.0 { -c * 0.7 } else { c };
        (c * 255.0) as u8
    };
    Rgba([
        channel(normal.x),
        channel(normal.y),
        channel(normal.z),
        0xff,
    ])
}

// The 2D fill primitive: paint an N-gon given in pixel coordinates.
// Even-odd scanline fill sampled at pixel centers, no anti-aliasing.
fn fill_polygon(image: &mut RgbaImage, points: &[Vector2<f32>], colour: Rgba<u8>) {
    let width = image.width() as f32;
    let height = image.height() as f32;
    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let y0 = min_y.floor().max(0.0) as u32;
    let y1 = max_y.ceil().min(height) as u32;

    let mut crossings = Vec::with_capacity(points.len());
    for y in y0..y1 {
        let sample = y as f32 + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            if (a.y <= sample && b.y > sample) || (b.y <= sample && a.y > sample) {
                crossings.push(a.x + (sample - a.y) / (b.y - a.y) * (b.x - a.x));
            }
        }
        crossings.sort_by(|l, r| l.total_cmp(r));
        for span in crossings.chunks_exact(2) {
            let x0 = span[0].round().max(0.0) as u32;
            let x1 = span[1].round().min(width) as u32;
            for x in x0..x1 {
                image.put_pixel(x, y, colour);
            }
        }
    }
}
