use glam::Vec2;
use image::{Rgba, RgbaImage};
use snake_common::Direction;
use snake_render::{FRUIT_TEXTURE, TAIL_TEXTURE, head_texture};
use std::path::Path;

use crate::error::RenderError;

/// Atlas is a square sheet of `ATLAS_CELLS` x `ATLAS_CELLS` sprites.
pub const ATLAS_CELLS: u32 = 4;

/// Sprite edge length, in pixels, of the built-in atlas.
pub const DEFAULT_CELL_PX: u32 = 32;

const FRUIT_RED: Rgba<u8> = Rgba([220, 40, 40, 255]);
const STEM_GREEN: Rgba<u8> = Rgba([40, 140, 40, 255]);
const TAIL_GREEN: Rgba<u8> = Rgba([70, 180, 90, 255]);
const HEAD_GREEN: Rgba<u8> = Rgba([30, 130, 60, 255]);
const EYE_WHITE: Rgba<u8> = Rgba([250, 250, 250, 255]);
const PUPIL: Rgba<u8> = Rgba([10, 10, 10, 255]);

/// Top-left pixel of sprite `index` inside an atlas with `cell_px` cells.
/// Rows are counted from the bottom of the image.
pub fn cell_origin(index: u32, cell_px: u32) -> (u32, u32) {
    let column = index / ATLAS_CELLS;
    let row = index % ATLAS_CELLS;
    (column * cell_px, (ATLAS_CELLS - 1 - row) * cell_px)
}

/// Load an atlas PNG from disk. Both dimensions must split into whole cells.
pub fn load_atlas(path: impl AsRef<Path>) -> Result<RgbaImage, RenderError> {
    let path = path.as_ref();
    let atlas = image::open(path)?.to_rgba8();
    validate_dimensions(&atlas)?;
    tracing::info!(
        path = %path.display(),
        width = atlas.width(),
        height = atlas.height(),
        "loaded texture atlas"
    );
    Ok(atlas)
}

fn validate_dimensions(atlas: &RgbaImage) -> Result<(), RenderError> {
    let (width, height) = atlas.dimensions();
    if width == 0 || height == 0 || width % ATLAS_CELLS != 0 || height % ATLAS_CELLS != 0 {
        return Err(RenderError::AtlasDimensions { width, height });
    }
    Ok(())
}

/// Paint the default sprite sheet: fruit, tail and the four head headings.
/// Unused cells stay transparent.
pub fn builtin_atlas(cell_px: u32) -> RgbaImage {
    let size = cell_px * ATLAS_CELLS;
    let mut atlas = RgbaImage::new(size, size);

    paint_cell(&mut atlas, FRUIT_TEXTURE as u32, cell_px, fruit_pixel);
    paint_cell(&mut atlas, TAIL_TEXTURE as u32, cell_px, tail_pixel);
    for direction in Direction::ALL {
        let forward = direction.velocity().as_vec2();
        paint_cell(&mut atlas, head_texture(direction) as u32, cell_px, |p| {
            head_pixel(p, forward)
        });
    }
    atlas
}

/// Fill one cell by evaluating `shade` at each pixel center. `shade` receives
/// cell-local coordinates in `[0, 1]` with `y` pointing up.
fn paint_cell(
    atlas: &mut RgbaImage,
    index: u32,
    cell_px: u32,
    shade: impl Fn(Vec2) -> Option<Rgba<u8>>,
) {
    let (ox, oy) = cell_origin(index, cell_px);
    let px = cell_px as f32;
    for py in 0..cell_px {
        for pxl in 0..cell_px {
            let local = Vec2::new((pxl as f32 + 0.5) / px, 1.0 - (py as f32 + 0.5) / px);
            if let Some(color) = shade(local) {
                atlas.put_pixel(ox + pxl, oy + py, color);
            }
        }
    }
}

fn fruit_pixel(p: Vec2) -> Option<Rgba<u8>> {
    if p.distance(Vec2::new(0.5, 0.45)) < 0.33 {
        return Some(FRUIT_RED);
    }
    if (0.46..0.54).contains(&p.x) && (0.75..0.92).contains(&p.y) {
        return Some(STEM_GREEN);
    }
    None
}

fn tail_pixel(p: Vec2) -> Option<Rgba<u8>> {
    let inset = (p - Vec2::splat(0.5)).abs();
    (inset.max_element() < 0.4).then_some(TAIL_GREEN)
}

fn head_pixel(p: Vec2, forward: Vec2) -> Option<Rgba<u8>> {
    let center = Vec2::splat(0.5);
    let side = forward.perp();
    let eye_base = center + forward * 0.18;
    for eye in [eye_base + side * 0.18, eye_base - side * 0.18] {
        let d = p.distance(eye);
        if d < 0.05 {
            return Some(PUPIL);
        }
        if d < 0.1 {
            return Some(EYE_WHITE);
        }
    }
    let inset = (p - center).abs();
    (inset.max_element() < 0.45).then_some(HEAD_GREEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_origin_counts_rows_from_bottom() {
        assert_eq!(cell_origin(0, 32), (0, 96));
        assert_eq!(cell_origin(3, 32), (0, 0));
        assert_eq!(cell_origin(4, 32), (32, 96));
        assert_eq!(cell_origin(5, 32), (32, 64));
    }

    #[test]
    fn builtin_atlas_has_expected_size() {
        let atlas = builtin_atlas(DEFAULT_CELL_PX);
        assert_eq!(atlas.dimensions(), (128, 128));
        assert!(validate_dimensions(&atlas).is_ok());
    }

    #[test]
    fn builtin_atlas_paints_sprite_centers() {
        let cell = 16;
        let atlas = builtin_atlas(cell);
        let center = |index: u32| {
            let (x, y) = cell_origin(index, cell);
            *atlas.get_pixel(x + cell / 2, y + cell / 2)
        };
        assert_eq!(center(FRUIT_TEXTURE as u32), FRUIT_RED);
        assert_eq!(center(TAIL_TEXTURE as u32), TAIL_GREEN);
        for direction in Direction::ALL {
            assert_eq!(center(head_texture(direction) as u32), HEAD_GREEN);
        }
        // Unused cell stays transparent.
        assert_eq!(center(15)[3], 0);
    }

    #[test]
    fn head_eyes_face_heading() {
        let right = Direction::Right.velocity().as_vec2();
        let eye = Vec2::new(0.5 + 0.18, 0.5 + 0.18);
        assert_eq!(head_pixel(eye, right), Some(PUPIL));
        let behind = Vec2::new(0.5 - 0.18, 0.5 + 0.18);
        assert_eq!(head_pixel(behind, right), Some(HEAD_GREEN));
    }

    #[test]
    fn rejects_atlas_that_does_not_split_into_cells() {
        let atlas = RgbaImage::new(30, 32);
        assert!(matches!(
            validate_dimensions(&atlas),
            Err(RenderError::AtlasDimensions {
                width: 30,
                height: 32
            })
        ));
    }

    #[test]
    fn missing_atlas_file_is_an_error() {
        assert!(load_atlas("/no/such/atlas.png").is_err());
    }
}
