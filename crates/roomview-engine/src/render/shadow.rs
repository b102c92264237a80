//! Translucent floor shadows.
//!
//! The light direction is fixed: every contact shadow is pushed `+15` on both
//! floor axes. Shadows are an overlay only and never feed back into layout or
//! ordering.

use crate::coords::Rect;
use crate::lighting::LightingState;
use crate::model::{FurnitureItem, RoomSpec};
use crate::paint::{Paint, Rgb};
use crate::scene::{DrawCmd, OvalCmd, RectCmd};

/// Shadows are skipped entirely at or below this intensity.
pub const SHADOW_THRESHOLD: f32 = 0.2;
/// Fixed light-direction offset on both floor axes.
pub const SHADOW_OFFSET: i32 = 15;
/// Thickness of the contact strips along an L-shape's inner corner.
pub const SEAM_THICKNESS: i32 = 10;

/// Whether any shadow is drawn at this lighting.
#[inline]
pub fn shadows_enabled(lighting: &LightingState) -> bool {
    lighting.shadow_intensity() > SHADOW_THRESHOLD
}

/// Black at alpha `100 * intensity / 255`, composited at `intensity` opacity.
pub fn shadow_paint(intensity: f32) -> Paint {
    let alpha = (100.0 * intensity) as u8;
    Paint::blended(Rgb::BLACK.with_alpha(alpha as f32 / 255.0), intensity)
}

/// Oval under an item whose floor position is `(x, z)` and footprint is
/// `width × height`. Its vertical centre sits on the offset point.
pub fn contact_oval(x: i32, z: i32, width: i32, height: i32) -> Rect {
    let sx = x + SHADOW_OFFSET;
    let sz = z + SHADOW_OFFSET;
    Rect::from_i32(sx - width / 2, sz - height / 4, width, height / 2)
}

/// The two strips tracing the inner corner of an L-shaped room.
pub fn seam_strips(room: &RoomSpec) -> Option<[Rect; 2]> {
    let (cw, cl) = room.l_cut()?;
    let (w, l) = room.floor_extent();
    let x = w / 2 - cw - SEAM_THICKNESS;
    let y = l / 2 - cl - SEAM_THICKNESS;
    Some([
        Rect::from_i32(x, y, SEAM_THICKNESS, cl),
        Rect::from_i32(x, y, cw, SEAM_THICKNESS),
    ])
}

/// Appends item shadows followed by seam strips. Returns the number of item
/// shadows drawn.
///
/// Items whose size cannot be resolved cast no shadow.
pub fn draw_shadows(room: &RoomSpec, items: &[FurnitureItem], lighting: &LightingState, out: &mut Vec<DrawCmd>) -> usize {
    if !shadows_enabled(lighting) {
        return 0;
    }
    let paint = shadow_paint(lighting.shadow_intensity());

    let mut drawn = 0;
    for item in items {
        let Ok(size) = item.drawable_size() else {
            continue;
        };
        let bounds = contact_oval(item.position.x, item.position.z, size.width, size.height);
        out.push(DrawCmd::Oval(OvalCmd::new(bounds, paint.clone(), None)));
        drawn += 1;
    }

    if let Some(strips) = seam_strips(room) {
        for strip in strips {
            out.push(DrawCmd::Rect(RectCmd::filled(strip, paint.clone(), None)));
        }
    }
    drawn
}
