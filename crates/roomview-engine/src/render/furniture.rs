//! Per-kind decomposition of furniture into boxes and accents.
//!
//! Every kind is a fixed arrangement of [`BoxSpec`]s around the item's screen
//! anchor, with dimensions derived from the item's size using integer
//! division. A few kinds add flat accents: wardrobe seam and handles, lamp
//! shade.

use crate::coords::{Rect, Vec2};
use crate::lighting::{adjust, LightingState};
use crate::model::{FurnitureKind, Size};
use crate::paint::Rgb;
use crate::render::box_faces::{BoxFaces, BoxSpec};
use crate::scene::{Border, DrawCmd, LineCmd, OvalCmd};

const MATTRESS: Rgb = Rgb::new(220, 220, 220);
const PILLOW: Rgb = Rgb::new(240, 240, 240);
const BLANKET: Rgb = Rgb::new(70, 130, 180);

/// One drawable piece of a furniture item.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Box(BoxFaces),
    /// Thin black line, e.g. the wardrobe door seam.
    Seam { from: Vec2, to: Vec2 },
    /// Filled oval; `outlined` adds a black stroke.
    Oval { bounds: Rect, fill: Rgb, outlined: bool },
}

impl Part {
    fn boxed(spec: BoxSpec, color: Rgb) -> Self {
        Part::Box(spec.faces(color))
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Part::Box(faces) => faces.is_finite(),
            Part::Seam { from, to } => from.is_finite() && to.is_finite(),
            Part::Oval { bounds, .. } => bounds.is_finite(),
        }
    }

    pub fn emit(&self, outline: &Border, out: &mut Vec<DrawCmd>) {
        match self {
            Part::Box(faces) => faces.emit(outline, out),
            Part::Seam { from, to } => out.push(DrawCmd::Line(LineCmd::new(*from, *to, outline.clone()))),
            Part::Oval { bounds, fill, outlined } => {
                let border = outlined.then(|| outline.clone());
                out.push(DrawCmd::Oval(OvalCmd::new(*bounds, *fill, border)));
            }
        }
    }
}

/// Decomposes an item of `kind` anchored at screen `(x, y)`.
///
/// `color` is the item's own colour. Every kind except
/// [`FurnitureKind::Unknown`] draws it through `lighting`, as it does the
/// fixed bed fabric colours.
pub fn compose(kind: FurnitureKind, x: i32, y: i32, size: Size, color: Rgb, lighting: &LightingState) -> Vec<Part> {
    let Size { width: w, height: h, depth: d } = size;
    let lit = |c: Rgb| adjust(c, lighting);
    let c = lit(color);

    match kind {
        FurnitureKind::Table(_) => {
            let leg_w = w / 10;
            let leg_d = d / 10;
            let mut parts = vec![Part::boxed(BoxSpec::new(x, y - h / 2, w, h / 4, d), c)];
            parts.extend(four_legs(x, y, w, d, leg_w, leg_d, h, c.darker()));
            parts
        }
        FurnitureKind::Chair => {
            let leg_w = w / 12;
            let leg_d = d / 12;
            let mut parts = vec![
                Part::boxed(BoxSpec::new(x, y - h / 3, w, h / 6, d), c),
                Part::boxed(BoxSpec::new(x, y - h * 2 / 3, w, h * 2 / 3, d / 6), c.darker()),
            ];
            parts.extend(four_legs(x, y, w, d, leg_w, leg_d, h / 2, c.darker()));
            parts
        }
        FurnitureKind::Sofa => vec![
            Part::boxed(BoxSpec::new(x, y - h / 4, w, h / 2, d), c),
            Part::boxed(BoxSpec::new(x, y - h * 3 / 4, w, h / 2, d / 3), c.darker()),
            Part::boxed(BoxSpec::new(x - w / 2 + w / 10, y - h / 3, w / 5, h / 2, d), c.darker()),
            Part::boxed(BoxSpec::new(x + w / 2 - w / 10, y - h / 3, w / 5, h / 2, d), c.darker()),
        ],
        FurnitureKind::Bed => {
            let pillow = lit(PILLOW);
            vec![
                Part::boxed(BoxSpec::new(x, y, w, h / 6, d), c.darker()),
                Part::boxed(
                    BoxSpec::new(x, y - h / 8, fraction(w, 0.95), h / 8, fraction(d, 0.9)),
                    lit(MATTRESS),
                ),
                Part::boxed(BoxSpec::new(x - w / 2 + w / 20, y - h / 4, w / 10, h / 2, d / 10), c),
                Part::boxed(BoxSpec::new(x - w / 4, y - h / 6, w / 4, h / 12, d / 3), pillow),
                Part::boxed(BoxSpec::new(x + w / 4, y - h / 6, w / 4, h / 12, d / 3), pillow),
                Part::boxed(
                    BoxSpec::new(x, y, fraction(w, 0.9), h / 20, fraction(d, 0.7)),
                    lit(BLANKET),
                ),
            ]
        }
        FurnitureKind::Wardrobe => {
            let handle = w / 20;
            vec![
                Part::boxed(BoxSpec::new(x, y - h / 2, w, h, d), c),
                Part::Seam {
                    from: Vec2::from_i32(x, y - h),
                    to: Vec2::from_i32(x, y),
                },
                Part::Oval {
                    bounds: Rect::from_i32(x - handle * 2, y - h / 2, handle, handle),
                    fill: Rgb::DARK_GRAY,
                    outlined: false,
                },
                Part::Oval {
                    bounds: Rect::from_i32(x + handle, y - h / 2, handle, handle),
                    fill: Rgb::DARK_GRAY,
                    outlined: false,
                },
            ]
        }
        FurnitureKind::Lamp => vec![
            Part::boxed(BoxSpec::new(x, y, w / 3, h / 10, w / 3), c.darker()),
            Part::boxed(BoxSpec::new(x, y - h / 2, w / 20, h, w / 20), c),
            Part::Oval {
                bounds: Rect::from_i32(x - w / 2, y - h, w, h / 4),
                fill: c.brighter(),
                outlined: true,
            },
        ],
        FurnitureKind::Unknown => vec![Part::boxed(BoxSpec::new(x, y, w, h, d), color)],
    }
}

/// Front pair at `y`, back pair one depth behind.
#[allow(clippy::too_many_arguments)]
fn four_legs(x: i32, y: i32, w: i32, d: i32, leg_w: i32, leg_d: i32, leg_h: i32, color: Rgb) -> [Part; 4] {
    let left = x - w / 2 + leg_w;
    let right = x + w / 2 - leg_w;
    let back = y - d + leg_d;
    [
        Part::boxed(BoxSpec::new(left, y, leg_w, leg_h, leg_d), color),
        Part::boxed(BoxSpec::new(right, y, leg_w, leg_h, leg_d), color),
        Part::boxed(BoxSpec::new(left, back, leg_w, leg_h, leg_d), color),
        Part::boxed(BoxSpec::new(right, back, leg_w, leg_h, leg_d), color),
    ]
}

#[inline]
fn fraction(v: i32, f: f64) -> i32 {
    (v as f64 * f) as i32
}

/// Number of boxes `kind` decomposes into.
pub fn box_count(kind: FurnitureKind) -> usize {
    match kind {
        FurnitureKind::Table(_) => 5,
        FurnitureKind::Chair => 6,
        FurnitureKind::Sofa => 4,
        FurnitureKind::Bed => 6,
        FurnitureKind::Wardrobe => 1,
        FurnitureKind::Lamp => 2,
        FurnitureKind::Unknown => 1,
    }
}

/// Flattens `parts` into draw commands.
pub fn emit_parts(parts: &[Part], outline: &Border, out: &mut Vec<DrawCmd>) {
    for part in parts {
        part.emit(outline, out);
    }
}
