//! Floor and wall geometry.
//!
//! The floor is centred on the scene origin. The back wall runs along the
//! far edge (`-length/2`) and the left wall along `-width/2`; both are flat
//! strips in the floor plane, a third of the room height and a sixth of the
//! room width deep respectively. The L-shape cut always removes the
//! `(+x, +y)` corner.

use crate::coords::{Rect, Vec2};
use crate::lighting::{adjust, LightingState};
use crate::model::RoomSpec;
use crate::paint::Rgb;
use crate::scene::{Border, DrawCmd, RectCmd};

pub const BACK_WALL: Rgb = Rgb::new(240, 240, 240);
pub const LEFT_WALL: Rgb = Rgb::new(220, 220, 220);
/// Fill of the removed L-shape corner; drawn as-is.
pub const CUT_BACKGROUND: Rgb = Rgb::LIGHT_GRAY;

/// Scene-space rectangles making up a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGeometry {
    pub floor: Rect,
    /// Removed corner of an L-shaped floor.
    pub floor_cut: Option<Rect>,
    pub back_wall: Rect,
    /// Part of the back wall behind the removed corner.
    pub back_wall_cut: Option<Rect>,
    pub left_wall: Rect,
}

impl RoomGeometry {
    pub fn of(room: &RoomSpec) -> Self {
        let (w, l) = room.floor_extent();
        let h = room.height() as i32;
        let floor = Rect::from_i32(-w / 2, -l / 2, w, l);

        match room.l_cut() {
            Some((cw, cl)) => Self {
                floor,
                floor_cut: Some(Rect::from_i32(w / 2 - cw, l / 2 - cl, cw, cl)),
                back_wall: Rect::from_i32(-w / 2, -l / 2, w, h / 3),
                back_wall_cut: Some(Rect::from_i32(w / 2 - cw, -l / 2, cw, h / 3)),
                left_wall: Rect::from_i32(-w / 2, -l / 2, w / 6, l * 2 / 3),
            },
            None => Self {
                floor,
                floor_cut: None,
                back_wall: Rect::from_i32(-w / 2, -l / 2, w, h / 3),
                back_wall_cut: None,
                left_wall: Rect::from_i32(-w / 2, -l / 2, w / 6, l),
            },
        }
    }
}

/// Appends floor, back wall and left wall, in that order.
///
/// Floor and walls are lit; the cut background and outlines are not.
pub fn draw_room(room: &RoomSpec, lighting: &LightingState, outline: &Border, out: &mut Vec<DrawCmd>) {
    let g = RoomGeometry::of(room);
    let floor = adjust(room.color, lighting);

    match g.floor_cut {
        Some(cut) => {
            out.push(DrawCmd::Rect(RectCmd::filled(g.floor, floor, None)));
            out.push(DrawCmd::Rect(RectCmd::filled(cut, CUT_BACKGROUND, None)));
            out.push(DrawCmd::Rect(RectCmd::stroked(g.floor, outline.clone())));
            out.push(DrawCmd::Rect(RectCmd::stroked(cut, outline.clone())));
        }
        None => out.push(DrawCmd::Rect(RectCmd::filled(g.floor, floor, Some(outline.clone())))),
    }

    let back = adjust(BACK_WALL, lighting);
    match g.back_wall_cut {
        Some(cut) => {
            out.push(DrawCmd::Rect(RectCmd::filled(g.back_wall, back, None)));
            out.push(DrawCmd::Rect(RectCmd::filled(cut, CUT_BACKGROUND, None)));
            // Only the remaining wall is outlined.
            let remaining = Rect::from_origin_size(
                g.back_wall.origin,
                Vec2::new(g.back_wall.size.x - cut.size.x, g.back_wall.size.y),
            );
            out.push(DrawCmd::Rect(RectCmd::stroked(remaining, outline.clone())));
        }
        None => out.push(DrawCmd::Rect(RectCmd::filled(g.back_wall, back, Some(outline.clone())))),
    }

    out.push(DrawCmd::Rect(RectCmd::filled(
        g.left_wall,
        adjust(LEFT_WALL, lighting),
        Some(outline.clone()),
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoomShape;
    use crate::paint::Paint;

    fn room(w: u32, l: u32, h: u32, shape: RoomShape) -> RoomSpec {
        RoomSpec::new(w, l, h, shape, Rgb::WHITE).unwrap()
    }

    fn rects(out: &[DrawCmd]) -> Vec<&RectCmd> {
        out.iter()
            .map(|c| match c {
                DrawCmd::Rect(r) => r,
                other => panic!("room emitted {other:?}"),
            })
            .collect()
    }

    #[test]
    fn rectangle_floor_is_centred() {
        let g = RoomGeometry::of(&room(500, 400, 250, RoomShape::Rectangle));
        assert_eq!(g.floor, Rect::new(-250.0, -200.0, 500.0, 400.0));
        assert_eq!(g.back_wall, Rect::new(-250.0, -200.0, 500.0, 83.0));
        assert_eq!(g.left_wall, Rect::new(-250.0, -200.0, 83.0, 400.0));
        assert!(g.floor_cut.is_none());
    }

    #[test]
    fn l_shape_cuts_positive_corner() {
        let g = RoomGeometry::of(&room(500, 400, 250, RoomShape::LShape));
        assert_eq!(g.floor_cut, Some(Rect::new(-83.0, -66.0, 333.0, 266.0)));
        assert_eq!(g.back_wall_cut, Some(Rect::new(-83.0, -200.0, 333.0, 83.0)));
        assert_eq!(g.left_wall.size.y, 266.0);
    }

    #[test]
    fn square_room_uses_larger_side() {
        let g = RoomGeometry::of(&room(300, 420, 240, RoomShape::Square));
        assert_eq!(g.floor, Rect::new(-210.0, -210.0, 420.0, 420.0));
    }

    #[test]
    fn rectangle_room_emits_three_outlined_fills() {
        let mut out = Vec::new();
        draw_room(&room(500, 400, 250, RoomShape::Rectangle), &LightingState::identity(), &Border::outline(1.0), &mut out);
        let r = rects(&out);
        assert_eq!(r.len(), 3);
        assert!(r.iter().all(|c| c.fill.is_some() && c.border.is_some()));
        assert_eq!(r[1].fill, Some(Paint::from(BACK_WALL)));
        assert_eq!(r[2].fill, Some(Paint::from(LEFT_WALL)));
    }

    #[test]
    fn l_shape_paints_cut_over_floor_then_strokes() {
        let mut out = Vec::new();
        draw_room(&room(500, 400, 250, RoomShape::LShape), &LightingState::default(), &Border::outline(1.0), &mut out);
        let r = rects(&out);
        // floor fill, cut fill, floor stroke, cut stroke, wall fill, wall cut, wall stroke, left wall
        assert_eq!(r.len(), 8);
        assert_eq!(r[1].fill, Some(Paint::from(CUT_BACKGROUND)));
        assert!(r[2].fill.is_none() && r[3].fill.is_none());
        assert_eq!(r[3].rect, Rect::new(-83.0, -66.0, 333.0, 266.0));
        assert_eq!(r[6].rect, Rect::new(-250.0, -200.0, 167.0, 83.0));
    }

    #[test]
    fn room_colour_is_lit() {
        let mut lighting = LightingState::identity();
        lighting.set_light_intensity(0.5);
        let mut out = Vec::new();
        draw_room(&room(100, 100, 100, RoomShape::Rectangle), &lighting, &Border::outline(1.0), &mut out);
        assert_eq!(rects(&out)[0].fill, Some(Paint::from(adjust(Rgb::WHITE, &lighting))));
    }
}
