//! The oriented box primitive every furniture part is built from.
//!
//! A box is anchored at `(x, y)` and drawn as three faces. With `w`, `h`, `d`
//! its width, height and depth and `o = d / 4` the recession offset (all
//! halves and quarters truncate toward zero):
//!
//! ```text
//!        (x-w/2, y-h/2-o) ────────── (x+w/2, y-h/2-o)
//!           /      top               /|
//! (x-w/2-o, y-h/2) ─────── (x+w/2-o, y-h/2)  side
//!        |                          | |
//!        |          front           | /
//!        |                          |/
//! (x-w/2-o, y+h/2) ─────── (x+w/2-o, y+h/2)
//! ```
//!
//! The top face is filled with the brighter shade, the front with the base
//! colour and the side with the darker shade. All three are outlined.

use crate::coords::{Rect, Vec2};
use crate::model::MIN_EXTENT;
use crate::paint::Rgb;
use crate::scene::{Border, DrawCmd, PolygonCmd, RectCmd};

/// Box dimensions and anchor in scene units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxSpec {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl BoxSpec {
    /// Dimensions below [`MIN_EXTENT`] are raised to it.
    pub fn new(x: i32, y: i32, width: i32, height: i32, depth: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(MIN_EXTENT),
            height: height.max(MIN_EXTENT),
            depth: depth.max(MIN_EXTENT),
        }
    }

    /// Computes the three face outlines, shaded from `color`.
    pub fn faces(self, color: Rgb) -> BoxFaces {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let hw = w / 2;
        let hh = h / 2;
        let o = i64::from(self.depth) / 4;
        let pt = |px: i64, py: i64| Vec2::new(px as f32, py as f32);

        let top = [
            pt(x - hw, y - hh - o),
            pt(x + hw, y - hh - o),
            pt(x + hw - o, y - hh),
            pt(x - hw - o, y - hh),
        ];
        let front = Rect::new((x - hw - o) as f32, (y - hh) as f32, w as f32, h as f32);
        let side = [
            pt(x + hw - o, y - hh),
            pt(x + hw, y - hh - o),
            pt(x + hw, y + hh - o),
            pt(x + hw - o, y + hh),
        ];

        BoxFaces { spec: self, top, front, side, color }
    }
}

/// Geometry and shading of one box, ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxFaces {
    pub spec: BoxSpec,
    pub top: [Vec2; 4],
    pub front: Rect,
    pub side: [Vec2; 4],
    /// Front-face colour; top and side derive from it.
    pub color: Rgb,
}

impl BoxFaces {
    /// Number of draw commands [`emit`](Self::emit) produces.
    pub const FACE_COUNT: usize = 3;

    pub fn is_finite(&self) -> bool {
        self.front.is_finite() && self.top.iter().chain(self.side.iter()).all(|p| p.is_finite())
    }

    /// Appends top, front and side faces, in that order.
    pub fn emit(&self, outline: &Border, out: &mut Vec<DrawCmd>) {
        out.push(DrawCmd::Polygon(PolygonCmd::new(
            self.top.to_vec(),
            self.color.brighter(),
            Some(outline.clone()),
        )));
        out.push(DrawCmd::Rect(RectCmd::filled(self.front, self.color, Some(outline.clone()))));
        out.push(DrawCmd::Polygon(PolygonCmd::new(
            self.side.to_vec(),
            self.color.darker(),
            Some(outline.clone()),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Paint;

    fn area(points: &[Vec2]) -> f32 {
        let n = points.len();
        (0..n)
            .map(|i| {
                let (p, q) = (points[i], points[(i + 1) % n]);
                p.x * q.y - q.x * p.y
            })
            .sum::<f32>()
            / 2.0
    }

    #[test]
    fn front_face_is_offset_by_quarter_depth() {
        let f = BoxSpec::new(0, 0, 40, 20, 8).faces(Rgb::WHITE);
        assert_eq!(f.front, Rect::new(-22.0, -10.0, 40.0, 20.0));
    }

    #[test]
    fn top_face_recedes_up_and_right() {
        let f = BoxSpec::new(100, 50, 40, 20, 8).faces(Rgb::WHITE);
        assert_eq!(f.top[0], Vec2::new(80.0, 38.0));
        assert_eq!(f.top[1], Vec2::new(120.0, 38.0));
        assert_eq!(f.top[2], Vec2::new(118.0, 40.0));
        assert_eq!(f.top[3], Vec2::new(78.0, 40.0));
    }

    #[test]
    fn side_face_joins_front_right_edge() {
        let f = BoxSpec::new(0, 0, 40, 20, 8).faces(Rgb::WHITE);
        let front_right = f.front.max().x;
        assert_eq!(f.side[0].x, front_right);
        assert_eq!(f.side[3].x, front_right);
        assert_eq!(f.side[3].y, f.front.max().y);
    }

    #[test]
    fn odd_sizes_truncate_halves_and_quarters() {
        let f = BoxSpec::new(0, 0, 41, 21, 11).faces(Rgb::WHITE);
        assert_eq!(f.front, Rect::new(-22.0, -10.0, 41.0, 21.0));
        assert_eq!(f.top[0], Vec2::new(-20.0, -12.0));
        assert_eq!(f.side[2], Vec2::new(20.0, 8.0));
        assert_eq!(f.side[3], Vec2::new(18.0, 10.0));
    }

    #[test]
    fn extreme_anchor_does_not_wrap() {
        let f = BoxSpec::new(i32::MAX, i32::MIN, 40, 20, 8).faces(Rgb::WHITE);
        assert!(f.top[1].x > 2.0e9);
        assert!(f.side[2].y < -2.0e9);
    }

    #[test]
    fn degenerate_box_still_has_area_on_every_face() {
        let f = BoxSpec::new(0, 0, 0, -3, 0).faces(Rgb::WHITE);
        let mut out = Vec::new();
        f.emit(&Border::outline(1.0), &mut out);
        for cmd in &out {
            match cmd {
                DrawCmd::Polygon(p) => assert!(area(&p.points).abs() > 0.0),
                DrawCmd::Rect(r) => assert!(r.rect.size.x > 0.0 && r.rect.size.y > 0.0),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn faces_are_shaded_top_bright_side_dark() {
        let base = Rgb::new(100, 100, 100);
        let mut out = Vec::new();
        BoxSpec::new(0, 0, 10, 10, 10).faces(base).emit(&Border::outline(1.0), &mut out);
        assert_eq!(out.len(), BoxFaces::FACE_COUNT);

        let fill = |cmd: &DrawCmd| match cmd {
            DrawCmd::Polygon(p) => p.paint.clone(),
            DrawCmd::Rect(r) => r.fill.clone().unwrap(),
            _ => unreachable!(),
        };
        assert_eq!(fill(&out[0]), Paint::from(base.brighter()));
        assert_eq!(fill(&out[1]), Paint::from(base));
        assert_eq!(fill(&out[2]), Paint::from(base.darker()));
    }
}
