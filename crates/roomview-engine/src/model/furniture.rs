use std::fmt;

use crate::error::RenderError;
use crate::paint::Rgb;

use super::PlanMapping;

/// Smallest extent any box dimension is allowed to reach, in centimetres.
pub const MIN_EXTENT: i32 = 1;
/// Largest absolute coordinate or dimension an item may have and still be drawn.
pub const MAX_EXTENT: i32 = 1 << 20;

/// Stable identifier assigned by the scene model.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Catalogue variant of a table. All share the table geometry.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TableStyle {
    #[default]
    Plain,
    Dining,
    Coffee,
}

/// Furniture category. Selects the procedural geometry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FurnitureKind {
    Table(TableStyle),
    Chair,
    Sofa,
    Bed,
    Wardrobe,
    Lamp,
    /// No dedicated geometry; drawn as a single unlit box.
    Unknown,
}

impl FurnitureKind {
    /// Parses a catalogue name. Unrecognized names map to [`FurnitureKind::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Table" => FurnitureKind::Table(TableStyle::Plain),
            "Dining Table" => FurnitureKind::Table(TableStyle::Dining),
            "Coffee Table" => FurnitureKind::Table(TableStyle::Coffee),
            "Chair" => FurnitureKind::Chair,
            "Sofa" => FurnitureKind::Sofa,
            "Bed" => FurnitureKind::Bed,
            "Wardrobe" => FurnitureKind::Wardrobe,
            "Lamp" => FurnitureKind::Lamp,
            _ => FurnitureKind::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FurnitureKind::Table(TableStyle::Plain) => "Table",
            FurnitureKind::Table(TableStyle::Dining) => "Dining Table",
            FurnitureKind::Table(TableStyle::Coffee) => "Coffee Table",
            FurnitureKind::Chair => "Chair",
            FurnitureKind::Sofa => "Sofa",
            FurnitureKind::Bed => "Bed",
            FurnitureKind::Wardrobe => "Wardrobe",
            FurnitureKind::Lamp => "Lamp",
            FurnitureKind::Unknown => "Unknown",
        }
    }

    /// Default plan footprint `(width, height)` offered by the catalogue.
    pub fn catalogue_size(self) -> Option<(i32, i32)> {
        match self {
            FurnitureKind::Table(TableStyle::Dining) => Some((120, 80)),
            FurnitureKind::Table(TableStyle::Coffee) => Some((80, 60)),
            FurnitureKind::Chair => Some((40, 40)),
            FurnitureKind::Sofa => Some((150, 60)),
            FurnitureKind::Bed => Some((160, 200)),
            FurnitureKind::Wardrobe => Some((100, 50)),
            FurnitureKind::Table(TableStyle::Plain) | FurnitureKind::Lamp | FurnitureKind::Unknown => None,
        }
    }

    /// Depth derived from a plan footprint when the editor creates an item.
    pub fn derived_depth(self, width: i32, height: i32) -> i32 {
        match self {
            FurnitureKind::Chair => width,
            FurnitureKind::Sofa => width / 3,
            FurnitureKind::Bed => height / 4,
            _ => width / 2,
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Room-relative position: `y` is height above the floor, `z` is depth from the viewer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32, depth: i32) -> Self {
        Self { width, height, depth }
    }

    /// Every dimension raised to at least [`MIN_EXTENT`].
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.width.max(MIN_EXTENT),
            self.height.max(MIN_EXTENT),
            self.depth.max(MIN_EXTENT),
        )
    }

    /// Multiplies every dimension by `factor`, truncating to whole centimetres.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        let s = |v: i32| (v as f32 * factor) as i32;
        Self::new(s(self.width), s(self.height), s(self.depth))
    }
}

/// One piece of furniture in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureItem {
    /// Assigned by `SceneModel::add_item`; zero until then.
    pub id: ItemId,
    pub kind: FurnitureKind,
    pub position: Position,
    pub size: Size,
    pub color: Rgb,
    /// Uniform multiplier on all three dimensions. `None` means 1.0.
    pub scale: Option<f32>,
}

impl FurnitureItem {
    pub fn new(kind: FurnitureKind, position: Position, size: Size, color: Rgb) -> Self {
        Self { id: ItemId::default(), kind, position, size, color, scale: None }
    }

    /// Creates an item dropped onto the floor plan at pixel `(plan_x, plan_y)`.
    ///
    /// The item sits on the floor; its depth comes from [`FurnitureKind::derived_depth`].
    pub fn from_plan(
        kind: FurnitureKind,
        mapping: PlanMapping,
        plan_x: i32,
        plan_y: i32,
        width: i32,
        height: i32,
        color: Rgb,
    ) -> Self {
        let (x, z) = mapping.to_world(plan_x, plan_y);
        let depth = kind.derived_depth(width, height);
        Self::new(kind, Position::new(x, 0, z), Size::new(width, height, depth), color)
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Size after applying `scale`, clamped to [`MIN_EXTENT`].
    ///
    /// Fails when the scale is not a finite positive number; such an item
    /// cannot be drawn at all.
    pub fn effective_size(&self) -> Result<Size, RenderError> {
        let size = match self.scale {
            None => self.size,
            Some(s) if s.is_finite() && s > 0.0 => self.size.scaled(s),
            Some(s) => return Err(RenderError::DegenerateScale { id: self.id, scale: s }),
        };
        Ok(size.clamped())
    }

    /// [`effective_size`](Self::effective_size), additionally requiring the
    /// position and size to stay within [`MAX_EXTENT`].
    pub fn drawable_size(&self) -> Result<Size, RenderError> {
        let size = self.effective_size()?;
        let p = self.position;
        let in_range = [p.x, p.y, p.z, size.width, size.height, size.depth]
            .iter()
            .all(|v| v.abs() <= MAX_EXTENT);
        if in_range { Ok(size) } else { Err(RenderError::OutOfRange { id: self.id }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── kinds ─────────────────────────────────────────────────────────────

    #[test]
    fn table_variants_share_table_kind() {
        for name in ["Table", "Dining Table", "Coffee Table"] {
            assert!(matches!(FurnitureKind::from_name(name), FurnitureKind::Table(_)));
        }
    }

    #[test]
    fn unrecognized_name_falls_back_to_unknown() {
        assert_eq!(FurnitureKind::from_name("Piano"), FurnitureKind::Unknown);
        assert_eq!(FurnitureKind::from_name(""), FurnitureKind::Unknown);
    }

    #[test]
    fn names_round_trip() {
        for kind in [
            FurnitureKind::Table(TableStyle::Coffee),
            FurnitureKind::Chair,
            FurnitureKind::Bed,
            FurnitureKind::Lamp,
        ] {
            assert_eq!(FurnitureKind::from_name(kind.name()), kind);
        }
    }

    // ── plan creation ─────────────────────────────────────────────────────

    #[test]
    fn from_plan_maps_position_and_derives_depth() {
        let chair = FurnitureItem::from_plan(
            FurnitureKind::Chair,
            PlanMapping::default(),
            100,
            100,
            40,
            40,
            Rgb::new(139, 69, 19),
        );
        assert_eq!(chair.position, Position::new(-150, 0, -100));
        assert_eq!(chair.size, Size::new(40, 40, 40));

        let bed = FurnitureItem::from_plan(
            FurnitureKind::Bed,
            PlanMapping::default(),
            0,
            0,
            160,
            200,
            Rgb::WHITE,
        );
        assert_eq!(bed.size.depth, 50);
    }

    // ── effective size ────────────────────────────────────────────────────

    #[test]
    fn scale_multiplies_all_dimensions() {
        let item = FurnitureItem::new(
            FurnitureKind::Sofa,
            Position::default(),
            Size::new(150, 60, 50),
            Rgb::WHITE,
        )
        .with_scale(1.5);
        assert_eq!(item.effective_size().unwrap(), Size::new(225, 90, 75));
    }

    #[test]
    fn zero_and_negative_dimensions_are_clamped() {
        let item = FurnitureItem::new(
            FurnitureKind::Unknown,
            Position::default(),
            Size::new(0, -5, 3),
            Rgb::WHITE,
        );
        assert_eq!(item.effective_size().unwrap(), Size::new(1, 1, 3));
    }

    #[test]
    fn non_finite_scale_is_rejected() {
        let item = FurnitureItem::new(
            FurnitureKind::Chair,
            Position::default(),
            Size::new(40, 40, 40),
            Rgb::WHITE,
        )
        .with_scale(f32::NAN);
        assert!(matches!(item.effective_size(), Err(RenderError::DegenerateScale { .. })));
    }

    #[test]
    fn far_away_item_is_not_drawable() {
        let mut item = FurnitureItem::new(
            FurnitureKind::Lamp,
            Position::new(MAX_EXTENT + 1, 0, 0),
            Size::new(40, 160, 40),
            Rgb::WHITE,
        );
        assert!(matches!(item.drawable_size(), Err(RenderError::OutOfRange { .. })));
        item.position.x = MAX_EXTENT;
        assert_eq!(item.drawable_size(), Ok(Size::new(40, 160, 40)));
    }
}
