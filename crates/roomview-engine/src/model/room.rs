use crate::error::InputError;
use crate::paint::Rgb;

use super::MAX_EXTENT;

/// The L-shape cut removes `NUMERATOR/DENOMINATOR` of each floor axis.
pub const L_CUT_NUMERATOR: i32 = 2;
pub const L_CUT_DENOMINATOR: i32 = 3;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RoomShape {
    #[default]
    Rectangle,
    Square,
    LShape,
}

impl RoomShape {
    /// Parses the shape names offered by the room form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Rectangle" => Some(RoomShape::Rectangle),
            "Square" => Some(RoomShape::Square),
            "L-Shape" => Some(RoomShape::LShape),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoomShape::Rectangle => "Rectangle",
            RoomShape::Square => "Square",
            RoomShape::LShape => "L-Shape",
        }
    }
}

/// Room dimensions in centimetres plus shape and wall/floor colour.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RoomSpec {
    width: u32,
    length: u32,
    height: u32,
    pub shape: RoomShape,
    pub color: Rgb,
}

impl Default for RoomSpec {
    fn default() -> Self {
        Self {
            width: 500,
            length: 400,
            height: 250,
            shape: RoomShape::Rectangle,
            color: Rgb::WHITE,
        }
    }
}

impl RoomSpec {
    /// Creates a room; every dimension must lie in `1..=MAX_EXTENT`.
    pub fn new(width: u32, length: u32, height: u32, shape: RoomShape, color: Rgb) -> Result<Self, InputError> {
        in_range("width", i64::from(width))?;
        in_range("length", i64::from(length))?;
        in_range("height", i64::from(height))?;
        Ok(Self { width, length, height, shape, color })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Replaces the dimensions, rejecting any out-of-range value without
    /// touching the current ones.
    pub fn set_dimensions(&mut self, width: u32, length: u32, height: u32) -> Result<(), InputError> {
        *self = Self::new(width, length, height, self.shape, self.color)?;
        Ok(())
    }

    /// Parses the three text fields of the room form.
    pub fn parse_dimensions(width: &str, length: &str, height: &str) -> Result<(u32, u32, u32), InputError> {
        Ok((
            parse_field("width", width)?,
            parse_field("length", length)?,
            parse_field("height", height)?,
        ))
    }

    /// Floor extent `(width, length)` as drawn. Square rooms use the larger
    /// side on both axes.
    pub fn floor_extent(&self) -> (i32, i32) {
        let (w, l) = (extent(self.width), extent(self.length));
        match self.shape {
            RoomShape::Square => {
                let side = w.max(l);
                (side, side)
            }
            RoomShape::Rectangle | RoomShape::LShape => (w, l),
        }
    }

    /// Size `(width, length)` of the rectangle removed from an L-shaped room,
    /// truncated to whole centimetres. `None` for other shapes.
    pub fn l_cut(&self) -> Option<(i32, i32)> {
        match self.shape {
            RoomShape::LShape => {
                let (w, l) = self.floor_extent();
                Some((two_thirds(w), two_thirds(l)))
            }
            RoomShape::Rectangle | RoomShape::Square => None,
        }
    }

    /// Named colour presets offered by the room form.
    pub fn color_preset(name: &str) -> Option<Rgb> {
        match name.trim() {
            "White" => Some(Rgb::WHITE),
            "Beige" => Some(Rgb::new(245, 245, 220)),
            "Grey" => Some(Rgb::LIGHT_GRAY),
            "Blue" => Some(Rgb::new(173, 216, 230)),
            "Green" => Some(Rgb::new(144, 238, 144)),
            _ => None,
        }
    }
}

fn in_range(field: &'static str, value: i64) -> Result<(), InputError> {
    let max = i64::from(MAX_EXTENT);
    if value <= 0 {
        Err(InputError::NotPositive { field, value })
    } else if value > max {
        Err(InputError::TooLarge { field, value, max })
    } else {
        Ok(())
    }
}

/// Stored dimensions never exceed [`MAX_EXTENT`].
fn extent(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(MAX_EXTENT).min(MAX_EXTENT)
}

fn two_thirds(v: i32) -> i32 {
    let cut = i64::from(v) * i64::from(L_CUT_NUMERATOR) / i64::from(L_CUT_DENOMINATOR);
    i32::try_from(cut).unwrap_or(MAX_EXTENT)
}

fn parse_field(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber { field, value: raw.to_owned() })?;
    in_range(field, value)?;
    u32::try_from(value).map_err(|_| InputError::TooLarge { field, value, max: i64::from(MAX_EXTENT) })
}
