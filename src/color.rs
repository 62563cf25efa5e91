use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };
pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };
pub const RED: Rgba = Rgba { r: 255, g: 0, b: 0, a: 255 };
pub const BLUE: Rgba = Rgba { r: 0, g: 0, b: 255, a: 255 };

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r: r, g: g, b: b, a: a }
    }

    /// Midpoint of two colors, see `average`.
    #[inline]
    pub fn blend(self, other: Rgba) -> Rgba {
        average(&[self, other])
    }

    /// `#rrggbb` form used in SVG fills. Alpha is dropped.
    pub fn hex(&self) -> Hex {
        Hex(*self)
    }
}

/// Truncating mean of the RGB channels; the result is always opaque.
pub fn average(colors: &[Rgba]) -> Rgba {
    assert!(!colors.is_empty(), "cannot average an empty set of colors");
    let (r, g, b) = colors.iter().fold((0usize, 0usize, 0usize), |(r, g, b), color| {
        (r + color.r as usize, g + color.g as usize, b + color.b as usize)
    });
    let count = colors.len();
    Rgba::new((r / count) as u8, (g / count) as u8, (b / count) as u8, 255)
}

pub struct Hex(Rgba);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}
