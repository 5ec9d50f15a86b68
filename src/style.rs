use crate::{Error, Result, Role};

/// The thickest outline a polygon may be drawn with.
pub const MAX_THICKNESS: u32 = 20;

/// A color in the RGB space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 160, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<u32> for Rgb {
    /// Reads the color from the lowest 24 bits of the given value, as `0xRRGGBB`.
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        u32::from_be_bytes([0, color.red, color.green, color.blue])
    }
}

/// How the outline of a polygon is presented.
///
/// Styles are opaque metadata carried next to the geometry, nothing in this crate draws them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    color: Rgb,
    thickness: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            thickness: 1,
        }
    }
}

impl Style {
    /// The default style of subject polygons and their holes.
    pub const SUBJECT: Self = Self {
        color: Rgb::BLUE,
        thickness: 2,
    };

    /// The default style of clip polygons.
    pub const CLIP: Self = Self {
        color: Rgb::RED,
        thickness: 2,
    };

    /// The default style of the intersection between subject and clip.
    pub const INTERSECTION: Self = Self {
        color: Rgb::GREEN,
        thickness: 3,
    };

    /// Returns a style with the given color and thickness, failing if the thickness is not in
    /// the range `1..=MAX_THICKNESS`.
    pub fn new(color: Rgb, thickness: u32) -> Result<Self> {
        Self::default().with_color(color).with_thickness(thickness)
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_thickness(mut self, thickness: u32) -> Result<Self> {
        if !(1..=MAX_THICKNESS).contains(&thickness) {
            return Err(Error::Thickness {
                thickness,
                max: MAX_THICKNESS,
            });
        }

        self.thickness = thickness;
        Ok(self)
    }
}

/// The styles the polygons of a scene, and the outline of their intersection, are presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Styles {
    /// The style of the subject polygon and its hole.
    pub subject: Style,
    pub clip: Style,
    pub intersection: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            subject: Style::SUBJECT,
            clip: Style::CLIP,
            intersection: Style::INTERSECTION,
        }
    }
}

impl Styles {
    /// Returns the style of the polygon playing the given role.
    pub fn of(&self, role: Role) -> Style {
        match role {
            Role::Subject | Role::Hole => self.subject,
            Role::Clip => self.clip,
        }
    }

    /// Returns a mutable reference to the style of the polygon playing the given role.
    pub fn of_mut(&mut self, role: Role) -> &mut Style {
        match role {
            Role::Subject | Role::Hole => &mut self.subject,
            Role::Clip => &mut self.clip,
        }
    }
}
