use std::fmt;

use macroquad::color::Color;
use macroquad::math::Rect;

use super::{Context2d, to_hex8};

/// Content that knows how to draw itself into a cell rectangle
pub trait Drawable {
    fn draw(&self, ctx: &mut dyn Context2d, rect: Rect);
}

impl<F> Drawable for F
where
    F: Fn(&mut dyn Context2d, Rect),
{
    fn draw(&self, ctx: &mut dyn Context2d, rect: Rect) {
        self(ctx, rect);
    }
}

/// How a cell's content shows up on screen
pub enum Appearance<'a> {
    /// Fill the whole cell with a colour
    Fill(Color),
    /// Hand the cell rectangle to the content's own draw routine
    Custom(&'a dyn Drawable),
    /// Nothing to draw
    Inert,
}

/// Trait for values that can sit in a renderable grid.
/// The renderer asks once per cell and dispatches on the answer.
pub trait Paint {
    fn appearance(&self) -> Appearance<'_>;
}

impl Paint for Color {
    fn appearance(&self) -> Appearance<'_> {
        Appearance::Fill(*self)
    }
}

/// Ready-made cell content covering the three render cases
pub enum CellContent {
    Color(Color),
    Custom(Box<dyn Drawable>),
    /// Carried data the renderer ignores
    Inert,
}

impl CellContent {
    pub fn custom(drawable: impl Drawable + 'static) -> Self {
        Self::Custom(Box::new(drawable))
    }

    /// The fill colour, if this is colour content
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }
}

impl Paint for CellContent {
    fn appearance(&self) -> Appearance<'_> {
        match self {
            Self::Color(color) => Appearance::Fill(*color),
            Self::Custom(drawable) => Appearance::Custom(drawable.as_ref()),
            Self::Inert => Appearance::Inert,
        }
    }
}

impl From<Color> for CellContent {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl fmt::Debug for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "Color({})", to_hex8(*color)),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Inert => f.write_str("Inert"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::RecordingContext;
    use macroquad::color::{BLUE, RED};

    #[test]
    fn test_color_is_a_fill() {
        assert!(matches!(RED.appearance(), Appearance::Fill(c) if c == RED));
    }

    #[test]
    fn test_content_dispatch() {
        assert!(matches!(CellContent::from(BLUE).appearance(), Appearance::Fill(c) if c == BLUE));
        assert!(matches!(CellContent::Inert.appearance(), Appearance::Inert));

        let custom = CellContent::custom(|ctx: &mut dyn Context2d, rect: Rect| ctx.fill_rect(rect));
        let Appearance::Custom(drawable) = custom.appearance() else {
            panic!("expected custom appearance");
        };
        let mut ctx = RecordingContext::new();
        drawable.draw(&mut ctx, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(ctx.fills().len(), 1);
    }

    #[test]
    fn test_debug_uses_hex() {
        let teal = Color::from_rgba(0x12, 0x34, 0x56, 0xff);
        assert_eq!(format!("{:?}", CellContent::Color(teal)), "Color(#123456ff)");
        assert_eq!(CellContent::Inert.color(), None);
    }
}
