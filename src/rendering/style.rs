use macroquad::color::{BLACK, Color, WHITE};

/// Colours and line settings used by a render pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    /// Fill applied to the whole surface before cells are drawn
    pub background: Color,
    pub gridline: Color,
    pub gridline_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            gridline: BLACK,
            gridline_width: 1.0,
        }
    }
}

/// Serialize a colour as `#rrggbbaa`
pub fn to_hex8(color: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a)
    )
}
