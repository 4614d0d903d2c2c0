// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const ACCENT: Color = Color::from_u32(0x00d4ffff);
    pub const VIOLET: Color = Color::from_u32(0x7b2ff7ff);
    pub const PINK: Color = Color::from_u32(0xf72585ff);
    pub const ROSE: Color = Color::from_u32(0xff006eff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas style string, the color's own alpha is scaled by `alpha`
    pub fn to_css_rgba(self, alpha: f64) -> String {
        let alpha = (self.a as f64 / 255.0) * alpha.max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Hover color for a skill card's `data-skill` attribute
pub fn skill_color(skill: &str) -> Color {
    match skill {
        "Frontend" => Color::ACCENT,
        "Backend" => Color::VIOLET,
        "Database" => Color::PINK,
        "Tools" => Color::ROSE,
        _ => Color::ACCENT,
    }
}
