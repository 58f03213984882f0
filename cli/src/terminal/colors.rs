use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 110, g: 190, b: 255 };
pub const SECONDARY: Color = Color::TrueColor { r: 190, g: 160, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const REQUIRED: Color = Color::TrueColor { r: 240, g: 110, b: 110 };
pub const OPTIONAL: Color = Color::TrueColor { r: 140, g: 200, b: 140 };
