use ratatui::style::Color;

pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SELECTED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const HIGHLIGHT_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LOADING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const SUMMARY_ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
