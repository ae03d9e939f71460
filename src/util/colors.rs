use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0012b5e5);
pub const SECONDARY: Color = Color::from_u32(0x000b6f8c);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x00feca88);

pub const MOVIES: Color = Color::from_u32(0x00e5a50a);
pub const TV: Color = Color::from_u32(0x0033d17a);
pub const MUSIC_VIDEOS: Color = Color::from_u32(0x00c061cb);
pub const FAVOURITES: Color = Color::from_u32(0x00e01b24);
pub const SETTINGS: Color = Color::from_u32(0x009a9996);
