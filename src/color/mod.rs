mod hex;

use smart_leds::RGB8;

pub use hex::{parse_color, scale_channel};

pub type Rgb = RGB8;

/// All channels at full intensity
pub const WHITE: &str = "FFFFFF";
/// Red channel only
pub const RED: &str = "FF0000";
/// Green channel only
pub const GREEN: &str = "00FF00";
/// Blue channel only
pub const BLUE: &str = "0000FF";
/// All channels dark
pub const OFF: &str = "000000";
