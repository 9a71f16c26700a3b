use anyhow::Result;

use zonemap_engine::logging::{init_logging, LoggingConfig};
use zonemap_painter::Painter;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut painter = Painter::new()
        .title("Urban Zoning Map - Flood Fill and Clipping")
        .size(800.0, 600.0)
        .target_fps(60);

    match load_font() {
        Some(bytes) => painter = painter.font(bytes),
        None => log::warn!("no system font found; labels and instructions will not be drawn"),
    }

    painter.run()
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
