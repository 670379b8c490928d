// CLI subcommand handlers. main.rs parses arguments and dispatches here.

pub mod asteroids;
pub mod impact;

use impactsim_cli::terminal::ColorPalette;

/// Palette for text output, honoring `--no-color` before terminal detection.
pub fn palette(no_color: bool) -> ColorPalette {
    if no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    }
}
