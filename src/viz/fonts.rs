//! One-time registration of a "sans-serif" font for the `ab_glyph` text path.
//!
//! `ab_glyph` doesn't discover OS fonts, so a TTF is looked up at runtime: the
//! explicitly configured path first, then a few common system locations.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{debug, warn};
use plotters::style::{FontStyle, register_font};

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_PATH: OnceLock<PathBuf> = OnceLock::new();
static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Prefer `path` over the system locations. Only effective before the first render.
pub fn set_font_path(path: impl Into<PathBuf>) {
    let _ = FONT_PATH.set(path.into());
}

fn try_register(path: &Path) -> bool {
    let Ok(bytes) = std::fs::read(path) else {
        return false;
    };
    // plotters keeps a `'static` reference; registration happens once per process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    match register_font("sans-serif", FontStyle::Normal, bytes) {
        Ok(()) => {
            debug!("registered font {}", path.display());
            true
        }
        Err(_) => {
            warn!("{} is not a usable TTF font", path.display());
            false
        }
    }
}

/// Safe to call many times; only searches once. `false` means text is not drawn in snapshots.
pub fn ensure_fonts_registered() -> bool {
    *REGISTERED.get_or_init(|| {
        let configured = FONT_PATH.get().map(PathBuf::as_path);
        let found = configured
            .into_iter()
            .chain(SYSTEM_FONTS.iter().map(Path::new))
            .any(try_register);
        if !found {
            warn!("no TTF font found (use --font or TABPLOT_FONT); image text is skipped");
        }
        found
    })
}
