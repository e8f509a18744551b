//! Fixed color vocabulary and the composite color-buffer registry.
//!
//! Ten base colors, combined with the five shape kinds into registry keys
//! like `"redCube"` — one key per precomputed color buffer on the renderer
//! side. The table is immutable for the process lifetime.

use crate::ShapeKind;

/// Base color table: name -> RGB in [0, 1]
pub const BASE_COLORS: [(&str, [f32; 3]); 10] = [
    ("red", [1.0, 0.0, 0.0]),
    ("green", [0.0, 1.0, 0.0]),
    ("blue", [0.0, 0.0, 1.0]),
    ("yellow", [1.0, 1.0, 0.0]),
    ("cyan", [0.0, 1.0, 1.0]),
    ("magenta", [1.0, 0.0, 1.0]),
    ("black", [0.0, 0.0, 0.0]),
    ("orange", [1.0, 0.5, 0.0]),
    ("purple", [0.5, 0.0, 0.5]),
    ("gray", [0.4, 0.4, 0.4]),
];

/// Render-time fallback for names that resolve nowhere
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Look up a base color by name, case-insensitively.
pub fn base_color(name: &str) -> Option<[f32; 3]> {
    BASE_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, rgb)| *rgb)
}

/// Build the composite registry key for a base color and shape, e.g.
/// `color_key("red", ShapeKind::Cube)` -> `"redCube"`.
pub fn color_key(color: &str, shape: ShapeKind) -> String {
    format!("{}{}", color, shape.key_suffix())
}

/// Match `input` against the registry case-insensitively and return the
/// canonical key. `None` if it names no registry entry.
pub fn canonical_color_key(input: &str) -> Option<String> {
    for (name, _) in BASE_COLORS {
        for shape in ShapeKind::ALL {
            let key = color_key(name, shape);
            if key.eq_ignore_ascii_case(input) {
                return Some(key);
            }
        }
    }
    None
}

/// Resolve a composite key to its RGB value. Unknown keys fall back to
/// white rather than failing; stale keys can reach the renderer through
/// legacy save files.
pub fn resolve_color(key: &str) -> [f32; 3] {
    for (name, rgb) in BASE_COLORS {
        for shape in ShapeKind::ALL {
            if color_key(name, shape).eq_ignore_ascii_case(key) {
                return rgb;
            }
        }
    }
    WHITE
}

/// Resolve a background color name. The background is never validated on
/// input, so unknown names resolve to white here.
pub fn resolve_background(name: &str) -> [f32; 3] {
    base_color(name).unwrap_or(WHITE)
}
