use regex::Regex;
use std::sync::LazyLock;

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#[0-9a-f]{6}$").expect("hex colour pattern compiles")
});

/// `#RRGGBB`, case-insensitive, nothing else.
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR_RE.is_match(s)
}

fn channels(hex: &str) -> Option<[u8; 3]> {
    if !is_hex_color(hex) {
        return None;
    }
    let ch = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([ch(1)?, ch(3)?, ch(5)?])
}

/// Per-channel linear blend from `a` (factor 0) to `b` (factor 1), returned
/// as lowercase `#rrggbb`.
///
/// If either colour is not strict `#RRGGBB`, `a` is returned untouched.
/// `factor` is not checked; values outside `[0, 1]` saturate each channel.
pub fn interpolate(a: &str, b: &str, factor: f64) -> String {
    let (Some(from), Some(to)) = (channels(a), channels(b)) else {
        return a.to_string();
    };
    let mix = |i: usize| {
        let (x, y) = (from[i] as f64, to[i] as f64);
        (x + factor * (y - x)).round() as u8
    };
    format!("#{:02x}{:02x}{:02x}", mix(0), mix(1), mix(2))
}
