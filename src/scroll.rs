use crate::constants::*;

/// Id of the section the reader is in: the last one whose top, less
/// `offset`, has scrolled past. Sections are in document order.
pub fn active_section<'a>(scroll_y: f64, sections: &[(&'a str, f64)], offset: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - offset)
        .map(|(id, _)| *id)
        .last()
}

/// Whether a nav link `href` points at section `id`.
#[inline]
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

#[inline]
pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

/// Scroll position as a fraction of the scrollable range; 0 when the page
/// does not scroll.
#[inline]
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let range = scroll_height - inner_height;
    if range > 0.0 {
        (scroll_y / range).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Base hue of the page tint, cyan at the top shifting to purple.
#[inline]
pub fn gradient_hue(fraction: f64) -> f64 {
    GRADIENT_BASE_HUE + fraction * GRADIENT_HUE_SPAN
}

pub fn gradient_css(hue: f64) -> String {
    format!(
        "radial-gradient(circle at 20% 50%, hsla({}, 100%, 50%, 0.1) 0%, transparent 50%), \
         radial-gradient(circle at 80% 20%, hsla({}, 100%, 50%, 0.1) 0%, transparent 50%), \
         radial-gradient(circle at 40% 80%, hsla({}, 100%, 50%, 0.1) 0%, transparent 50%)",
        hue,
        hue + 60.0,
        hue + 120.0
    )
}
