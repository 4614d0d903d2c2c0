// Scroll reveal for cards and text blocks. Elements start hidden and shifted
// down, and fade into place the first time enough of them is on screen.

pub const REVEAL_SELECTOR: &str =
    ".skill-card, .project-card, .text-block, .contact-method, .contact-link";
pub const REVEAL_THRESHOLD: f64 = 0.1;
// The viewport's bottom edge is pulled up by this much when checking
pub const REVEAL_BOTTOM_MARGIN: f64 = 100.0;
pub const STAGGER_SECONDS: f64 = 0.1;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

// Fraction of an element's height inside [0, viewport_height - bottom_margin]
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible_bottom = viewport_height - bottom_margin;
    let overlap = (top + height).min(visible_bottom) - top.max(0.0);
    (overlap / height).max(0.0).min(1.0)
}

pub fn is_revealed(top: f64, height: f64, viewport_height: f64) -> bool {
    let fraction = visible_fraction(top, height, viewport_height, REVEAL_BOTTOM_MARGIN);
    fraction > 0.0 && fraction >= REVEAL_THRESHOLD
}

// Later elements in document order start their transition a little later
pub fn transition(index: usize) -> String {
    let delay = index as f64 * STAGGER_SECONDS;
    format!(
        "opacity 0.6s ease {}s, transform 0.6s ease {}s",
        format_seconds(delay),
        format_seconds(delay)
    )
}

fn format_seconds(seconds: f64) -> String {
    // Round off float noise such as 0.30000000000000004
    let rounded = (seconds * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}
