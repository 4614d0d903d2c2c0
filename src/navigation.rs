// Scroll geometry for the navigation bar: which section is active, when the
// bar switches to its compact style, and how far the page has scrolled.

pub const SCROLLED_THRESHOLD: f64 = 50.0;
// Sections count as active a little before their top reaches the viewport
pub const SECTION_OFFSET: f64 = 100.0;
// Height of the fixed navbar, anchor targets land just below it
pub const ANCHOR_OFFSET: f64 = 80.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

// The last section whose (offset) span contains `scroll_y`, if any
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&Section> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - SECTION_OFFSET;
            scroll_y > top && scroll_y <= top + section.height
        })
        .last()
}

pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - ANCHOR_OFFSET
}

// Percentage of the scrollable distance already scrolled
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).max(0.0).min(100.0)
}

// `href="#about"` -> `about`
pub fn anchor_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> Section {
        Section {
            id: id.to_owned(),
            top,
            height,
        }
    }

    fn page() -> Vec<Section> {
        vec![
            section("home", 0.0, 800.0),
            section("about", 800.0, 600.0),
            section("contact", 1400.0, 500.0),
        ]
    }

    #[test]
    fn scrolled_after_50px() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn picks_section_under_scroll_position() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0).map(|s| s.id.as_str()), Some("home"));
        // "about" becomes active 100px before its top
        assert_eq!(active_section(&sections, 699.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(active_section(&sections, 701.0).map(|s| s.id.as_str()), Some("about"));
        assert_eq!(active_section(&sections, 1350.0).map(|s| s.id.as_str()), Some("contact"));
    }

    #[test]
    fn no_section_past_the_end() {
        assert_eq!(active_section(&page(), 5000.0), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_last() {
        let sections = vec![section("a", 0.0, 1000.0), section("b", 300.0, 200.0)];
        assert_eq!(active_section(&sections, 250.0).map(|s| s.id.as_str()), Some("b"));
    }

    #[test]
    fn progress_percentage() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_scroll_target(880.0), 800.0);
        assert_eq!(anchor_id("#about"), Some("about"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/blog"), None);
    }
}
