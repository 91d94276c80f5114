// File: src/reveal.rs
// Purpose: Scroll-reveal targets and staggered transitions

/// Elements that fade in when they scroll into view.
pub const REVEAL_SELECTORS: &[&str] = &[
    ".card",
    ".c-card",
    "h1",
    "h2",
    "h3",
    ".btn",
    ".c-button",
    ".form-control",
    ".accordion",
    "img:not(.c-logo__img)",
    "p",
    ".lead",
];

/// Class added once an element has intersected the viewport.
pub const VISIBLE_CLASS: &str = "is-visible";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";

pub const ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const THRESHOLD: f64 = 0.1;

/// Transition for the `index`-th element matched by a selector; each one
/// starts a tenth of a second after the previous.
pub fn reveal_transition(index: usize) -> String {
    format!("all 0.8s cubic-bezier(0.4, 0, 0.2, 1) {}s", index as f64 / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(reveal_transition(0), "all 0.8s cubic-bezier(0.4, 0, 0.2, 1) 0s");
        assert_eq!(reveal_transition(3), "all 0.8s cubic-bezier(0.4, 0, 0.2, 1) 0.3s");
        assert_eq!(reveal_transition(12), "all 0.8s cubic-bezier(0.4, 0, 0.2, 1) 1.2s");
    }
}
