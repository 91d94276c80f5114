// File: src/geometry.rs
// Purpose: Ripple placement and offset-adjusted scroll targets

/// Bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Square ripple centred on the click point, relative to the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
        }
    }

    /// Inline style for the ripple `<span>`.
    pub fn style(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.6); \
             width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             pointer-events: none; transform: scale(0); \
             animation: ripple-animation 0.6s ease-out;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// Document scroll position that puts an element just below a fixed header.
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    element_top + page_y_offset - header_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ripple_uses_longest_side() {
        let rect = Rect { left: 10.0, top: 20.0, width: 200.0, height: 50.0 };
        let ripple = Ripple::at(rect, 60.0, 45.0);
        assert_eq!(ripple, Ripple { size: 200.0, x: -50.0, y: -75.0 });
    }

    #[test]
    fn test_ripple_style() {
        let ripple = Ripple { size: 40.0, x: 1.5, y: -2.0 };
        let style = ripple.style();
        assert!(style.contains("width: 40px; height: 40px;"));
        assert!(style.contains("left: 1.5px; top: -2px;"));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(300.0, 1200.0, 70.0), 1430.0);
    }
}
