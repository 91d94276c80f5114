// File: src/menu.rs
// Purpose: Two-state burger menu transitions

/// Open/closed state of the collapsible navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs the burger menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// Click on the toggler.
    Toggle,
    /// Escape pressed anywhere in the document.
    Escape,
    /// A navigation link inside the menu was followed.
    LinkClicked,
    /// Viewport width after a (debounced) resize.
    Resized { width: f64 },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Value for the toggler's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    /// Next state after `event`. Menus at or above `desktop_breakpoint`
    /// are always shown inline, so a resize past it closes the overlay.
    pub fn next(self, event: MenuEvent, desktop_breakpoint: f64) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (MenuState::Open, MenuEvent::Escape) | (MenuState::Open, MenuEvent::LinkClicked) => {
                MenuState::Closed
            }
            (MenuState::Open, MenuEvent::Resized { width }) if width >= desktop_breakpoint => {
                MenuState::Closed
            }
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BREAKPOINT: f64 = 1024.0;

    #[rstest]
    #[case(MenuState::Closed, MenuEvent::Toggle, MenuState::Open)]
    #[case(MenuState::Open, MenuEvent::Toggle, MenuState::Closed)]
    #[case(MenuState::Open, MenuEvent::Escape, MenuState::Closed)]
    #[case(MenuState::Closed, MenuEvent::Escape, MenuState::Closed)]
    #[case(MenuState::Open, MenuEvent::LinkClicked, MenuState::Closed)]
    #[case(MenuState::Closed, MenuEvent::LinkClicked, MenuState::Closed)]
    #[case(MenuState::Open, MenuEvent::Resized { width: 1024.0 }, MenuState::Closed)]
    #[case(MenuState::Open, MenuEvent::Resized { width: 1023.0 }, MenuState::Open)]
    #[case(MenuState::Closed, MenuEvent::Resized { width: 1920.0 }, MenuState::Closed)]
    fn test_transitions(#[case] from: MenuState, #[case] event: MenuEvent, #[case] to: MenuState) {
        assert_eq!(from.next(event, BREAKPOINT), to);
    }

    #[test]
    fn test_aria_expanded() {
        assert_eq!(MenuState::default().aria_expanded(), "false");
        assert_eq!(MenuState::Open.aria_expanded(), "true");
    }
}
