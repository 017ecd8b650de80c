use log::debug;

/// Open/closed state of the collapsible navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// Everything that can move the navigation panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Toggle,
    Escape,
    BackdropClick,
    LinkClick,
}

impl NavEvent {
    /// Maps a `KeyboardEvent.key` value. Only Escape means anything to the nav.
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(NavEvent::Escape)
    }
}

impl NavState {
    pub fn apply(self, event: NavEvent) -> Self {
        let next = match (self, event) {
            (NavState::Closed, NavEvent::Toggle) => NavState::Open,
            (NavState::Open, NavEvent::Toggle) => NavState::Closed,
            (_, NavEvent::Escape | NavEvent::BackdropClick | NavEvent::LinkClick) => self.close(),
        };
        if next != self {
            debug!("nav {:?} -> {:?} on {:?}", self, next, event);
        }
        next
    }

    pub fn toggle(self) -> Self {
        self.apply(NavEvent::Toggle)
    }

    pub fn close(self) -> Self {
        NavState::Closed
    }

    pub fn is_open(self) -> bool {
        self == NavState::Open
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    pub fn panel_class(self) -> &'static str {
        if self.is_open() { "nav-panel open" } else { "nav-panel" }
    }

    pub fn backdrop_class(self) -> &'static str {
        if self.is_open() { "nav-backdrop show" } else { "nav-backdrop" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_closed() {
        assert_eq!(NavState::default(), NavState::Closed);
        assert!(!NavState::default().is_open());
    }

    #[test]
    fn toggle_opens_then_closes() {
        let open = NavState::Closed.toggle();
        assert_eq!(open, NavState::Open);
        assert_eq!(open.toggle(), NavState::Closed);
    }

    #[test]
    fn toggle_is_the_toggle_event() {
        for state in [NavState::Closed, NavState::Open] {
            assert_eq!(state.toggle(), state.apply(NavEvent::Toggle));
        }
    }

    #[test]
    fn escape_closes_open_panel_and_keeps_closed_one_closed() {
        assert_eq!(NavState::Open.apply(NavEvent::Escape), NavState::Closed);
        assert_eq!(NavState::Closed.apply(NavEvent::Escape), NavState::Closed);
    }

    #[test]
    fn backdrop_and_link_clicks_close() {
        for event in [NavEvent::BackdropClick, NavEvent::LinkClick] {
            assert_eq!(NavState::Open.apply(event), NavState::Closed);
            assert_eq!(NavState::Closed.apply(event), NavState::Closed);
        }
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(NavState::Open.close(), NavState::Closed);
        assert_eq!(NavState::Open.close().close(), NavState::Closed);
    }

    #[test]
    fn only_escape_key_maps_to_an_event() {
        assert_eq!(NavEvent::from_key("Escape"), Some(NavEvent::Escape));
        assert_eq!(NavEvent::from_key("Esc"), None);
        assert_eq!(NavEvent::from_key("Enter"), None);
        assert_eq!(NavEvent::from_key(""), None);
    }

    #[test]
    fn observable_attributes_follow_state() {
        assert_eq!(NavState::Open.aria_expanded(), "true");
        assert_eq!(NavState::Closed.aria_expanded(), "false");
        assert_eq!(NavState::Open.panel_class(), "nav-panel open");
        assert_eq!(NavState::Closed.panel_class(), "nav-panel");
        assert_eq!(NavState::Open.backdrop_class(), "nav-backdrop show");
        assert_eq!(NavState::Closed.backdrop_class(), "nav-backdrop");
    }

    proptest! {
        #[test]
        fn even_number_of_toggles_is_identity(pairs in 0usize..64, start_open in any::<bool>()) {
            let start = if start_open { NavState::Open } else { NavState::Closed };
            let end = (0..pairs * 2).fold(start, |state, _| state.toggle());
            prop_assert_eq!(end, start);
        }

        #[test]
        fn any_closing_event_ends_closed(toggles in 0usize..16, which in 0usize..3) {
            let state = (0..toggles).fold(NavState::Closed, |state, _| state.toggle());
            let event = [NavEvent::Escape, NavEvent::BackdropClick, NavEvent::LinkClick][which];
            prop_assert_eq!(state.apply(event), NavState::Closed);
        }
    }
}
