use dioxus::prelude::*;

/// Tracks whether a click inside a clickable container was already handled
/// by a nested action control.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Containment {
    consumed: bool,
}

impl Containment {
    /// Marks the current click as handled by an action control.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    /// Called by the container. True when the container's primary action
    /// should run. Resets the flag for the next click.
    pub fn take_primary(&mut self) -> bool {
        !std::mem::take(&mut self.consumed)
    }
}

/// Per-instance click scope for rows and cards.
///
/// Nested controls call [`ClickScope::action`] which consumes the click
/// before running their handler; the container wraps its own handler in
/// [`ClickScope::primary`]. Clicks keep bubbling, the container just sees
/// that they were consumed.
#[derive(Clone, Copy)]
pub struct ClickScope {
    state: CopyValue<Containment>,
}

pub fn use_click_scope() -> ClickScope {
    let state = use_hook(|| CopyValue::new(Containment::default()));
    ClickScope { state }
}

impl ClickScope {
    pub fn consume(&self) {
        let mut state = self.state;
        state.write().consume();
    }

    pub fn take_primary(&self) -> bool {
        let mut state = self.state;
        let primary = state.write().take_primary();
        primary
    }

    /// Handler for a nested action control.
    pub fn action(&self, mut run: impl FnMut() + 'static) -> impl FnMut(MouseEvent) + 'static {
        let scope = *self;
        move |_| {
            scope.consume();
            run();
        }
    }

    /// Handler for the container's primary action.
    pub fn primary(&self, mut run: impl FnMut() + 'static) -> impl FnMut(MouseEvent) + 'static {
        let scope = *self;
        move |_| {
            if scope.take_primary() {
                run();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumed_click_skips_primary_once() {
        let mut containment = Containment::default();
        containment.consume();
        assert!(!containment.take_primary());
        assert!(containment.take_primary());
    }

    #[test]
    fn plain_click_runs_primary() {
        let mut containment = Containment::default();
        assert!(containment.take_primary());
        assert!(containment.take_primary());
    }
}
