//! View navigation owned by an explicit stack instead of ad-hoc container
//! mutation.

/// A screen the main window can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Departments,
    Sellers,
}

/// Router owning the "current view" state.
///
/// The dashboard is the permanent bottom of the stack; `pop` never removes it.
#[derive(Debug, Default)]
pub struct ViewStack {
    stack: Vec<Panel>,
}

impl ViewStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel currently shown.
    pub fn current(&self) -> Panel {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Navigate to a panel. Pushing the current panel again is a no-op.
    pub fn push(&mut self, panel: Panel) {
        if self.current() != panel {
            self.stack.push(panel);
        }
    }

    /// Go back one panel. Stops at the dashboard.
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// Drop everything and return to the dashboard.
    pub fn reset(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let nav = ViewStack::new();
        assert_eq!(nav.current(), Panel::Dashboard);
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = ViewStack::new();
        nav.push(Panel::Departments);
        assert_eq!(nav.current(), Panel::Departments);

        nav.push(Panel::Sellers);
        assert_eq!(nav.current(), Panel::Sellers);

        nav.pop();
        assert_eq!(nav.current(), Panel::Departments);

        nav.pop();
        assert_eq!(nav.current(), Panel::Dashboard);
    }

    #[test]
    fn test_pop_stops_at_dashboard() {
        let mut nav = ViewStack::new();
        nav.pop();
        nav.pop();
        assert_eq!(nav.current(), Panel::Dashboard);
    }

    #[test]
    fn test_push_current_panel_is_noop() {
        let mut nav = ViewStack::new();
        nav.push(Panel::Sellers);
        nav.push(Panel::Sellers);
        nav.pop();
        assert_eq!(nav.current(), Panel::Dashboard);
    }

    #[test]
    fn test_reset() {
        let mut nav = ViewStack::new();
        nav.push(Panel::Departments);
        nav.push(Panel::Sellers);
        nav.reset();
        assert_eq!(nav.current(), Panel::Dashboard);
    }
}
