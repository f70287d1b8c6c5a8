use crate::tabs::context::TabsContext;
use crate::tabs::error::TabsError;
use crate::ui::classes::{Class, Theme};
use ratatui::prelude::*;

/// A selectable tab in the tab list.
///
/// Reads the shared active index to pick its styling and writes its own
/// index back through the handle when selected. It never looks at the panel
/// collection, so nothing checks that a panel exists at `index`.
#[derive(Debug, Clone)]
pub struct TabSelector<'a> {
    index: usize,
    label: &'a str,
    ctx: TabsContext,
    focused: bool,
    theme: Theme,
}

impl<'a> TabSelector<'a> {
    pub fn new(index: usize, label: &'a str, ctx: TabsContext) -> Self {
        TabSelector {
            index,
            label,
            ctx,
            focused: false,
            theme: Theme::default(),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.ctx.is_active(self.index)
    }

    pub fn class(&self) -> Class {
        if self.is_active() {
            Class::TabActive
        } else {
            Class::Tab
        }
    }

    /// Interaction handler: makes this tab the active one.
    pub fn select(&self) -> Result<bool, TabsError> {
        self.ctx.set_active_index(self.index)
    }

    /// Rendered width in cells, including one cell of padding on each side.
    pub fn width(&self) -> u16 {
        let width = Line::from(self.label).width() + 2;
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn style(&self) -> Style {
        let style = self.theme.style(self.class());
        if self.focused {
            style.patch(self.theme.focus)
        } else {
            style
        }
    }
}

impl Widget for &TabSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        buf.set_style(area, style);
        Line::from(format!(" {} ", self.label))
            .style(style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_selector_active_initially() {
        let ctx = TabsContext::new(3);
        let home = TabSelector::new(0, "Home", ctx.clone());
        let profile = TabSelector::new(1, "Profile", ctx);

        assert!(home.is_active());
        assert_eq!(home.class().as_str(), "tab active");
        assert!(!profile.is_active());
        assert_eq!(profile.class().as_str(), "tab");
    }

    #[test]
    fn test_select_writes_own_index() {
        let ctx = TabsContext::new(3);
        let settings = TabSelector::new(2, "Settings", ctx.clone());

        assert_eq!(settings.select(), Ok(true));
        assert_eq!(ctx.active_index(), 2);
        assert!(settings.is_active());
    }

    #[test]
    fn test_select_active_is_idempotent() {
        let ctx = TabsContext::new(3);
        let home = TabSelector::new(0, "Home", ctx.clone());

        assert_eq!(home.select(), Ok(false));
        assert_eq!(ctx.revision(), 0);
    }

    #[test]
    fn test_width_pads_label() {
        let ctx = TabsContext::new(1);
        assert_eq!(TabSelector::new(0, "Home", ctx).width(), 6);
    }

    #[test]
    fn test_render_writes_padded_label() {
        let ctx = TabsContext::new(1);
        let tab = TabSelector::new(0, "Home", ctx);
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);

        (&tab).render(area, &mut buf);

        let text: String = (0..6).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(text, " Home ");
        assert_eq!(buf[(1, 0)].style().fg, Theme::default().tab_active.fg);
    }

    #[test]
    fn test_focus_adds_underline() {
        let ctx = TabsContext::new(2);
        let tab = TabSelector::new(1, "Profile", ctx).focused(true);
        assert!(tab.style().add_modifier.contains(Modifier::UNDERLINED));
    }
}
