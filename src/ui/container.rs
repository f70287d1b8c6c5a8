use crate::tabs::context::TabsContext;
use crate::ui::classes::{Class, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Areas handed to the container's descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsLayout {
    pub list: Rect,
    pub panels: Rect,
}

/// Tabs container. Owns the active-tab state and hands out handles to it.
#[derive(Debug)]
pub struct Tabs {
    ctx: TabsContext,
}

impl Tabs {
    /// Starts with the first of `len` tabs active.
    pub fn new(len: usize) -> Self {
        Tabs {
            ctx: TabsContext::new(len),
        }
    }

    /// A handle to the shared state, for selectors and the panel collection.
    pub fn context(&self) -> TabsContext {
        self.ctx.clone()
    }

    pub fn class(&self) -> Class {
        Class::Tabs
    }

    /// Draws the container frame and splits its inside into the list row and
    /// the panel area.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) -> TabsLayout {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.style(self.class()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [list, panels] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        TabsLayout { list, panels }
    }
}
