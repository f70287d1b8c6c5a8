use crate::tabs::context::TabsContext;
use crate::ui::classes::{Class, Theme};
use crate::ui::tab_panel::TabPanel;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};

/// Panel collection. Shows only the panel at the active index.
#[derive(Debug, Clone)]
pub struct TabPanels<'a> {
    panels: Vec<TabPanel<'a>>,
    ctx: TabsContext,
    theme: Theme,
}

impl<'a> TabPanels<'a> {
    pub fn new(panels: impl IntoIterator<Item = TabPanel<'a>>, ctx: TabsContext) -> Self {
        TabPanels {
            panels: panels.into_iter().collect(),
            ctx,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn class(&self) -> Class {
        Class::TabPanels
    }

    /// The panel at the active index, or `None` when there is no panel at
    /// that position.
    pub fn visible(&self) -> Option<&TabPanel<'a>> {
        self.panels.get(self.ctx.active_index())
    }
}

impl Widget for &TabPanels<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.style(self.class()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.visible() {
            Some(panel) => panel.render(inner, buf),
            None => tracing::trace!(
                active = self.ctx.active_index(),
                panels = self.panels.len(),
                "no panel at active index"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn demo_panels(ctx: &TabsContext) -> TabPanels<'static> {
        TabPanels::new(
            ["Welcome To Home", "Welcome To Profile", "Welcome To Settings"]
                .into_iter()
                .map(TabPanel::new),
            ctx.clone(),
        )
    }

    #[test]
    fn test_visible_follows_active_index() {
        let ctx = TabsContext::new(3);
        let panels = demo_panels(&ctx);
        assert_eq!(panels.visible().unwrap().content(), "Welcome To Home");

        ctx.set_active_index(2).unwrap();
        assert_eq!(panels.visible().unwrap().content(), "Welcome To Settings");
    }

    #[test]
    fn test_visible_none_when_no_panel_at_index() {
        // Four selectors but only two panels.
        let ctx = TabsContext::new(4);
        let panels = TabPanels::new(
            ["first", "second"].into_iter().map(TabPanel::new),
            ctx.clone(),
        );

        ctx.set_active_index(3).unwrap();
        assert!(panels.visible().is_none());
    }

    #[test]
    fn test_render_shows_only_active_panel() {
        let ctx = TabsContext::new(3);
        ctx.set_active_index(1).unwrap();
        let panels = demo_panels(&ctx);
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        (&panels).render(area, &mut buf);

        let out = text(&buf);
        assert!(out.contains("Welcome To Profile"));
        assert!(!out.contains("Welcome To Home"));
        assert!(!out.contains("Welcome To Settings"));
    }

    #[test]
    fn test_panel_classes() {
        let ctx = TabsContext::new(3);
        let panels = demo_panels(&ctx);
        assert_eq!(panels.class().as_str(), "tab_panels");
        assert_eq!(panels.visible().unwrap().class().as_str(), "tabpanel");
    }

    #[test]
    fn test_render_out_of_range_draws_no_content() {
        let ctx = TabsContext::new(2);
        let panels = TabPanels::new([TabPanel::new("only")], ctx.clone());
        ctx.set_active_index(1).unwrap();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        (&panels).render(area, &mut buf);

        assert!(!text(&buf).contains("only"));
    }
}
