use crate::ui::classes::{Class, Theme};
use crate::ui::tab::TabSelector;
use ratatui::prelude::*;

const DIVIDER: &str = "│";

/// Row of tab selectors. Layout only; no state of its own.
#[derive(Debug, Clone)]
pub struct TabList<'a> {
    selectors: Vec<TabSelector<'a>>,
    theme: Theme,
}

impl<'a> TabList<'a> {
    pub fn new(selectors: impl IntoIterator<Item = TabSelector<'a>>) -> Self {
        TabList {
            selectors: selectors.into_iter().collect(),
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn class(&self) -> Class {
        Class::TabList
    }

    pub fn selectors(&self) -> &[TabSelector<'a>] {
        &self.selectors
    }

    /// Hit rectangle of every selector within `area`, in order.
    ///
    /// Selectors that do not fit get a zero-width rectangle at the right edge.
    /// An area without height gives every selector a zero-width rectangle.
    pub fn selector_areas(&self, area: Rect) -> Vec<Rect> {
        if area.is_empty() {
            return vec![Rect::new(area.x, area.y, 0, 0); self.selectors.len()];
        }

        let mut x = area.x;
        let right = area.right();
        let mut areas = Vec::with_capacity(self.selectors.len());

        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                x = x.saturating_add(1).min(right);
            }
            let width = selector.width().min(right - x);
            areas.push(Rect::new(x, area.y, width, 1));
            x += width;
        }

        areas
    }
}

impl Widget for &TabList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.theme.style(self.class()));

        let areas = self.selector_areas(area);
        for (i, (selector, rect)) in self.selectors.iter().zip(&areas).enumerate() {
            if rect.width == 0 {
                continue;
            }
            if i > 0 && rect.x > area.x {
                buf.set_string(rect.x - 1, area.y, DIVIDER, self.theme.style(Class::Tabs));
            }
            selector.render(*rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::context::TabsContext;

    fn demo_list(ctx: &TabsContext) -> TabList<'static> {
        TabList::new(
            ["Home", "Profile", "Settings"]
                .into_iter()
                .enumerate()
                .map(|(i, label)| TabSelector::new(i, label, ctx.clone())),
        )
    }

    #[test]
    fn test_selector_areas_are_laid_out_left_to_right() {
        let ctx = TabsContext::new(3);
        let list = demo_list(&ctx);

        let areas = list.selector_areas(Rect::new(2, 1, 40, 1));

        assert_eq!(areas[0], Rect::new(2, 1, 6, 1));
        assert_eq!(areas[1], Rect::new(9, 1, 9, 1));
        assert_eq!(areas[2], Rect::new(19, 1, 10, 1));
    }

    #[test]
    fn test_selector_areas_clip_to_width() {
        let ctx = TabsContext::new(3);
        let list = demo_list(&ctx);

        let areas = list.selector_areas(Rect::new(0, 0, 10, 1));

        assert_eq!(areas[0], Rect::new(0, 0, 6, 1));
        assert_eq!(areas[1], Rect::new(7, 0, 3, 1));
        assert_eq!(areas[2].width, 0);
    }

    #[test]
    fn test_render_draws_labels_and_dividers() {
        let ctx = TabsContext::new(3);
        let list = demo_list(&ctx);
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        (&list).render(area, &mut buf);

        let row: String = (0..27).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, " Home │ Profile │ Settings ");
    }

    #[test]
    fn test_zero_height_area_draws_nothing() {
        let ctx = TabsContext::new(3);
        let list = demo_list(&ctx);
        let buf_area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(buf_area);

        // Row below a one-row buffer, as left over by a bordered container.
        let area = Rect::new(1, 1, 38, 0);
        (&list).render(area, &mut buf);

        assert!(list.selector_areas(area).iter().all(|r| r.width == 0));
        assert_eq!(buf, Buffer::empty(buf_area));
    }

    #[test]
    fn test_class_is_tablist() {
        let ctx = TabsContext::new(1);
        assert_eq!(demo_list(&ctx).class().as_str(), "tablist");
    }

    #[test]
    fn test_only_one_selector_active() {
        let ctx = TabsContext::new(3);
        ctx.set_active_index(1).unwrap();
        let list = demo_list(&ctx);

        let active: Vec<usize> = list
            .selectors()
            .iter()
            .filter(|s| s.is_active())
            .map(|s| s.index())
            .collect();
        assert_eq!(active, vec![1]);
    }
}
