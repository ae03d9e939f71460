use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::{nav::Route, util::colors};

pub struct Sidebar<'a> {
    routes: &'a [Route],
    selected_index: usize,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(routes: &'a [Route], selected_index: usize, focused: bool) -> Self {
        Self {
            routes,
            selected_index,
            focused,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let info = route.display_info();
                let style = if i == self.selected_index {
                    let style = Style::default().fg(info.color).add_modifier(Modifier::BOLD);
                    if self.focused {
                        style.add_modifier(Modifier::REVERSED)
                    } else {
                        style
                    }
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                ListItem::new(format!(" {}  {}", info.icon, info.title)).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
