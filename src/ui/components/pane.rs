use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::{
    nav::Route,
    pane::{PaneLoadState, PaneState},
    ui::components::spinner::Spinner,
    util::colors,
};

/// Renders one content or detail pane from its route and load state.
pub struct PaneView<'a> {
    route: &'a Route,
    state: &'a PaneState,
    cursor: usize,
    focused: bool,
}

impl<'a> PaneView<'a> {
    pub fn new(route: &'a Route, state: &'a PaneState, cursor: usize, focused: bool) -> Self {
        Self {
            route,
            state,
            cursor,
            focused,
        }
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .state
            .items()
            .iter()
            .map(|route| {
                let info = route.display_info();
                let mut spans = vec![
                    Span::styled(format!("{} ", info.icon), Style::default().fg(info.color)),
                    Span::raw(info.title),
                ];
                if let Some(subtitle) = info.subtitle.filter(|s| !s.is_empty()) {
                    spans.push(Span::styled(
                        format!("  {subtitle}"),
                        Style::default().fg(colors::NEUTRAL),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(colors::SECONDARY)
        };

        let mut list_state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(
            List::new(items).highlight_style(highlight),
            area,
            buf,
            &mut list_state,
        );
    }

    fn render_item(&self, area: Rect, buf: &mut Buffer) {
        let info = self.route.display_info();
        let mut lines = vec![Line::styled(
            format!("{} {}", info.icon, info.title),
            Style::default().fg(info.color).add_modifier(Modifier::BOLD),
        )];
        if let Some(subtitle) = info.subtitle {
            lines.push(Line::raw(subtitle));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for PaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let info = self.route.display_info();
        let border_style = if self.focused {
            Style::default().fg(info.color)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(format!(" {} ", info.title))
            .title_alignment(Alignment::Left);
        let inner = block.inner(area);
        block.render(area, buf);

        let message = |text: &str, buf: &mut Buffer| {
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::NEUTRAL))
                .wrap(Wrap { trim: true })
                .render(
                    Rect {
                        y: inner.y + inner.height / 2,
                        height: inner.height - inner.height / 2,
                        ..inner
                    },
                    buf,
                )
        };

        match self.state.load() {
            PaneLoadState::Loading => Spinner::new()
                .with_style(Style::default().fg(colors::ACCENT))
                .with_label(&info.loading_message)
                .render(inner, buf),
            PaneLoadState::Offline => message("Not connected to a media center", buf),
            PaneLoadState::Empty => message(&info.empty_message, buf),
            PaneLoadState::Ready if self.state.is_list() => self.render_list(inner, buf),
            PaneLoadState::Ready => self.render_item(inner, buf),
        }
    }
}
