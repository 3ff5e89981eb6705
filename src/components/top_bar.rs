use crate::icons::Image;
use crate::navigation::{TopBarButton, TopBarOptions, TouchableTopBar};
use crate::styles::ThemeType;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Where the top bar's touch targets were drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopBarHitAreas {
    pub left_button: Rect,
    pub title: Rect,
    pub right_button: Option<Rect>,
}

/// Navigation bar with side buttons and a pressable title
pub struct TopBar;

impl TopBar {
    /// Render `bar` into `area` (3 rows: padding, content, bottom border).
    ///
    /// # Returns
    /// The rectangles of each touch target, for mouse hit testing
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        bar: &TouchableTopBar,
        options: &TopBarOptions,
        theme_type: ThemeType,
    ) -> TopBarHitAreas {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(options.button_color))
            .style(Style::default().bg(options.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let row = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height.min(1),
            ..inner
        };

        let left_line = button_line(&bar.left_button, options, theme_type);
        let right_line = bar
            .right_button
            .as_ref()
            .map(|button| button_line(button, options, theme_type));

        let left_width = (left_line.width() as u16).min(row.width);
        let right_width = right_line
            .as_ref()
            .map_or(0, |line| (line.width() as u16).min(row.width.saturating_sub(left_width)));

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left_width),
                Constraint::Min(0),
                Constraint::Length(right_width),
            ])
            .split(row);

        frame.render_widget(Paragraph::new(left_line), chunks[0]);

        let title_line = title_line(bar, options);
        let title_width = (title_line.width() as u16).min(chunks[1].width);
        let title_area = Rect {
            x: chunks[1].x + (chunks[1].width - title_width) / 2,
            width: title_width,
            ..chunks[1]
        };
        frame.render_widget(Paragraph::new(title_line), title_area);

        let right_button = right_line.map(|line| {
            frame.render_widget(Paragraph::new(line), chunks[2]);
            chunks[2]
        });

        TopBarHitAreas {
            left_button: chunks[0],
            title: title_area,
            right_button,
        }
    }
}

fn image_span(image: &Image, fallback: Color) -> Span<'static> {
    Span::styled(
        image.glyph.clone(),
        Style::default().fg(image.color.unwrap_or(fallback)),
    )
}

fn button_line(button: &TopBarButton, options: &TopBarOptions, theme_type: ThemeType) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" "),
        image_span(button.icon.for_theme(theme_type), options.button_color),
    ];
    if let Some(text) = &button.text {
        spans.push(Span::styled(
            format!(" {}", text),
            Style::default().fg(options.button_color),
        ));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn title_line(bar: &TouchableTopBar, options: &TopBarOptions) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(icon) = &bar.icon {
        spans.push(image_span(icon, options.title_color));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        bar.title.clone(),
        Style::default()
            .fg(options.title_color)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" ▾", Style::default().fg(options.title_color)));
    Line::from(spans)
}
