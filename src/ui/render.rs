use crate::style::{StyleField, StyleOption, StyleState};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, APPLY_BG, PANEL_BORDER, PANEL_MUTED, PANEL_TEXT, RESET_FG,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

const ARTICLE_TITLE: &str = "Reading comfortably";
const ARTICLE_BODY: &[&str] = &[
    "A page is easier to read when its type suits the reader. Size, face and contrast \
     all change how quickly the eye moves along a line and how soon it tires.",
    "Line length matters as much as the letters themselves. Very long lines make it hard \
     to find the start of the next one; very short ones break the rhythm of a sentence.",
    "Open the panel on the left to try other combinations. Nothing changes here until \
     you apply them, and reset brings back the original look.",
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = app.layout();
    let committed = app.committed();

    draw_article(frame, layout.article, &committed);
    draw_toggle(frame, layout.toggle, app.is_panel_open());
    if let Some(panel) = layout.panel {
        draw_panel(frame, panel, app, &committed);
    }

    let footer = Footer::new();
    frame.render_widget(footer.widget(layout.footer, app.is_panel_open()), layout.footer);
}

fn draw_article(frame: &mut Frame<'_>, area: Rect, style: &StyleState) {
    frame.render_widget(Clear, area);
    let width = content_columns(&style.content_width, area.width);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let text_style = Style::default()
        .fg(color_of(&style.font_color))
        .bg(color_of(&style.background_color));
    let mut lines = vec![
        Line::styled(
            format!("{} · {}", style.font_family.label, style.font_size.label),
            text_style.add_modifier(Modifier::ITALIC | Modifier::DIM),
        ),
        Line::default(),
        Line::styled(ARTICLE_TITLE, text_style.add_modifier(heading_modifier(&style.font_size))),
    ];
    for paragraph in ARTICLE_BODY {
        lines.push(Line::default());
        lines.push(Line::styled(*paragraph, text_style));
    }

    let article = Paragraph::new(lines)
        .style(text_style)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::new(2, 2, 1, 1)));
    frame.render_widget(article, column);
}

fn draw_toggle(frame: &mut Frame<'_>, area: Rect, open: bool) {
    let arrow = if open { "◀" } else { "▶" };
    let toggle = Paragraph::new(arrow)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        );
    frame.render_widget(toggle, area);
}

fn draw_panel(frame: &mut Frame<'_>, panel: Rect, app: &App, committed: &StyleState) {
    frame.render_widget(Clear, panel);
    let block = Block::default()
        .title(" SET PARAMETERS ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
        .title_style(Style::default().fg(PANEL_TEXT).add_modifier(Modifier::BOLD));
    frame.render_widget(block, panel);

    let controller = app.controller();
    for (index, (field, rect)) in app.layout().fields.iter().enumerate() {
        let focused = index == app.focused();
        let selected = controller.draft_value(*field);
        let pending = selected != committed.get(*field);

        let title_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PANEL_MUTED)
        };
        let mut title = vec![Span::styled(field.title().to_uppercase(), title_style)];
        if pending {
            title.push(Span::styled(" *", Style::default().fg(ACCENT)));
        }

        let value = match field {
            StyleField::FontSize => radio_line(*field, &selected),
            _ => dropdown_line(&selected, focused),
        };

        let row_style = if focused {
            Style::default().bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(vec![Line::from(title), value]).style(row_style),
            *rect,
        );
    }

    let layout = app.layout();
    let reset = Paragraph::new("Reset")
        .alignment(Alignment::Center)
        .style(Style::default().fg(RESET_FG))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(RESET_FG)),
        );
    frame.render_widget(reset, layout.reset);

    let apply = Paragraph::new("Apply")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(APPLY_BG)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(apply, layout.apply);
}

/// All options of the field side by side, the selected one marked.
fn radio_line(field: StyleField, selected: &StyleOption) -> Line<'static> {
    let spans: Vec<Span> = field
        .domain()
        .options()
        .iter()
        .flat_map(|option| {
            let (mark, style) = if option == selected {
                ("(•) ", Style::default().fg(ACCENT))
            } else {
                ("( ) ", Style::default().fg(PANEL_TEXT))
            };
            [
                Span::styled(format!("{}{}", mark, option.label), style),
                Span::raw("  "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn dropdown_line(selected: &StyleOption, focused: bool) -> Line<'static> {
    let arrows = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(PANEL_MUTED)
    };
    Line::from(vec![
        Span::styled("◂ ", arrows),
        Span::styled(selected.label, Style::default().fg(PANEL_TEXT)),
        Span::styled(" ▸", arrows),
    ])
}

fn heading_modifier(size: &StyleOption) -> Modifier {
    match size.id {
        "38" => Modifier::BOLD | Modifier::UNDERLINED,
        "24" => Modifier::BOLD,
        _ => Modifier::empty(),
    }
}

fn color_of(option: &StyleOption) -> Color {
    option.value.parse().unwrap_or(Color::Reset)
}

fn pixels(option: &StyleOption) -> Option<u32> {
    option.value.trim_end_matches("px").parse().ok()
}

/// Columns for the article, scaled against the widest content option.
fn content_columns(width: &StyleOption, available: u16) -> u16 {
    let widest = StyleField::ContentWidth
        .domain()
        .options()
        .iter()
        .filter_map(pixels)
        .max()
        .unwrap_or(1);
    let px = pixels(width).unwrap_or(widest).min(widest);
    let columns = u32::from(available) * px / widest;
    (columns as u16).clamp(available.min(20), available)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(id: &str) -> StyleOption {
        StyleField::ContentWidth.domain().find(id).unwrap()
    }

    #[test]
    fn widest_option_fills_available_columns() {
        assert_eq!(content_columns(&width("1394px"), 100), 100);
    }

    #[test]
    fn narrower_options_scale_down() {
        let medium = content_columns(&width("800px"), 100);
        let narrow = content_columns(&width("548px"), 100);
        assert_eq!(medium, 57);
        assert_eq!(narrow, 39);
    }

    #[test]
    fn tiny_areas_are_respected() {
        assert_eq!(content_columns(&width("548px"), 10), 10);
        assert_eq!(content_columns(&width("548px"), 0), 0);
    }

    #[test]
    fn palette_values_parse_as_colors() {
        for field in [StyleField::FontColor, StyleField::BackgroundColor] {
            for option in field.domain().options() {
                assert_ne!(color_of(option), Color::Reset, "{} did not parse", option.id);
            }
        }
    }
}
