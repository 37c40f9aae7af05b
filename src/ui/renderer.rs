use crate::core::app::{App, Focus, StatusKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const LINK_PLACEHOLDER: &str = "https://zoom.us/j/...";

pub fn ui(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Percentage(40),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, app, chunks[0]);
    render_link_input(f, app, chunks[1]);
    render_template(f, app, chunks[2]);
    render_output(f, app, chunks[3]);
    render_footer(f, app, chunks[4]);

    if app.ui.dialog.is_some() {
        render_dialog(f, app);
    }
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        format!("Zoom Class Template v{}", env!("CARGO_PKG_VERSION")),
        theme.title_style,
    )];
    if !app.composer.has_placeholder() {
        spans.push(Span::styled(
            "  ⚠ template has no {{ZOOM_LINK}} placeholder",
            theme.warning_style,
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn panel_block<'a>(app: &App, title: Line<'a>, focus: Focus) -> Block<'a> {
    let theme = &app.theme;
    let border_style = if app.ui.focus == focus && app.ui.dialog.is_none() {
        theme.focused_border_style
    } else {
        theme.border_style
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn render_link_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let editor = &app.ui.link_editor;
    let title = Line::from(Span::styled(" Zoom Link ", theme.panel_title_style));
    let block = panel_block(app, title, Focus::Link);

    let content = if editor.text.is_empty() {
        Line::from(Span::styled(LINK_PLACEHOLDER, theme.link_placeholder_style))
    } else {
        Line::from(Span::styled(editor.text.as_str(), theme.link_text_style))
    };

    // Keep the cursor visible when the link is wider than the box.
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_col = editor.cursor_column();
    let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

    f.render_widget(
        Paragraph::new(content)
            .block(block)
            .scroll((0, scroll as u16)),
        area,
    );

    if app.ui.focus == Focus::Link && app.ui.dialog.is_none() {
        let x = area.x + 1 + (cursor_col - scroll) as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_template(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title = Line::from(vec![
        Span::styled(" Base Template ", theme.panel_title_style),
        Span::styled("(Enter to edit) ", theme.hint_style),
    ]);
    let block = panel_block(app, title, Focus::Template);
    f.render_widget(
        Paragraph::new(app.composer.template())
            .style(theme.template_text_style)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_output(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut title_spans = vec![Span::styled(
        " Generated Preview ",
        theme.panel_title_style,
    )];
    if app.composer.is_overridden() {
        title_spans.push(Span::styled(
            "• Manually edited ",
            theme.override_marker_style,
        ));
    }
    let block = panel_block(app, Line::from(title_spans), Focus::Output);
    f.render_widget(
        Paragraph::new(app.composer.output())
            .style(theme.output_text_style)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = match &app.ui.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Info => theme.info_style,
                StatusKind::Warning => theme.warning_style,
                StatusKind::Error => theme.error_style,
            };
            Line::from(Span::styled(status.text.as_str(), style))
        }
        None => Line::from(Span::styled(key_hints(app), theme.hint_style)),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn key_hints(app: &App) -> String {
    if app.ui.dialog.is_some() {
        return "Ctrl+S save • Esc cancel • Ctrl+E open $EDITOR".to_string();
    }
    let mut hints = vec!["Tab focus", "Ctrl+Y copy", "Ctrl+T template", "Ctrl+O preview"];
    if app.composer.is_overridden() {
        hints.push("Ctrl+R reset");
    }
    hints.push("Ctrl+C quit");
    hints.join(" • ")
}

fn render_dialog(f: &mut Frame, app: &App) {
    let Some(dialog) = app.ui.dialog.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let area = centered_rect(80, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.dialog_border_style)
        .style(Style::default().bg(theme.background_color))
        .title(Span::styled(
            format!(" {} ", dialog.target.title()),
            theme.panel_title_style,
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(&dialog.textarea, inner);
}

/// A rectangle of `percent_x` by `percent_y` centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
