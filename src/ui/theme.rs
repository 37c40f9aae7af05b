use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Chrome
    pub title_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub panel_title_style: Style,
    pub hint_style: Style,

    // Panel contents
    pub link_text_style: Style,
    pub link_placeholder_style: Style,
    pub template_text_style: Style,
    pub output_text_style: Style,
    pub override_marker_style: Style,

    // Status line
    pub info_style: Style,
    pub warning_style: Style,
    pub error_style: Style,

    // Editor dialog
    pub dialog_border_style: Style,
    pub dialog_text_style: Style,
    pub dialog_cursor_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            id: "dark",
            background_color: Color::Black,

            title_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::DarkGray),
            focused_border_style: Style::default().fg(Color::Cyan),
            panel_title_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::DarkGray),

            link_text_style: Style::default().fg(Color::White),
            link_placeholder_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            template_text_style: Style::default().fg(Color::Gray),
            output_text_style: Style::default().fg(Color::White),
            override_marker_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),

            info_style: Style::default().fg(Color::Green),
            warning_style: Style::default().fg(Color::Yellow),
            error_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            dialog_border_style: Style::default().fg(Color::Cyan),
            dialog_text_style: Style::default().fg(Color::White),
            dialog_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn light() -> Self {
        Theme {
            id: "light",
            background_color: Color::White,

            title_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::Gray),
            focused_border_style: Style::default().fg(Color::Blue),
            panel_title_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::Gray),

            link_text_style: Style::default().fg(Color::Black),
            link_placeholder_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            template_text_style: Style::default().fg(Color::DarkGray),
            output_text_style: Style::default().fg(Color::Black),
            override_marker_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),

            info_style: Style::default().fg(Color::Green),
            warning_style: Style::default().fg(Color::Yellow),
            error_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            dialog_border_style: Style::default().fg(Color::Blue),
            dialog_text_style: Style::default().fg(Color::Black),
            dialog_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark_default()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    pub fn builtin_ids() -> &'static [&'static str] {
        &["dark", "light"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}
