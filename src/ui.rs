use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    clock::Clock,
    session::{CharState, SessionPhase},
    text_source::TextSource,
};

const HORIZONTAL_MARGIN: u16 = 5;
const TITLE: &str = "Typing Game";

impl<C: Clock + Clone> Widget for &App<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = bold_style.fg(Color::Green);
        let red_bold_style = bold_style.fg(Color::Red);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let text_width = session
            .target_words()
            .iter()
            .map(|w| w.width() + 1)
            .sum::<usize>()
            .max(1);
        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_occupied_lines = text_width.div_ceil(max_chars_per_line as usize) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(1),                     // title
                Constraint::Min(1),                        // padding
                Constraint::Length(1),                     // progress
                Constraint::Length(prompt_occupied_lines), // words
                Constraint::Length(1),                     // attribution
                Constraint::Length(1),                     // results
                Constraint::Min(1),                        // padding
                Constraint::Length(1),                     // settings
                Constraint::Length(1),                     // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(TITLE, bold_style))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let (index, total) = session.progress();
        Paragraph::new(Span::styled(format!("{index} / {total}"), bold_style))
            .render(chunks[2], buf);

        let char_states = session.char_states();
        let mut spans = Vec::new();
        for (idx, word) in session.target_words().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            if idx < index {
                spans.push(Span::styled(word.clone(), dim_style));
            } else if idx == index {
                spans.extend(word.chars().zip(&char_states).map(|(c, state)| {
                    let style = match state {
                        CharState::Correct => green_bold_style,
                        CharState::Incorrect => red_bold_style,
                        CharState::Untyped => bold_style.add_modifier(Modifier::UNDERLINED),
                    };
                    Span::styled(c.to_string(), style)
                }));
            } else {
                spans.push(Span::styled(word.clone(), bold_style));
            }
        }

        Paragraph::new(Line::from(spans))
            .alignment(if prompt_occupied_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[3], buf);

        if let Some(attribution) = self.attribution() {
            Paragraph::new(Span::styled(format!("~ {attribution}"), italic_style))
                .alignment(Alignment::Right)
                .render(chunks[4], buf);
        }

        if session.phase() == SessionPhase::Completed {
            Paragraph::new(Span::styled(
                format!(
                    "WPM: {}   Accuracy: {}%",
                    session.words_per_minute(),
                    session.accuracy()
                ),
                bold_style.fg(Color::Magenta),
            ))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
        }

        let source = match self.text_source() {
            TextSource::Static(_) => "custom prompt".to_string(),
            TextSource::RandomWords(n) => format!("{n} random words"),
            TextSource::Quote => "quote".to_string(),
        };
        Paragraph::new(Span::styled(
            format!("{source} | scoring: {}", session.scoring_mode()),
            dim_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[7], buf);

        let legend = if session.phase() == SessionPhase::Completed {
            "(enter) restart / (esc) new text / (f2) source / (f3) words / (ctrl+c) quit"
        } else {
            "(esc) restart / (f2) source / (f3) words / (ctrl+c) quit"
        };
        Paragraph::new(Span::styled(legend, italic_style))
            .alignment(Alignment::Center)
            .render(chunks[8], buf);
    }
}
