use chatline_models::{Message, Sender};
use chatline_sdk::{ChatTransport, ChatWidget, ConversationView, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::transcript::{speaker, wrap};
use crate::tui::Action;

const SCROLL_STEP: u16 = 5;

pub trait AppController {
    fn update(&mut self, action: Action);
    fn render(&mut self, f: &mut Frame);
    fn should_quit(&self) -> bool;
}

/// Interactive chat screen hosting one [`ChatWidget`].
pub struct ChatApp<T> {
    widget: ChatWidget<T, ConversationView>,
    tx: UnboundedSender<Action>,
    should_quit: bool,
}

impl<T> ChatApp<T>
where
    T: ChatTransport + Clone + Send + Sync + 'static,
{
    pub fn new(widget: ChatWidget<T, ConversationView>, tx: UnboundedSender<Action>) -> Self {
        Self {
            widget,
            tx,
            should_quit: false,
        }
    }

    #[cfg(test)]
    pub fn widget(&self) -> &ChatWidget<T, ConversationView> {
        &self.widget
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.widget.input_mut().pop();
            }
            KeyCode::PageUp => self.widget.view_mut().scroll_up(SCROLL_STEP),
            KeyCode::PageDown => self.widget.view_mut().scroll_down(SCROLL_STEP),
            KeyCode::Char(c) => self.widget.input_mut().push(c),
            _ => {}
        }
    }

    /// Render the submission now and deliver it on a background task.
    fn submit(&mut self) {
        let SubmitOutcome::Dispatched(submission) = self.widget.begin_submit_input() else {
            return;
        };

        let transport = self.widget.transport().clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = transport.send(&submission.request).await;
            if tx.send(Action::Reply(submission.id, result)).is_err() {
                debug!(submission = %submission.id, "reply dropped, UI closed");
            }
        });
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(pending) = self.widget.pending() {
            return Line::from(Span::styled(
                format!("{} (Esc to quit)", pending.label),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(err) = self.widget.last_error() {
            return Line::from(Span::styled(
                format!("last delivery failed [{}]: {err}", err.kind()),
                Style::default().fg(Color::Red),
            ));
        }
        Line::from(Span::styled(
            format!(
                "{} | [ENTER] Send | [PgUp/PgDn] Scroll | [ESC] Quit",
                self.widget.config().endpoint
            ),
            Style::default().fg(Color::DarkGray),
        ))
    }
}

fn message_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
    let (color, prefix) = match message.sender() {
        Sender::User => (Color::Green, format!("{}: ", speaker(Sender::User))),
        Sender::Bot => (Color::Cyan, format!("{}: ", speaker(Sender::Bot))),
    };
    let prefix_width = prefix.width();
    let indent = " ".repeat(prefix_width);
    let body_width = width.saturating_sub(prefix_width);

    wrap(message.text(), body_width)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let lead = if i == 0 { prefix.clone() } else { indent.clone() };
            Line::from(vec![
                Span::styled(lead, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(row, Style::default().fg(color)),
            ])
        })
        .collect()
}

impl<T> AppController for ChatApp<T>
where
    T: ChatTransport + Clone + Send + Sync + 'static,
{
    fn update(&mut self, action: Action) {
        match action {
            Action::Key(key) => self.on_key(key),
            Action::Reply(id, result) => {
                self.widget.complete(id, result);
            }
            Action::Resize => {}
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        // Conversation
        let inner_width = usize::from(chunks[0].width.saturating_sub(2));
        let inner_height = chunks[0].height.saturating_sub(2);

        let mut lines: Vec<Line<'static>> = self
            .widget
            .view()
            .messages()
            .iter()
            .flat_map(|m| message_lines(m, inner_width))
            .collect();
        if let Some(indicator) = self.widget.view().indicator() {
            lines.push(Line::from(Span::styled(
                indicator.label.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let bottom = total.saturating_sub(inner_height);
        self.widget.view_mut().set_scroll_limit(bottom);
        let top = bottom - self.widget.view().scroll_back();

        let conversation = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Chat"))
            .scroll((top, 0));
        f.render_widget(conversation, chunks[0]);

        // Input
        let input = Paragraph::new(self.widget.input().to_string())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Message"));
        f.render_widget(input, chunks[1]);

        let cursor_x = u16::try_from(self.widget.input().width())
            .unwrap_or(u16::MAX)
            .saturating_add(chunks[1].x + 1)
            .min(chunks[1].right().saturating_sub(2));
        f.set_cursor_position((cursor_x, chunks[1].y + 1));

        // Status
        f.render_widget(Paragraph::new(self.status_line()), chunks[2]);
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}
