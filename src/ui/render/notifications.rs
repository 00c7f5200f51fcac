use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

/// Render the live region: the latest announcement, replaced in place.
///
pub fn status(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let line = Line::from(vec![
        Span::styled(" Status: ", styling::muted_text_style(theme)),
        Span::styled(
            state.live_region().to_string(),
            styling::normal_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

/// Stack live toasts in the top right corner, newest first.
///
pub fn toasts(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let width = TOAST_WIDTH.min(size.width);
    let x = size.right().saturating_sub(width);
    let mut y = size.y;
    for notification in state.notifications().items().iter().rev() {
        if y.saturating_add(TOAST_HEIGHT) > size.bottom() {
            break;
        }
        let area = Rect::new(x, y, width, TOAST_HEIGHT);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::notification_style(theme, notification.kind));
        let toast = Paragraph::new(notification.message.clone())
            .style(styling::normal_text_style(theme))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(toast, area);
        y += TOAST_HEIGHT;
    }
}
