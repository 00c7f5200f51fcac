mod dropdown;
mod footer;
mod form;
mod log;
mod notifications;

use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
};

/// Render the whole screen according to state.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let theme = state.get_theme().clone();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Banner
            Constraint::Min(1),    // Form and log
            Constraint::Length(1), // Live region
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    let banner = Paragraph::new("Contact us")
        .style(styling::banner_style(&theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let body = if state.is_log_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        self::log::log(frame, columns[1], state);
        columns[0]
    } else {
        rows[1]
    };

    let urgency_trigger = form::form(frame, body, state);
    notifications::status(frame, rows[2], state);
    footer::footer(frame, rows[3], state);
    notifications::toasts(frame, rows[1], state);

    // Drawn last so the open listbox sits above everything else.
    dropdown::listbox(frame, urgency_trigger, state);
}
