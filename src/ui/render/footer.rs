use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Line, text::Span, widgets::Paragraph};

/// Describe the widget keys of the focused element.
///
fn widget_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Field(crate::form::Field::Message) => "Enter: new line",
        Focus::Field(_) => "Enter: next field",
        Focus::Newsletter => "Space: toggle",
        Focus::ContactMethod => "Arrows: choose",
        Focus::Urgency => "Enter/Space/Down: open, Esc: cancel",
        Focus::Submit => "Enter: send",
    }
}

/// Render footer with the current bindings.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let bindings = build_footer_text(
        state.get_hotkeys(),
        &[
            (HotkeyAction::NextField, "next"),
            (HotkeyAction::PrevField, "previous"),
            (HotkeyAction::Submit, "send"),
            (HotkeyAction::ToggleLog, "log"),
            (HotkeyAction::Quit, "quit"),
        ],
    );
    let line = Line::from(vec![
        Span::styled(format!(" {} |", widget_hint(state.current_focus())), styling::normal_text_style(theme)),
        Span::styled(bindings, styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
