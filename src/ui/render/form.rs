use super::dropdown;
use super::Frame;
use crate::form::Field;
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the form fields and controls. Returns the area of the urgency
/// trigger so the listbox can be placed against it.
///
pub fn form(frame: &mut Frame, size: Rect, state: &mut State) -> Rect {
    let theme = state.get_theme().clone();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // First and last name
            Constraint::Length(4), // Email and phone
            Constraint::Length(4), // Subject
            Constraint::Length(7), // Message
            Constraint::Length(1), // Newsletter
            Constraint::Length(1), // Contact method
            Constraint::Length(3), // Urgency and submit
            Constraint::Min(0),
        ])
        .split(size);

    for (row, fields) in [
        (rows[0], [Field::FirstName, Field::LastName]),
        (rows[1], [Field::Email, Field::Phone]),
    ] {
        let columns = halves(row);
        text_field(frame, columns[0], state, fields[0], &theme);
        text_field(frame, columns[1], state, fields[1], &theme);
    }
    text_field(frame, rows[2], state, Field::Subject, &theme);
    message(frame, rows[3], state, &theme);
    newsletter(frame, rows[4], state, &theme);
    contact_method(frame, rows[5], state, &theme);

    let controls = halves(rows[6]);
    dropdown::trigger(frame, controls[0], state, &theme);
    submit_button(frame, controls[1], state, &theme);
    controls[0]
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

/// Split an area into the control and the single error line below it.
///
fn with_error_line(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn field_title(field: Field) -> String {
    if field == Field::Phone {
        format!("{} (optional)", field.label())
    } else {
        format!("{} *", field.label())
    }
}

fn field_block(field: Field, focused: bool, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            field_title(field),
            styling::block_title_style(theme, focused),
        ))
        .border_style(styling::block_border_style(theme, focused))
}

fn error_line(frame: &mut Frame, area: Rect, state: &State, field: Field, theme: &Theme) {
    if let Some(error) = state.form().errors().get(field) {
        let line = Span::styled(format!(" {}", error), styling::error_text_style(theme));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Columns to scroll so the end of the value stays visible.
///
fn horizontal_scroll(value: &str, inner_width: u16) -> u16 {
    let length = value.chars().count() as u16;
    // One column is kept free for the cursor.
    length.saturating_sub(inner_width.saturating_sub(1))
}

fn text_field(frame: &mut Frame, area: Rect, state: &State, field: Field, theme: &Theme) {
    let focused = state.current_focus() == Focus::Field(field);
    let (input_area, error_area) = with_error_line(area);
    let value = state.form().data().get(field);

    let mut spans = vec![Span::styled(
        value.to_string(),
        styling::normal_text_style(theme),
    )];
    if focused {
        spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }
    let scroll = horizontal_scroll(value, input_area.width.saturating_sub(2));
    let input = Paragraph::new(Line::from(spans))
        .block(field_block(field, focused, theme))
        .scroll((0, scroll));
    frame.render_widget(input, input_area);
    error_line(frame, error_area, state, field, theme);
}

fn message(frame: &mut Frame, area: Rect, state: &mut State, theme: &Theme) {
    let focused = state.current_focus() == Focus::Field(Field::Message);
    let (input_area, error_area) = with_error_line(area);
    let textarea = state.message_textarea();
    textarea.set_block(field_block(Field::Message, focused, theme));
    textarea.set_style(styling::normal_text_style(theme));
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    frame.render_widget(textarea.widget(), input_area);
    error_line(frame, error_area, state, Field::Message, theme);
}

fn focus_marker(focused: bool) -> &'static str {
    if focused {
        "> "
    } else {
        "  "
    }
}

fn newsletter(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let focused = state.current_focus() == Focus::Newsletter;
    let checkbox = if state.form().data().newsletter {
        "[x]"
    } else {
        "[ ]"
    };
    let line = Line::from(vec![
        Span::styled(focus_marker(focused), styling::block_title_style(theme, focused)),
        Span::styled(
            format!("{} Subscribe to newsletter", checkbox),
            styling::block_title_style(theme, focused),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn contact_method(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let focused = state.current_focus() == Focus::ContactMethod;
    let chooser = state.contact_method();
    let mut spans = vec![
        Span::styled(focus_marker(focused), styling::block_title_style(theme, focused)),
        Span::styled(
            "Preferred contact method:",
            styling::block_title_style(theme, focused),
        ),
    ];
    for method in chooser.options() {
        let selected = *method == chooser.selected();
        let radio = if selected { "(•)" } else { "( )" };
        let style = if selected && focused {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("{} {}", radio, method.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn submit_label(state: &State) -> String {
    if state.is_submitting() {
        format!("{} Sending...", spinner::frame(state.get_spinner_index()))
    } else {
        "Send message".to_string()
    }
}

fn submit_button(frame: &mut Frame, area: Rect, state: &State, theme: &Theme) {
    let focused = state.current_focus() == Focus::Submit;
    let style = if state.is_submitting() {
        styling::muted_text_style(theme)
    } else if focused {
        styling::active_list_item_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, focused));
    let button = Paragraph::new(Span::styled(submit_label(state), style))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_scroll_keeps_end_visible() {
        assert_eq!(horizontal_scroll("short", 20), 0);
        assert_eq!(horizontal_scroll("abcdefghij", 5), 6);
        assert_eq!(horizontal_scroll("", 0), 0);
    }

    #[test]
    fn test_field_titles_mark_required() {
        assert_eq!(field_title(Field::FirstName), "First name *");
        assert!(field_title(Field::Phone).ends_with("(optional)"));
    }

    #[test]
    fn test_submit_label_when_idle() {
        let state = State::default();
        assert_eq!(submit_label(&state), "Send message");
    }
}
