use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Render the urgency trigger button showing the selected label.
///
pub fn trigger(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let focused = state.current_focus() == Focus::Urgency;
    let urgency = state.urgency();
    let label = urgency
        .selected_option()
        .map(|option| option.label.as_str())
        .unwrap_or("Select...");
    let arrow = if urgency.is_open() { "▴" } else { "▾" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            urgency.label().to_string(),
            styling::block_title_style(theme, focused),
        ))
        .border_style(styling::block_border_style(theme, focused));
    let line = Line::from(vec![
        Span::styled(label.to_string(), styling::normal_text_style(theme)),
        Span::styled(format!(" {}", arrow), styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), size);
}

/// Place the listbox below the trigger, or above it when it does not fit.
///
fn listbox_area(trigger: Rect, screen: Rect, options: usize) -> Rect {
    let height = (options as u16).saturating_add(2);
    let below = screen.bottom().saturating_sub(trigger.bottom());
    let above = trigger.y.saturating_sub(screen.y);
    if below >= height || below >= above {
        Rect::new(trigger.x, trigger.bottom(), trigger.width, height.min(below))
    } else {
        let height = height.min(above);
        Rect::new(trigger.x, trigger.y - height, trigger.width, height)
    }
}

/// Render the open listbox over the form and record where the urgency
/// widget was drawn for pointer hit testing.
///
pub fn listbox(frame: &mut Frame, trigger: Rect, state: &mut State) {
    if !state.urgency().is_open() {
        state.set_urgency_areas(trigger, Rect::default());
        return;
    }

    let theme = state.get_theme().clone();
    let urgency = state.urgency();
    let area = listbox_area(trigger, frame.size(), urgency.options().len());
    let selected_value = urgency.value().map(str::to_string);
    let focused_index = urgency.focused_index();
    let items: Vec<ListItem> = urgency
        .options()
        .iter()
        .map(|option| {
            let marker = if selected_value.as_deref() == Some(option.value.as_str()) {
                "✓ "
            } else {
                "  "
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, option.label),
                styling::normal_text_style(&theme),
            )))
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(&theme, true));
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style(&theme));

    state.set_urgency_areas(trigger, area);
    let list_state = state.urgency_listbox_state();
    list_state.select(focused_index);
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, list_state);
}
