use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state, newest entries at the bottom.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let entries = state.log_entries();
    let items: Vec<ListItem> = entries
        .into_iter()
        .map(|entry| ListItem::new(Line::from(Span::styled(entry, styling::normal_text_style(theme)))))
        .collect();
    let count = items.len();

    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, false));
    let list = List::new(items).block(block);

    // Selecting the last row keeps the view scrolled to the newest entry.
    let mut list_state = ListState::default();
    if count > 0 {
        list_state.select(Some(count - 1));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}
