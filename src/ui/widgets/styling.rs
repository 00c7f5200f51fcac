use crate::form::NotificationKind;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for a block, depending on focus.
///
pub fn block_border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.border_active.to_color())
    } else {
        Style::default().fg(theme.border_normal.to_color())
    }
}

/// Return the title style for a block, depending on focus.
///
pub fn block_title_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        normal_text_style(theme)
    }
}

/// Return the style for the focused option of a list.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for hints and disabled controls.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for inline field errors.
///
pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for the title banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.accent.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the accent style of a toast.
///
pub fn notification_style(theme: &Theme, kind: NotificationKind) -> Style {
    let color = match kind {
        NotificationKind::Info => theme.info,
        NotificationKind::Success => theme.success,
        NotificationKind::Error => theme.error,
    };
    Style::default().fg(color.to_color())
}
