use std::path::Path;

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, row, text};
use cosmic::Element;

use ticklist::config::{ThemeChoice, TicklistConfig};

use crate::fl;
use crate::message::Message;

pub fn settings_view<'a>(config: &TicklistConfig, tasks_path: &Path) -> Element<'a, Message> {
    let mut content = column().spacing(12);

    // --- Theme ---
    let theme_names: Vec<String> = ThemeChoice::ALL.iter().map(|t| t.name().to_string()).collect();
    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::body(fl!("settings-theme")).width(Length::Fill))
            .push(
                cosmic::widget::dropdown(theme_names, Some(config.theme.index()), |idx| {
                    Message::SetTheme(ThemeChoice::from_index(idx))
                })
                .width(Length::Fixed(120.0)),
            ),
    );

    // --- Debug logging ---
    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::body(fl!("settings-debug-logging")).width(Length::Fill))
            .push(
                cosmic::widget::toggler(config.debug_logging)
                    .on_toggle(|_| Message::ToggleDebugLogging),
            ),
    );

    // --- Tasks file ---
    content = content.push(text::title4(fl!("settings-tasks-file")));
    content = content.push(text::caption(tasks_path.display().to_string()));

    content.into()
}
