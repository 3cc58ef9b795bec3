use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, scrollable, text, text_input};
use cosmic::Element;

use ticklist::core::gate::ReminderGate;
use ticklist::core::task_list::TaskList;

use crate::components::task_row::task_list_view;
use crate::fl;
use crate::message::{Message, Status, StatusLevel};

pub fn tasks_view<'a>(
    greeting: &str,
    status: Option<&Status>,
    tasks: &TaskList,
    task_input: &str,
    reminder: &ReminderGate,
    input_enabled: bool,
) -> Element<'a, Message> {
    let mut content = column().spacing(12);

    content = content.push(text::title3(greeting.to_string()));

    if let Some(status) = status {
        content = content.push(status_banner(status));
    }

    // --- New task ---
    let mut input = text_input::text_input(fl!("task-placeholder"), task_input.to_string())
        .width(Length::Fill);
    if input_enabled {
        input = input
            .on_input(Message::TaskInputChanged)
            .on_submit(|_| Message::AddTask);
    }
    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(input)
            .push(
                button::suggested(fl!("add-task"))
                    .on_press_maybe(input_enabled.then_some(Message::AddTask)),
            ),
    );

    let mut reminder_input = text_input::text_input(fl!("reminder-placeholder"), reminder.input.clone())
        .width(Length::Fixed(180.0));
    if reminder.enabled {
        reminder_input = reminder_input.on_input(Message::ReminderInputChanged);
    }
    let mut reminder_row = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(checkbox(fl!("reminder-label"), reminder.enabled).on_toggle(Message::ReminderToggled))
        .push(reminder_input);
    if !input_enabled {
        reminder_row = reminder_row.push(text::caption(fl!("reminder-invalid")));
    }
    content = content.push(reminder_row);

    // --- List ---
    if tasks.is_empty() {
        content = content.push(
            container(text::body(fl!("tasks-empty")))
                .padding(32)
                .center_x(Length::Fill),
        );
    } else {
        content = content.push(task_list_view(tasks));
    }

    // --- Actions ---
    content = content.push(
        row()
            .spacing(8)
            .push(button::destructive(fl!("delete-completed")).on_press(Message::DeleteCompleted))
            .push(container(text::body("")).width(Length::Fill))
            .push(button::standard(fl!("load-tasks")).on_press(Message::LoadTasks))
            .push(button::standard(fl!("save-tasks")).on_press(Message::SaveTasks)),
    );

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_banner(status: &Status) -> Element<'static, Message> {
    let icon_name = match status.level {
        StatusLevel::Info => "dialog-information-symbolic",
        StatusLevel::Warning => "dialog-warning-symbolic",
        StatusLevel::Error => "dialog-error-symbolic",
    };

    container(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(icon::from_name(icon_name).size(16).icon())
            .push(text::body(status.text.clone()).width(Length::Fill))
            .push(
                button::icon(icon::from_name("window-close-symbolic"))
                    .on_press(Message::DismissStatus),
            ),
    )
    .padding(8)
    .class(cosmic::theme::Container::Card)
    .width(Length::Fill)
    .into()
}
