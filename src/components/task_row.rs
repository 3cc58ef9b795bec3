use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::Element;

use ticklist::core::task::Task;
use ticklist::core::task_list::TaskList;

use crate::fl;
use crate::message::Message;

// Column widths for consistent alignment
const COL_CHECK: f32 = 28.0;
const COL_ACTION: f32 = 36.0;

const REMINDER_DISPLAY: &str = "%a %b %d, %H:%M";

pub fn task_list_view(tasks: &TaskList) -> Element<'static, Message> {
    let last = tasks.len().saturating_sub(1);
    let mut content = column().spacing(4);
    for (idx, task) in tasks.tasks().iter().enumerate() {
        content = content.push(task_row(idx, task, idx == 0, idx == last));
    }
    content.into()
}

fn task_row(idx: usize, task: &Task, is_first: bool, is_last: bool) -> Element<'static, Message> {
    // 1. Checkbox
    let check: Element<'static, Message> = col(
        COL_CHECK,
        checkbox("", task.completed).on_toggle(move |_| Message::ToggleTask(idx)),
    );

    // 2. Text with optional reminder caption
    let mut body = column().spacing(2).push(text::body(task.text.clone()));
    if let Some(at) = task.reminder {
        let time = at.format(REMINDER_DISPLAY).to_string();
        body = body.push(text::caption(fl!("reminder-at", time = time)));
    }
    let body: Element<'static, Message> = container(body).width(Length::Fill).into();

    // 3. Clear reminder
    let clear: Element<'static, Message> = if task.reminder.is_some() {
        col(
            COL_ACTION,
            button::icon(icon::from_name("alarm-symbolic"))
                .on_press(Message::ClearReminder(idx)),
        )
    } else {
        col(COL_ACTION, text::caption(""))
    };

    // 4. Reorder
    let up: Element<'static, Message> = col(
        COL_ACTION,
        button::icon(icon::from_name("go-up-symbolic"))
            .on_press_maybe((!is_first).then_some(Message::MoveTask(idx, -1))),
    );
    let down: Element<'static, Message> = col(
        COL_ACTION,
        button::icon(icon::from_name("go-down-symbolic"))
            .on_press_maybe((!is_last).then_some(Message::MoveTask(idx, 1))),
    );

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(check)
        .push(body)
        .push(clear)
        .push(up)
        .push(down)
        .into()
}

fn col(width: f32, content: impl Into<Element<'static, Message>>) -> Element<'static, Message> {
    container(content).width(Length::Fixed(width)).into()
}
