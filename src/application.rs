use chrono::NaiveDateTime;

use cosmic::app::{Core, Task as CosmicTask, context_drawer};
use cosmic::iced::{Length, Subscription};
use cosmic::widget::{button, container, icon, scrollable};
use cosmic::{Application, Element, executor};

use ticklist::config::TicklistConfig;
use ticklist::core::gate::ReminderGate;
use ticklist::core::greeting::greeting;
use ticklist::core::reminder::{REMINDER_INTERVAL, check_reminders};
use ticklist::core::task_list::TaskList;
use ticklist::error::{StoreError, ValidationError};
use ticklist::notify::DesktopNotifier;
use ticklist::store::TaskStore;

use crate::fl;
use crate::message::{Message, Status};
use crate::pages;

pub const APP_ID: &str = "dev.ticklist.app";

/// Suggested lead time when a reminder is first switched on.
const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextDrawerState {
    Settings,
}

pub struct Flags {
    pub config: TicklistConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
    pub store: TaskStore,
}

pub struct Ticklist {
    core: Core,
    config: TicklistConfig,
    cosmic_config: cosmic::cosmic_config::Config,
    store: TaskStore,
    notifier: DesktopNotifier,

    // Data
    tasks: TaskList,

    // New task form
    task_input: String,
    reminder: ReminderGate,

    // UI state
    greeting: String,
    status: Option<Status>,
    context_drawer_state: Option<ContextDrawerState>,
}

impl Application for Ticklist {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let mut app = Self {
            core,
            config: flags.config,
            cosmic_config: flags.cosmic_config,
            store: flags.store,
            notifier: DesktopNotifier::new(fl!("app-title")),
            tasks: TaskList::new(),
            task_input: String::new(),
            reminder: ReminderGate::default(),
            greeting: greeting(now()),
            status: None,
            context_drawer_state: None,
        };
        app.load_tasks(false);

        let theme = cosmic::command::set_theme(app.config.theme.theme());
        (app, theme)
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        vec![
            button::icon(icon::from_name("emblem-system-symbolic"))
                .on_press(Message::OpenSettings)
                .into(),
        ]
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Message>> {
        let drawer_state = self.context_drawer_state?;

        match drawer_state {
            ContextDrawerState::Settings => Some(
                context_drawer::context_drawer(
                    container(scrollable(pages::settings::settings_view(&self.config, self.store.path())))
                        .width(Length::Fill),
                    Message::CloseSettings,
                )
                .title(fl!("settings")),
            ),
        }
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        if self.context_drawer_state.is_some() {
            self.close_drawer();
        } else {
            self.status = None;
        }
        CosmicTask::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            cosmic::iced::time::every(REMINDER_INTERVAL).map(|_| Message::Tick),
            cosmic::iced::event::listen_with(|event, _status, _id| match event {
                cosmic::iced::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                    key: cosmic::iced::keyboard::Key::Character(ref c),
                    modifiers,
                    ..
                }) if c.as_str() == "s" && modifiers.control() => Some(Message::SaveTasks),
                _ => None,
            }),
        ])
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::TaskInputChanged(value) => {
                self.task_input = value;
            }

            Message::AddTask => {
                self.add_task(now());
            }

            Message::ReminderToggled(enabled) => {
                if enabled {
                    self.reminder.enable(now() + chrono::Duration::minutes(DEFAULT_REMINDER_LEAD_MINUTES));
                } else {
                    self.reminder.disable();
                }
            }

            Message::ReminderInputChanged(value) => {
                self.reminder.input = value;
            }

            Message::ToggleTask(idx) => {
                if self.tasks.toggle(idx) {
                    self.persist();
                }
            }

            Message::MoveTask(idx, offset) => {
                if self.tasks.move_task(idx, offset) {
                    self.persist();
                }
            }

            Message::ClearReminder(idx) => {
                if self.tasks.clear_reminder(idx) {
                    self.persist();
                }
            }

            Message::DeleteCompleted => {
                let removed = self.tasks.delete_completed();
                if removed == 0 {
                    self.status = Some(Status::info(fl!("nothing-to-delete")));
                } else {
                    log::info!("Deleted {} completed tasks", removed);
                    self.status = Some(Status::info(fl!("tasks-deleted", count = removed)));
                    self.persist();
                }
            }

            Message::SaveTasks => match self.store.save(&self.tasks) {
                Ok(()) => {
                    self.status = Some(Status::info(fl!("tasks-saved")));
                }
                Err(e) => {
                    log::error!("Failed to save tasks: {}", e);
                    self.status = Some(Status::error(fl!("tasks-save-failed")));
                }
            },

            Message::LoadTasks => {
                self.load_tasks(true);
            }

            Message::OpenSettings => {
                self.context_drawer_state = Some(ContextDrawerState::Settings);
                self.core.window.show_context = true;
            }

            Message::CloseSettings => {
                self.close_drawer();
            }

            Message::SetTheme(choice) => {
                if choice != self.config.theme {
                    log::info!("Switching theme to {}", choice.name());
                    self.config.theme = choice;
                    self.save_config();
                }
                return cosmic::command::set_theme(choice.theme());
            }

            Message::ToggleDebugLogging => {
                self.config.debug_logging = !self.config.debug_logging;
                ticklist::set_debug_logging(self.config.debug_logging);
                self.save_config();
            }

            Message::DismissStatus => {
                self.status = None;
            }

            Message::Tick => {
                self.tick(now());
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let input_enabled = self.reminder.input_enabled(now());
        pages::tasks::tasks_view(
            &self.greeting,
            self.status.as_ref(),
            &self.tasks,
            &self.task_input,
            &self.reminder,
            input_enabled,
        )
    }
}

impl Ticklist {
    fn add_task(&mut self, now: NaiveDateTime) {
        // An enabled reminder that doesn't parse is as good as one in the past.
        let reminder = match (self.reminder.enabled, self.reminder.reminder()) {
            (false, _) => None,
            (true, Some(at)) => Some(at),
            (true, None) => {
                self.status = Some(Status::warning(fl!("reminder-not-future")));
                return;
            }
        };

        match self.tasks.add(&self.task_input, reminder, now) {
            Ok(()) => {
                self.task_input.clear();
                self.reminder.reset();
                self.status = None;
                self.persist();
            }
            Err(ValidationError::EmptyText) => {
                self.status = Some(Status::warning(fl!("task-empty")));
            }
            Err(ValidationError::ReminderNotInFuture) => {
                self.status = Some(Status::warning(fl!("reminder-not-future")));
            }
        }
    }

    fn tick(&mut self, now: NaiveDateTime) {
        self.greeting = greeting(now);

        let fired = check_reminders(&mut self.tasks, now, &mut self.notifier);
        if fired > 0 {
            self.status = Some(Status::info(fl!("reminders-fired", count = fired)));
            self.persist();
        }
    }

    /// Replace the list from disk. On failure the in-memory list is kept.
    fn load_tasks(&mut self, explicit: bool) {
        match self.store.load() {
            Ok(tasks) => {
                log::info!("Loaded {} tasks from {}", tasks.len(), self.store.path().display());
                if explicit {
                    self.status = Some(Status::info(fl!("tasks-loaded", count = tasks.len())));
                }
                self.tasks = tasks;
            }
            Err(StoreError::Missing(path)) => {
                log::info!("No task file at {}", path.display());
                self.status = Some(Status::warning(fl!("tasks-none-saved")));
            }
            Err(e) => {
                log::warn!("Failed to load tasks: {}", e);
                self.status = Some(Status::warning(fl!("tasks-load-failed")));
            }
        }
    }

    /// Write-through after every list mutation.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.tasks) {
            log::error!("Failed to save tasks: {}", e);
            self.status = Some(Status::error(fl!("tasks-save-failed")));
        }
    }

    fn close_drawer(&mut self) {
        self.context_drawer_state = None;
        self.core.window.show_context = false;
    }

    fn save_config(&self) {
        use cosmic::cosmic_config::CosmicConfigEntry;
        if let Err(e) = self.config.write_entry(&self.cosmic_config) {
            log::error!("Failed to save config: {:?}", e);
        }
    }
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

