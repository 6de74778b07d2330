// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the design controller, the designer view cache, the shared
//! rasterizer and the clipboard, and turns messages into controller events,
//! export tasks and toasts.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::designer::{Controller, Refresh};
use crate::domain::design::HexColor;
use crate::export::{ImageClipboard, Rasterizer, ResvgRasterizer, SystemClipboard};
use crate::presets::LocalStorage;
use crate::ui::designer;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

const APP_TITLE: &str = "IconForge";

/// Export parameters read from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSettings {
    pub raster_size: u32,
    pub label_color: HexColor,
}

impl From<&config::Config> for ExportSettings {
    fn from(config: &config::Config) -> Self {
        Self {
            raster_size: config.export.raster_size(),
            label_color: config.export.label_color(),
        }
    }
}

/// Root iced application state.
pub struct App {
    controller: Controller<LocalStorage>,
    designer: designer::State,
    rasterizer: Arc<dyn Rasterizer>,
    /// Kept for the whole session; some platforms drop clipboard content
    /// when the owning handle goes away.
    clipboard: Box<dyn ImageClipboard>,
    theme_mode: ThemeMode,
    export: ExportSettings,
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("design", self.controller.state())
            .field("theme_mode", &self.theme_mode)
            .field("export", &self.export)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    #[allow(clippy::cast_precision_loss)]
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
///
/// The directory flags are registered as path overrides before boot; every
/// later lookup (settings, presets, session state) resolves through them.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.data_dir, flags.config_dir);

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let export = ExportSettings::from(&config);
        let rasterizer: Arc<dyn Rasterizer> = Arc::new(ResvgRasterizer::new(export.label_color));

        let mut app = Self::from_parts(
            LocalStorage::open(None),
            rasterizer,
            Box::new(SystemClipboard::new()),
            config.general.theme_mode,
            export,
        );

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        for warning in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        tracing::info!(
            raster_size = export.raster_size,
            presets = app.controller.presets().len(),
            "designer ready"
        );
        (app, Task::none())
    }

    /// Builds the app around the given collaborators and renders the
    /// initial design.
    pub fn from_parts(
        storage: LocalStorage,
        rasterizer: Arc<dyn Rasterizer>,
        clipboard: Box<dyn ImageClipboard>,
        theme_mode: ThemeMode,
        export: ExportSettings,
    ) -> Self {
        let controller = Controller::new(storage);
        let mut designer = designer::State::new(Arc::clone(&rasterizer));
        controller.render(Refresh::ALL, &mut designer);

        Self {
            controller,
            designer,
            rasterizer,
            clipboard,
            theme_mode,
            export,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        format!("{} - {APP_TITLE}", self.controller.state().label().padded())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            designer: &mut self.designer,
            rasterizer: &self.rasterizer,
            clipboard: self.clipboard.as_mut(),
            export: self.export,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Designer(designer_message) => {
                update::handle_designer_message(&mut ctx, designer_message)
            }
            Message::CopyRasterized(image) => {
                update::handle_copy_rasterized(&mut ctx, image);
                Task::none()
            }
            Message::ExportFinished { format, outcome } => {
                update::handle_export_finished(&mut ctx, format, outcome);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            designer: &self.designer,
            design: self.controller.state(),
            notifications: &self.notifications,
        })
    }
}
