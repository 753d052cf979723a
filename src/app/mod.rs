// SPDX-License-Identifier: MPL-2.0
//! Demo viewer that shows a single remote GIF.
//!
//! The `App` struct owns one [`RemoteImage`] and forwards its messages,
//! tasks and subscriptions through the Iced application loop.

mod message;

pub use message::{Flags, Message};

use crate::config;
use crate::phase::{Phase, PhaseKind};
use crate::ui::remote_image::RemoteImage;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{column, container, text};
use iced::{alignment, window, Color, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 200;
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Redraw interval of the loading spinner (~60 fps).
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Root Iced application state.
pub struct App {
    image: RemoteImage<Message>,
    loading_since: Instant,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App").field("image", &self.image).finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Maps every phase to what the viewer shows for it.
fn render_phase(phase: &Phase) -> Element<'_, Message> {
    match phase {
        Phase::Loading => text("Loading...").into(),
        Phase::Error => text("Could not load this GIF").into(),
        Phase::Success(gif) => gif.view(),
    }
}

impl App {
    /// Loads settings and starts fetching the GIF named in `flags`.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, warning) = match &flags.config_path {
            Some(path) => config::load_or_default(path),
            None => config::load(),
        };
        if let Some(warning) = warning {
            log::warn!("{warning}");
        }
        if let Some(fit) = flags.fit {
            config.playback.fit = fit;
        }

        let mut image = RemoteImage::new(flags.url, render_phase).with_config(&config);
        let task = image.on_appear().map(Message::Image);

        let now = Instant::now();
        let app = Self {
            image,
            loading_since: now,
            now,
        };
        (app, task)
    }

    pub fn title(&self) -> String {
        format!("IcedGiffy - {}", self.image.url())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Image(message) => self.image.update(message),
            Message::SpinnerTick(now) => self.now = now,
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let image_sub = self.image.subscription().map(Message::Image);
        let spinner_sub = if self.image.kind() == PhaseKind::Loading {
            iced::time::every(SPINNER_TICK).map(Message::SpinnerTick)
        } else {
            Subscription::none()
        };
        Subscription::batch([image_sub, spinner_sub])
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = self.image.view();
        let body: Element<'_, Message> = if self.image.kind() == PhaseKind::Loading {
            let elapsed = self.now.saturating_duration_since(self.loading_since);
            column![
                AnimatedSpinner::new(Color::WHITE, elapsed).into_element(),
                content
            ]
            .spacing(12.0)
            .align_x(alignment::Horizontal::Center)
            .into()
        } else {
            content
        };

        container(body)
            .padding(16.0)
            .center(Length::Fill)
            .into()
    }

    /// Phase currently shown by the viewer.
    pub fn phase(&self) -> PhaseKind {
        self.image.kind()
    }
}
