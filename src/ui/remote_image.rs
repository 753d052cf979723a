// SPDX-License-Identifier: MPL-2.0
//! Remote GIF view that loads in phases.
//!
//! [`RemoteImage`] owns a [`Phase`] and a caller-supplied render function.
//! The host drives it like any other Iced component:
//!
//! - call [`RemoteImage::on_appear`] once the view is mounted and run the
//!   returned task,
//! - route [`Message`]s back into [`RemoteImage::update`],
//! - merge [`RemoteImage::subscription`] to keep animations playing,
//! - render with [`RemoteImage::view`].
//!
//! Only the first `on_appear` starts a fetch. Showing the same instance
//! again keeps its phase. To load a different URL, create a new instance.
//!
//! Dropping a `RemoteImage` aborts its outstanding fetch. Completions that
//! still arrive afterwards carry an [`InstanceId`] that no live view matches,
//! and [`RemoteImage::update`] ignores them.
//!
//! # Example
//!
//! ```no_run
//! use iced::widget::text;
//! use iced_giffy::fetch::Url;
//! use iced_giffy::phase::Phase;
//! use iced_giffy::ui::remote_image::RemoteImage;
//!
//! let url = Url::parse("https://example.com/cat.gif").unwrap();
//! let mut view: RemoteImage<()> = RemoteImage::new(url, |phase| match phase {
//!     Phase::Loading => text("Loading...").into(),
//!     Phase::Error => text("Error").into(),
//!     Phase::Success(gif) => gif.view(),
//! });
//! let _task = view.on_appear();
//! ```

use crate::config::{Config, NetworkConfig};
use crate::fetch::{self, HttpFetcher, ReqwestFetcher, Url};
use crate::media::Animation;
use crate::phase::{Phase, PhaseKind};
use crate::ui::gif::Gif;
use iced::{task, ContentFit, Element, Subscription, Task};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`RemoteImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Messages for the remote image component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The fetch started by `instance` finished. `None` means it failed.
    Loaded {
        instance: InstanceId,
        animation: Option<Arc<Animation>>,
    },
    /// Advance animation playback.
    Tick(Instant),
}

type Content<M> = Box<dyn for<'p> Fn(&'p Phase) -> Element<'p, M>>;

/// View that fetches a GIF from `url` and renders its current [`Phase`].
pub struct RemoteImage<M> {
    instance: InstanceId,
    url: Url,
    content: Content<M>,
    fetcher: Option<Arc<dyn HttpFetcher>>,
    network: NetworkConfig,
    content_fit: ContentFit,
    phase: Phase,
    started: bool,
    transitions: usize,
    /// Aborts the outstanding fetch when dropped.
    fetch_handle: Option<task::Handle>,
}

impl<M> fmt::Debug for RemoteImage<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteImage")
            .field("instance", &self.instance)
            .field("url", &self.url.as_str())
            .field("phase", &self.phase.kind())
            .field("started", &self.started)
            .finish()
    }
}

impl<M> RemoteImage<M> {
    /// Creates a view for `url` that renders each phase with `content`.
    ///
    /// No request is made until [`RemoteImage::on_appear`] is called.
    pub fn new<F>(url: Url, content: F) -> Self
    where
        F: for<'p> Fn(&'p Phase) -> Element<'p, M> + 'static,
    {
        Self {
            instance: InstanceId::next(),
            url,
            content: Box::new(content),
            fetcher: None,
            network: NetworkConfig::default(),
            content_fit: ContentFit::Contain,
            phase: Phase::Loading,
            started: false,
            transitions: 0,
            fetch_handle: None,
        }
    }

    /// Uses `fetcher` instead of building a [`ReqwestFetcher`] on first
    /// appearance.
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn HttpFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Applies network and playback settings.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.network = config.network.clone();
        self.content_fit = config.playback.fit.into();
        self
    }

    /// Sets how the decoded GIF is scaled once loaded.
    #[must_use]
    pub fn content_fit(mut self, content_fit: ContentFit) -> Self {
        self.content_fit = content_fit;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// Whether [`RemoteImage::on_appear`] has already started the fetch.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Whether a fetch is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.fetch_handle.is_some()
    }

    /// Number of phase transitions so far. Never exceeds one.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Starts the fetch the first time the view appears.
    ///
    /// Later calls return [`Task::none`] and leave the phase untouched.
    pub fn on_appear(&mut self) -> Task<Message> {
        if self.started {
            log::debug!(
                "Remote image {:?} appeared again; keeping phase {}",
                self.instance,
                self.phase.kind()
            );
            return Task::none();
        }
        self.started = true;

        let fetcher = match self.fetcher.clone() {
            Some(fetcher) => fetcher,
            None => match ReqwestFetcher::new(&self.network) {
                Ok(fetcher) => Arc::new(fetcher),
                Err(err) => {
                    log::warn!(
                        "Could not get data for GIF file located at {}: {err}",
                        self.url
                    );
                    self.transition(None);
                    return Task::none();
                }
            },
        };

        let instance = self.instance;
        let (task, handle) = Task::perform(
            fetch::fetch_and_decode(fetcher, self.url.clone()),
            move |animation| Message::Loaded {
                instance,
                animation,
            },
        )
        .abortable();
        self.fetch_handle = Some(handle.abort_on_drop());
        task
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded {
                instance,
                animation,
            } => {
                if instance != self.instance {
                    log::debug!(
                        "Ignoring completion for {instance:?} delivered to {:?}",
                        self.instance
                    );
                    return;
                }
                if self.phase.is_terminal() {
                    log::debug!(
                        "Ignoring late completion for {instance:?}; phase is already {}",
                        self.phase.kind()
                    );
                    return;
                }
                self.transition(animation);
            }
            Message::Tick(now) => {
                if let Phase::Success(gif) = &mut self.phase {
                    gif.tick(now);
                }
            }
        }
    }

    /// Redraw ticks while an animated GIF is playing.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.phase.gif().and_then(Gif::tick_interval) {
            Some(interval) => iced::time::every(interval).map(Message::Tick),
            None => Subscription::none(),
        }
    }

    /// Renders the current phase with the caller's render function.
    pub fn view(&self) -> Element<'_, M> {
        (self.content)(&self.phase)
    }

    fn transition(&mut self, animation: Option<Arc<Animation>>) {
        self.fetch_handle = None;
        self.phase = match animation {
            Some(animation) => Phase::Success(Gif::new(animation).content_fit(self.content_fit)),
            None => Phase::Error,
        };
        self.transitions += 1;
    }
}
