// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the card sections.
//!
//! The `App` struct wires together the card state machines, localization, and
//! the music player, and translates card schedules into tokio sleeps. This
//! file intentionally keeps policy decisions (window size, autoplay fallback,
//! subscription cadence) close to the main update loop so user-facing
//! behavior is easy to audit.

use crate::album::{self, PhotoAlbum};
use crate::audio::MusicPlayer;
use crate::card::{self, carousel, confetti, CardState, Delayed, Effect};
use crate::config;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui;
use iced::widget::{mouse_area, scrollable, Column, Container, Stack, Text};
use iced::{alignment, time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging the card, localization, and audio.
pub struct App {
    pub i18n: I18n,
    card: CardState,
    music: Option<MusicPlayer>,
    /// One-shot latch for the automatic music start fallback.
    music_attempted: bool,
    music_path: PathBuf,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("album_len", &self.card.carousel.album().len())
            .field("music_attempted", &self.music_attempted)
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Card(card::Message),
    /// The startup album probe finished.
    AlbumLoaded(PhotoAlbum),
    /// The music button was pressed.
    MusicToggled,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory to probe for photos.
    pub album_dir: Option<String>,
    /// Optional path to the background music track.
    pub music_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;

fn window_settings() -> window::Settings {
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
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            card: CardState::new(content::POEM_LINES.len(), &mut rand::rng()),
            music: None,
            music_attempted: false,
            music_path: config.music_path(),
        }
    }
}

impl App {
    /// Initializes application state, kicks off the album probe, and attempts
    /// the initial music autoplay.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let album_dir = flags
            .album_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| config.album_dir());
        let music_path = flags
            .music_path
            .map(PathBuf::from)
            .unwrap_or_else(|| config.music_path());

        let mut app = App {
            i18n,
            music_path,
            ..Self::default()
        };

        if config.music_autoplay.unwrap_or(true) {
            match MusicPlayer::load(&app.music_path) {
                Ok(mut player) => {
                    player.play();
                    app.music = Some(player);
                    // Startup playback worked; the tap fallback stays armed
                    // only when it did not.
                    app.music_attempted = true;
                }
                Err(err) => {
                    eprintln!("Music unavailable at startup: {:?}", err);
                }
            }
        } else {
            app.music_attempted = true;
        }

        let task = Task::perform(album::probe_directory(album_dir), Message::AlbumLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        // The auto-advance timer only runs once photos exist.
        let advance = if self.card.carousel.album().is_empty() {
            Subscription::none()
        } else {
            time::every(carousel::AUTO_ADVANCE_PERIOD)
                .map(|_| Message::Card(card::Message::Carousel(carousel::Message::AutoAdvance)))
        };

        // The animation tick only runs while a burst is on screen.
        let animate = if self.card.confetti.is_visible() {
            time::every(confetti::ANIMATE_INTERVAL)
                .map(|_| Message::Card(card::Message::Confetti(confetti::Message::Animate)))
        } else {
            Subscription::none()
        };

        Subscription::batch([advance, animate])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Card(message) => {
                let update = self.card.update(message, &mut rand::rng());
                let side_effect = match update.effect {
                    Effect::AttemptMusicStart => self.attempt_music_start(),
                    Effect::None => Task::none(),
                };
                let schedules = Task::batch(update.schedules.into_iter().map(schedule));
                Task::batch([schedules, side_effect])
            }
            Message::AlbumLoaded(album) => {
                self.card.set_album(album);
                Task::none()
            }
            Message::MusicToggled => {
                self.music_attempted = true;
                match self.music.as_mut() {
                    Some(player) if player.is_playing() => player.pause(),
                    Some(player) => player.play(),
                    None => self.start_music(),
                }
                Task::none()
            }
        }
    }

    /// One-shot fallback for when the startup autoplay failed: the first
    /// generic tap retries, later taps leave the player alone.
    fn attempt_music_start(&mut self) -> Task<Message> {
        if !self.music_attempted {
            self.music_attempted = true;
            if self.music.is_none() {
                self.start_music();
            }
        }
        Task::none()
    }

    fn start_music(&mut self) {
        match MusicPlayer::load(&self.music_path) {
            Ok(mut player) => {
                player.play();
                self.music = Some(player);
            }
            Err(err) => {
                eprintln!("Music unavailable: {:?}", err);
            }
        }
    }

    fn music_playing(&self) -> bool {
        self.music.as_ref().is_some_and(MusicPlayer::is_playing)
    }

    fn view(&self) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(ui::design_tokens::spacing::XXL)
            .padding(ui::design_tokens::spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(self.music_button())
            .push(
                ui::title::view(
                    self.card.wiggling,
                    self.card.easter_egg_visible,
                    &self.i18n,
                )
                .map(Message::Card),
            )
            .push(
                ui::gallery::view(&self.card.carousel, &self.i18n)
                    .map(|m| Message::Card(card::Message::Carousel(m))),
            )
            .push(
                ui::book::view(&self.card.book, &self.i18n)
                    .map(|m| Message::Card(card::Message::Book(m))),
            )
            .push(ui::letter::view(self.card.letter_revealed, &self.i18n).map(Message::Card))
            .push(ui::quirky::view(self.card.tap_count, &self.i18n).map(Message::Card));

        let mut layers = Stack::new()
            .push(ui::effects::DecorationLayer::new(&self.card.decorations).into_element())
            .push(
                scrollable(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );

        if self.card.confetti.is_visible() {
            layers = layers
                .push(ui::effects::ConfettiOverlay::new(self.card.confetti.particles())
                    .into_element());
        }

        // Taps that no widget captured still count toward the celebration
        // counter and the music fallback.
        mouse_area(
            Container::new(layers)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(Message::Card(card::Message::BackgroundTapped))
        .into()
    }

    fn music_button(&self) -> Element<'_, Message> {
        let glyph = if self.music_playing() {
            "\u{266B}"
        } else {
            "\u{266A}"
        };
        iced::widget::button(
            Text::new(glyph).size(ui::design_tokens::typography::TITLE_MD),
        )
        .padding([
            ui::design_tokens::spacing::XS,
            ui::design_tokens::spacing::SM,
        ])
        .style(ui::styles::button::primary)
        .on_press(Message::MusicToggled)
        .into()
    }
}

/// Turns a card schedule into a delayed task delivery.
fn schedule(delayed: Delayed<card::Message>) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delayed.after).await;
            delayed.message
        },
        Message::Card,
    )
}
