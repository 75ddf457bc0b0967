//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::dto::CatalogOutcome;
use crate::application::{FetchCatalogUseCase, GallerySession, LoadImagesUseCase};
use crate::domain::entities::{ImageCache, ProductTable};
use crate::domain::errors::ImageFetchError;
use crate::infrastructure::config::UiConfig;
use crate::infrastructure::image::decode_preview;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{
    DecodedPreviews, FailureScreen, GalleryKeyResult, GalleryScreen, GalleryScreenState,
    LoadingScreen,
};
use crate::presentation::widgets::ImageManager;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum Action {
    CatalogLoaded(CatalogOutcome),
    ImagesLoaded {
        result: Result<ImageCache, ImageFetchError>,
        previews: DecodedPreviews,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

enum CurrentScreen {
    Loading(LoadingScreen),
    Gallery(Box<GalleryScreenState>),
    Failed,
}

/// Runs the event loop and drives the session from loading to gallery.
pub struct App {
    state: AppState,
    screen: CurrentScreen,
    session: GallerySession,
    fetch_catalog: Arc<FetchCatalogUseCase>,
    load_images: Arc<LoadImagesUseCase>,
    ui: UiConfig,
    images: ImageManager,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    pending_gallery: Option<Box<GalleryScreenState>>,
}

impl App {
    /// Creates the app on the loading screen.
    #[must_use]
    pub fn new(
        fetch_catalog: FetchCatalogUseCase,
        load_images: LoadImagesUseCase,
        ui: UiConfig,
        images: ImageManager,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let mut loading = LoadingScreen::new(
            ui.title.clone(),
            ui.loading_message.clone(),
            ui.enable_animations,
        );
        loading.set_detail("Fetching catalog...");

        Self {
            state: AppState::Running,
            screen: CurrentScreen::Loading(loading),
            session: GallerySession::new(),
            fetch_catalog: Arc::new(fetch_catalog),
            load_images: Arc::new(load_images),
            ui,
            images,
            action_tx,
            action_rx,
            pending_gallery: None,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start_catalog_fetch();

        self.run_event_loop(terminal).await?;

        info!(phase = self.session.phase(), "Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if let CurrentScreen::Loading(loading) = &mut self.screen {
                        loading.tick(ANIMATION_TICK_RATE);
                        self.finish_loading_if_complete();
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn start_catalog_fetch(&self) {
        debug!("Fetching catalog");
        let fetch_catalog = self.fetch_catalog.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let outcome = fetch_catalog.execute().await;
            let _ = tx.send(Action::CatalogLoaded(outcome));
        });
    }

    fn start_image_load(&self, table: ProductTable) {
        debug!(rows = table.len(), "Fetching images");
        let load_images = self.load_images.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = load_images.execute(&table).await;
            let previews = match &result {
                Ok(cache) => decode_previews(cache.clone()).await,
                Err(_) => DecodedPreviews::new(),
            };
            let _ = tx.send(Action::ImagesLoaded { result, previews });
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::CatalogLoaded(outcome) => {
                if let Some(failure) = &outcome.failure {
                    warn!(error = %failure, "Catalog unavailable");
                }

                if let Some(table) = self.session.records_loaded(outcome) {
                    if let CurrentScreen::Loading(loading) = &mut self.screen {
                        loading.set_detail(format!("Loading {} images...", table.len()));
                    }
                    self.start_image_load(table);
                } else {
                    self.prepare_gallery(&DecodedPreviews::new());
                }
            }
            Action::ImagesLoaded { result, previews } => {
                if let Err(e) = &result {
                    error!(error = %e, "Image batch failed");
                }

                self.session.images_loaded(result);
                self.prepare_gallery(&previews);
            }
        }

        self.finish_loading_if_complete();
    }

    /// Builds the gallery state once the session settled and lets the
    /// loading screen play out.
    fn prepare_gallery(&mut self, previews: &DecodedPreviews) {
        if let Some(view) = self.session.view() {
            self.pending_gallery = Some(Box::new(GalleryScreenState::new(
                view,
                previews,
                self.ui.image_height,
            )));
        }

        if let CurrentScreen::Loading(loading) = &mut self.screen {
            loading.set_data_ready();
        }
    }

    fn finish_loading_if_complete(&mut self) {
        let CurrentScreen::Loading(loading) = &self.screen else {
            return;
        };
        if !loading.is_complete() {
            return;
        }

        if let Some(gallery) = self.pending_gallery.take() {
            info!(phase = self.session.phase(), "Showing gallery");
            self.screen = CurrentScreen::Gallery(gallery);
        } else if matches!(self.session, GallerySession::Failed { .. }) {
            self.screen = CurrentScreen::Failed;
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(&key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        let CurrentScreen::Gallery(state) = &mut self.screen else {
            return if EventHandler::is_quit_event(key) {
                EventResult::Exit
            } else {
                EventResult::Continue
            };
        };

        let visible = self
            .session
            .view()
            .map_or(0, |view| view.visible_rows().len());

        match state.handle_key(key, visible) {
            GalleryKeyResult::Quit => EventResult::Exit,
            GalleryKeyResult::FilterSelected(filter) => {
                self.session.select_filter(filter);
                EventResult::Consumed
            }
            GalleryKeyResult::Consumed => EventResult::Consumed,
            GalleryKeyResult::Ignored => EventResult::Continue,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        match &mut self.screen {
            CurrentScreen::Loading(screen) => {
                frame.render_widget(screen, frame.area());
            }
            CurrentScreen::Gallery(state) => {
                if let Some(view) = self.session.view() {
                    let screen = GalleryScreen::new(&self.ui.title, view, &self.images);
                    frame.render_stateful_widget(screen, frame.area(), state.as_mut());
                }
            }
            CurrentScreen::Failed => {
                let reason = match &self.session {
                    GallerySession::Failed { reason } => reason.as_str(),
                    _ => "unknown error",
                };
                frame.render_widget(FailureScreen::new(&self.ui.title, reason), frame.area());
            }
        }
    }
}

/// Decodes every fetched image off the async runtime.
async fn decode_previews(cache: ImageCache) -> DecodedPreviews {
    tokio::task::spawn_blocking(move || {
        cache
            .iter()
            .map(|(url, blob)| {
                let decoded = decode_preview(blob).map(Arc::new).map_err(|e| {
                    warn!(url, error = %e, "Failed to decode image");
                    e.to_string()
                });
                (url.to_string(), decoded)
            })
            .collect()
    })
    .await
    .unwrap_or_else(|e| {
        error!(error = %e, "Decode task panicked");
        DecodedPreviews::new()
    })
}
