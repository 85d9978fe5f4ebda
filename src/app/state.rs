use std::time::Instant;

use chrono::{DateTime, Local};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::gradient::{self, GeneratedSet, GenerationRequest, GradientDescriptor, MAX_COUNT};

use super::indicator::CopiedIndicator;
use super::watch::Watch;
use super::{AppEvent, AppView};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    pub request: GenerationRequest,
    pub gradients: GeneratedSet,
    pub generated_at: Option<DateTime<Local>>,
    pub selected_index: usize,
    /// Swatches per grid row, follows the terminal width.
    pub columns: usize,
    pub copied: CopiedIndicator,
    pub status: Option<String>,
    pub count_popup: Option<CountPopup>,
    watch: Watch<GenerationRequest>,
    clipboard: Box<dyn ClipboardSink>,
    rng: StdRng,
}

/// Free-text entry for the gradient count.
#[derive(Clone, Debug, Default)]
pub struct CountPopup {
    pub input: String,
}

impl App {
    pub fn new(config: &Config, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self::with_rng(config, clipboard, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(config: &Config, clipboard: Box<dyn ClipboardSink>, rng: StdRng) -> Self {
        let mut app = Self {
            running: true,
            view: AppView::Grid,
            request: config.request(),
            gradients: Vec::new(),
            generated_at: None,
            selected_index: 0,
            columns: 1,
            copied: CopiedIndicator::new(config.copied_reset),
            status: None,
            count_popup: None,
            watch: Watch::new(),
            clipboard,
            rng,
        };

        // First poll always fires, producing the initial set.
        app.sync_settings();

        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        self.update_at(event, Instant::now());
    }

    pub fn update_at(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Tick => self.copied.tick(now),
            AppEvent::KeyPress(key) => self.handle_key(key, now),
            AppEvent::Resize(width) => self.set_columns(crate::ui::grid_columns(width)),
            AppEvent::Quit => self.running = false,
        }
        self.sync_settings();
    }

    pub fn selected(&self) -> Option<&GradientDescriptor> {
        self.gradients.get(self.selected_index)
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if self.count_popup.is_some() {
            self.handle_count_key(key);
            return;
        }

        // The help view only answers to the keys that leave it.
        if self.view == AppView::Help
            && !matches!(key, KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc)
        {
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => {
                if self.view == AppView::Help {
                    self.view = AppView::Grid;
                } else {
                    self.running = false;
                }
            }
            KeyCode::Char('?') => {
                self.view = match self.view {
                    AppView::Help => AppView::Grid,
                    AppView::Grid => AppView::Help,
                };
            }
            KeyCode::Char(' ') | KeyCode::Char('g') => self.regenerate(),
            KeyCode::Enter | KeyCode::Char('y') => self.copy_selected(now),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_count(1),
            KeyCode::Char('-') => self.adjust_count(-1),
            KeyCode::Char('n') => self.count_popup = Some(CountPopup::default()),
            KeyCode::Char('t') => {
                self.request.kind = self.request.kind.next();
                self.status = Some(format!("Kind: {}", self.request.kind));
            }
            KeyCode::Char('m') => {
                self.request.mode = self.request.mode.toggle();
                self.status = Some(format!("Color mode: {}", self.request.mode.label()));
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-(self.columns as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(self.columns as isize),
            _ => {}
        }
    }

    fn handle_count_key(&mut self, key: KeyCode) {
        let Some(popup) = self.count_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.count_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_count_popup(),
            KeyCode::Backspace | KeyCode::Delete => {
                popup.input.pop();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                popup.input.push(ch);
            }
            _ => {}
        }
    }

    fn apply_count_popup(&mut self) {
        let Some(popup) = self.count_popup.as_ref() else {
            return;
        };
        let input = popup.input.trim().to_string();
        let Ok(count) = input.parse::<i64>() else {
            self.status = Some(format!(
                "'{input}' is not a number. Enter a count from 1 to {MAX_COUNT}."
            ));
            return;
        };
        self.count_popup = None;
        self.set_count(count);
    }

    fn adjust_count(&mut self, delta: i64) {
        let current = i64::try_from(self.request.count.get()).unwrap_or(i64::MAX);
        self.set_count(current.saturating_add(delta));
    }

    /// Apply a raw count, clamping it into the allowed range.
    fn set_count(&mut self, count: i64) {
        let (request, rejected) =
            GenerationRequest::clamped(count, self.request.kind, self.request.mode);
        self.status = Some(match rejected {
            Some(err) => {
                tracing::info!(count, clamped = request.count.get(), "count clamped");
                format!("{err}; using {}.", request.count)
            }
            None => format!("Count: {}", request.count),
        });
        self.request = request;
    }

    /// Re-run generation if the settings changed since the last run.
    fn sync_settings(&mut self) {
        if self.watch.poll(&self.request) {
            self.regenerate();
        }
    }

    /// Replace the current set with a freshly generated one.
    pub fn regenerate(&mut self) {
        self.gradients = gradient::build_gradients(&self.request, &mut self.rng);
        self.generated_at = Some(Local::now());
        self.copied.cancel();
        if self.selected_index >= self.gradients.len() {
            self.selected_index = self.gradients.len().saturating_sub(1);
        }
        tracing::info!(
            count = self.gradients.len(),
            kind = %self.request.kind,
            mode = self.request.mode.label(),
            "generated gradients"
        );
    }

    fn copy_selected(&mut self, now: Instant) {
        let Some(descriptor) = self.gradients.get(self.selected_index) else {
            return;
        };
        let declaration = descriptor.declaration.clone();
        match self.clipboard.write_text(&declaration) {
            Ok(()) => {
                tracing::debug!(index = self.selected_index, "copied declaration");
                self.status = Some(format!("Copied: {declaration}"));
            }
            Err(err) => {
                tracing::warn!(error = %err, index = self.selected_index, "clipboard write failed");
                self.status = Some(format!("Clipboard unavailable: {err:#}"));
            }
        }
        // The marker cycles whether or not the write succeeded.
        self.copied.mark(self.selected_index, now);
    }

    fn move_selection(&mut self, delta: isize) {
        if self.gradients.is_empty() {
            return;
        }
        let len = self.gradients.len() as isize;
        let target = self.selected_index as isize + delta;
        self.selected_index = if delta.abs() == 1 {
            target.rem_euclid(len) as usize
        } else {
            target.clamp(0, len - 1) as usize
        };
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
