//! The viewer controller.
//!
//! [`Viewer`] owns every piece of per-document state: the render tracker, the
//! current [`DocumentView`], zoom, the delivery gate, the status indicator
//! and the current selection. Hosts feed it events (page completions,
//! selection triggers, key commands) and read its state back.

use std::time::Duration;

use seltext_backend::{BackendError, DEFAULT_BASE_URL, Endpoint, PageRenderer, Transport};
use seltext_core::{
    Command, DeliveryGate, ExpandOptions, ExtractWarning, ExtractWarningCode, GateOptions,
    NormalizeOptions, PassId, RenderTracker, SelError, SelectionRange, Settle, SettleDelays,
    Status, TextLayer, Trigger, ViewState, Zoom, ZoomOptions, expand_to_word_boundaries,
    normalize_with,
};
use tracing::{debug, info, warn};

use crate::document::DocumentView;

/// Configuration for a [`Viewer`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewerConfig {
    pub normalize: NormalizeOptions,
    pub gate: GateOptions,
    pub zoom: ZoomOptions,
    pub expand: ExpandOptions,
    /// Waits between a trigger and reading the selection.
    pub settle: SettleDelays,
    /// Base URL of the text server used by [`Viewer::with_http`]
    /// (default: `http://localhost:8888`).
    pub server_url: String,
    /// Per-request timeout for [`Viewer::with_http`]; `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            gate: GateOptions::default(),
            zoom: ZoomOptions::default(),
            expand: ExpandOptions::default(),
            settle: SettleDelays::default(),
            server_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

/// Result of a selection trigger or an export.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// The view is not ready; the event was ignored.
    NotReady,
    /// Nothing is selected, or the selection holds no text.
    Empty,
    /// The gate held the text back (too short or unchanged).
    Suppressed,
    /// The transport accepted `chars` characters.
    Sent { chars: usize },
    /// The transport failed; the text was dropped.
    Failed { chars: usize, error: SelError },
}

/// Result of [`Viewer::handle_command`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A zoom command; `true` if the scale changed and the view was re-rendered.
    Zoom(bool),
    /// A force-save command.
    Delivery(Delivery),
    /// An expand-selection command with the widened range, if any.
    Expanded(Option<SelectionRange>),
}

#[cfg(feature = "http")]
impl<R: PageRenderer> Viewer<R, seltext_backend::HttpTransport> {
    /// A viewer posting to `config.server_url` over HTTP.
    pub fn with_http(renderer: R, config: ViewerConfig) -> Result<Self, BackendError> {
        let transport =
            seltext_backend::HttpTransport::new(&config.server_url, config.request_timeout)?;
        Ok(Self::new(renderer, transport, config))
    }
}

/// Number of characters of delivered text included in log lines.
const PREVIEW_CHARS: usize = 100;

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Viewer controller over a renderer `R` and a transport `T`.
///
/// # Example
///
/// ```ignore
/// let mut viewer = Viewer::new(renderer, transport, ViewerConfig::default());
/// viewer.load();
/// viewer.set_selection(Some(range));
/// std::thread::sleep(viewer.settle_delay(Trigger::PointerRelease));
/// viewer.on_trigger(Trigger::PointerRelease);
/// println!("{}", viewer.status());
/// ```
pub struct Viewer<R, T> {
    renderer: R,
    transport: T,
    config: ViewerConfig,
    tracker: RenderTracker,
    view: DocumentView,
    zoom: Zoom,
    gate: DeliveryGate,
    status: Status,
    selection: Option<SelectionRange>,
}

impl<R: PageRenderer, T: Transport> Viewer<R, T> {
    pub fn new(renderer: R, transport: T, config: ViewerConfig) -> Self {
        let zoom = Zoom::new(config.zoom.clone());
        let gate = DeliveryGate::new(config.gate.clone());
        Self {
            view: DocumentView::new(0, zoom.scale()),
            renderer,
            transport,
            config,
            tracker: RenderTracker::new(),
            zoom,
            gate,
            status: Status::Loading,
            selection: None,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &DocumentView {
        &self.view
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn state(&self) -> ViewState {
        self.tracker.state()
    }

    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    pub fn selection(&self) -> Option<&SelectionRange> {
        self.selection.as_ref()
    }

    /// Pages of the current pass still waiting for a completion.
    pub fn pending_pages(&self) -> Vec<usize> {
        self.tracker.pending()
    }

    /// Text last handed to the transport for the selection endpoint.
    pub fn last_delivered(&self) -> &str {
        self.gate.last_delivered()
    }

    /// How long to wait after `trigger` before calling [`on_trigger`](Self::on_trigger).
    pub fn settle_delay(&self, trigger: Trigger) -> Duration {
        self.config.settle.for_trigger(trigger)
    }

    // --- rendering -------------------------------------------------------

    /// Load the document: render every page at the current scale.
    pub fn load(&mut self) -> PassId {
        self.render_all()
    }

    /// Start a new render pass without rendering anything.
    ///
    /// The previous view is discarded. Completions are then fed through
    /// [`page_rendered`](Self::page_rendered), in any order.
    pub fn begin_render(&mut self) -> PassId {
        let page_count = self.renderer.page_count();
        let pass = self.tracker.begin_pass(page_count);
        self.view = DocumentView::new(page_count, self.zoom.scale());
        self.selection = None;
        info!(
            pass = pass.0,
            pages = page_count,
            scale = self.zoom.scale(),
            "render pass started"
        );
        self.refresh_ready_status();
        pass
    }

    /// Report that page `index` of pass `pass` finished rendering.
    ///
    /// A failed render settles the page with an empty text layer and a
    /// warning on the view.
    pub fn page_rendered(
        &mut self,
        pass: PassId,
        index: usize,
        result: Result<TextLayer, BackendError>,
    ) -> Settle {
        let outcome = self.tracker.settle(pass, index);
        match outcome {
            Settle::Counted => {}
            Settle::Duplicate | Settle::Stale | Settle::OutOfRange => {
                debug!(pass = pass.0, page = index, ?outcome, "page completion ignored");
                return outcome;
            }
        }

        let layer = match result {
            Ok(layer) => layer,
            Err(err) => {
                warn!(page = index, error = %err, "page render failed");
                self.view.push_warning(
                    ExtractWarning::with_code(ExtractWarningCode::RenderFailed, err.to_string())
                        .on_page(index),
                );
                TextLayer::default()
            }
        };
        self.view.set_page(index, layer);
        self.refresh_ready_status();
        outcome
    }

    /// Render every page of a new pass and feed the completions back.
    pub fn render_all(&mut self) -> PassId {
        let pass = self.begin_render();
        for (index, result) in self.render_pages() {
            self.page_rendered(pass, index, result);
        }
        pass
    }

    #[cfg(not(feature = "parallel"))]
    fn render_pages(&self) -> Vec<(usize, Result<TextLayer, BackendError>)> {
        let scale = self.zoom.scale();
        (0..self.renderer.page_count())
            .map(|index| (index, self.renderer.render_page(index, scale)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn render_pages(&self) -> Vec<(usize, Result<TextLayer, BackendError>)> {
        use rayon::prelude::*;

        let renderer = &self.renderer;
        let scale = self.zoom.scale();
        (0..renderer.page_count())
            .into_par_iter()
            .map(|index| (index, renderer.render_page(index, scale)))
            .collect()
    }

    fn refresh_ready_status(&mut self) {
        if self.tracker.is_ready() {
            self.status = Status::Ready;
            info!(
                pages = self.view.page_count(),
                warnings = self.view.warnings().len(),
                "document ready"
            );
        } else {
            self.status = Status::Loading;
        }
    }

    // --- zoom ------------------------------------------------------------

    /// Zoom in one step, re-rendering if the scale changed.
    pub fn zoom_in(&mut self) -> bool {
        let changed = self.zoom.zoom_in();
        self.rerender_if(changed)
    }

    /// Zoom out one step, re-rendering if the scale changed.
    pub fn zoom_out(&mut self) -> bool {
        let changed = self.zoom.zoom_out();
        self.rerender_if(changed)
    }

    /// Return to the default scale, re-rendering if the scale changed.
    pub fn reset_zoom(&mut self) -> bool {
        let changed = self.zoom.reset();
        self.rerender_if(changed)
    }

    fn rerender_if(&mut self, changed: bool) -> bool {
        if changed {
            debug!(scale = self.zoom.scale(), "scale changed");
            self.render_all();
        }
        changed
    }

    // --- selection -------------------------------------------------------

    /// Replace the current selection. `None` clears it.
    pub fn set_selection(&mut self, range: Option<SelectionRange>) {
        self.selection = range;
    }

    /// Extract, normalize and deliver the current selection.
    ///
    /// Call after [`settle_delay`](Self::settle_delay) has elapsed. A
    /// double click with nothing selected is ignored.
    pub fn on_trigger(&mut self, trigger: Trigger) -> Delivery {
        if !self.tracker.is_ready() {
            debug!(?trigger, state = %self.tracker.state(), "selection ignored, view not ready");
            return Delivery::NotReady;
        }
        let Some(range) = self.selection else {
            return Delivery::Empty;
        };
        if range.is_collapsed() {
            return Delivery::Empty;
        }

        let extraction = self.view.extract(&range);
        for warning in &extraction.warnings {
            debug!(%warning, tier = ?extraction.tier, "extraction recovered");
        }
        let text = normalize_with(&extraction.text, &self.config.normalize);
        if text.is_empty() {
            return Delivery::Empty;
        }
        if !self.gate.should_deliver(&text) {
            debug!(chars = text.chars().count(), "selection suppressed by gate");
            return Delivery::Suppressed;
        }
        self.deliver(Endpoint::Selection, &text)
    }

    /// Set the selection and deliver it in one step.
    pub fn select(&mut self, range: SelectionRange, trigger: Trigger) -> Delivery {
        self.set_selection(Some(range));
        self.on_trigger(trigger)
    }

    /// Widen the current selection to word boundaries and keep the result
    /// as the new selection.
    pub fn expand_selection(&mut self) -> Option<SelectionRange> {
        if !self.tracker.is_ready() {
            return None;
        }
        let range = self.selection?;
        let expanded = expand_to_word_boundaries(&range, &self.view.nodes(), &self.config.expand);
        self.selection = Some(expanded);
        Some(expanded)
    }

    /// Deliver the normalized text of every page to the full-document
    /// endpoint. The gate is not consulted.
    pub fn export_full_text(&mut self) -> Delivery {
        if !self.tracker.is_ready() {
            return Delivery::NotReady;
        }
        let text = self.view.full_text(&self.config.normalize);
        if text.is_empty() {
            return Delivery::Empty;
        }
        self.deliver(Endpoint::FullDocument, &text)
    }

    fn deliver(&mut self, endpoint: Endpoint, text: &str) -> Delivery {
        let chars = text.chars().count();
        self.status = Status::Saving { chars };
        info!(%endpoint, chars, preview = %preview(text), "delivering text");
        match self.transport.send(endpoint, text) {
            Ok(()) => {
                self.status = Status::Saved { chars };
                Delivery::Sent { chars }
            }
            Err(err) => {
                warn!(%endpoint, error = %err, "delivery failed");
                self.status = Status::Error;
                Delivery::Failed {
                    chars,
                    error: err.into(),
                }
            }
        }
    }

    // --- commands --------------------------------------------------------

    /// Dispatch a keyboard command.
    pub fn handle_command(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::ZoomIn => CommandOutcome::Zoom(self.zoom_in()),
            Command::ZoomOut => CommandOutcome::Zoom(self.zoom_out()),
            Command::ZoomReset => CommandOutcome::Zoom(self.reset_zoom()),
            Command::ForceSave => CommandOutcome::Delivery(self.on_trigger(Trigger::ForceSave)),
            Command::ExpandSelection => CommandOutcome::Expanded(self.expand_selection()),
        }
    }
}
