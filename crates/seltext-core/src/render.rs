//! Render-pass completion tracking for a paginated view.
//!
//! Every page of a pass must report that both its glyphs and its text layer
//! are done before the view is ready for selections. Completions arrive in
//! any order and may be repeated; the tracker keeps the set of settled page
//! indices for the current pass, so a page is counted at most once and
//! completions from a superseded pass are ignored.

use std::collections::BTreeSet;
use std::fmt;

/// Identifies one render pass. A new pass starts on load and on every scale
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassId(pub u64);

/// Lifecycle of a document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No document loaded yet.
    Unloaded,
    /// A render pass is in progress.
    Rendering {
        /// Pages in the document.
        page_count: usize,
        /// Pages of the current pass that have settled.
        settled: usize,
    },
    /// Every page of the current pass has settled.
    Ready,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Unloaded => f.write_str("unloaded"),
            ViewState::Rendering {
                page_count,
                settled,
            } => write!(f, "rendering ({settled}/{page_count})"),
            ViewState::Ready => f.write_str("ready"),
        }
    }
}

/// What happened to a reported page completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The page was counted for the current pass.
    Counted,
    /// The page had already settled in this pass.
    Duplicate,
    /// The completion belongs to an older pass.
    Stale,
    /// The page index is not part of the document.
    OutOfRange,
}

/// Task set of outstanding page renders, keyed by page index.
#[derive(Debug, Clone, Default)]
pub struct RenderTracker {
    pass: Option<PassId>,
    page_count: usize,
    settled: BTreeSet<usize>,
}

impl RenderTracker {
    /// A tracker in the [`ViewState::Unloaded`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass over `page_count` pages, discarding all progress of
    /// the previous pass.
    pub fn begin_pass(&mut self, page_count: usize) -> PassId {
        let next = self.pass.map_or(PassId(0), |PassId(n)| PassId(n + 1));
        self.pass = Some(next);
        self.page_count = page_count;
        self.settled.clear();
        next
    }

    /// Record that `page` finished rendering in pass `pass`.
    pub fn settle(&mut self, pass: PassId, page: usize) -> Settle {
        if self.pass != Some(pass) {
            return Settle::Stale;
        }
        if page >= self.page_count {
            return Settle::OutOfRange;
        }
        if self.settled.insert(page) {
            Settle::Counted
        } else {
            Settle::Duplicate
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ViewState {
        match self.pass {
            None => ViewState::Unloaded,
            Some(_) if self.settled.len() == self.page_count => ViewState::Ready,
            Some(_) => ViewState::Rendering {
                page_count: self.page_count,
                settled: self.settled.len(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == ViewState::Ready
    }

    /// The current pass, if a document is loaded.
    pub fn current_pass(&self) -> Option<PassId> {
        self.pass
    }

    /// Page indices of the current pass that have not settled yet.
    pub fn pending(&self) -> Vec<usize> {
        (0..self.page_count)
            .filter(|page| !self.settled.contains(page))
            .collect()
    }
}
