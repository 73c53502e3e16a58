//! Step replay into presentation state, and text rendering.
//!
//! [`RunView`] is the presentation-side mirror of a trace run: it folds
//! steps into highlight and sorted flags. [`TextRenderer`] draws the
//! board as proportional horizontal bars and formats steps as log lines.
//! Neither holds any engine state.

use sortboard_engine::Step;
use sortboard_foundation::Sequence;

// =============================================================================
// Run View
// =============================================================================

/// Presentation state accumulated from consumed steps.
#[derive(Clone, Debug)]
pub struct RunView {
    /// Positions highlighted by the latest compare step.
    comparing: Option<(usize, usize)>,
    /// Positions highlighted by the latest swap step.
    swapping: Option<(usize, usize)>,
    /// Which positions have reached their final place.
    sorted: Vec<bool>,
}

impl RunView {
    /// Creates a view for a board of `len` positions.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            comparing: None,
            swapping: None,
            sorted: vec![false; len],
        }
    }

    /// Folds one consumed step into the view.
    ///
    /// Highlights last for exactly one step, mirroring the transient
    /// comparing/swapped styling of a visual surface.
    pub fn apply(&mut self, step: &Step) {
        self.comparing = None;
        self.swapping = None;
        match *step {
            Step::Compare { i, j } => self.comparing = Some((i, j)),
            Step::Swap { i, j } => self.swapping = Some((i, j)),
            Step::MarkSorted { index } => {
                if let Some(flag) = self.sorted.get_mut(index) {
                    *flag = true;
                }
            }
            Step::Info { .. } => {}
        }
    }

    /// Returns the positions of the latest compare, if it was the last step.
    #[must_use]
    pub const fn comparing(&self) -> Option<(usize, usize)> {
        self.comparing
    }

    /// Returns the positions of the latest swap, if it was the last step.
    #[must_use]
    pub const fn swapping(&self) -> Option<(usize, usize)> {
        self.swapping
    }

    /// Returns true if `index` has been marked sorted.
    #[must_use]
    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.get(index).copied().unwrap_or(false)
    }

    /// Returns true once every position is marked sorted.
    #[must_use]
    pub fn all_sorted(&self) -> bool {
        self.sorted.iter().all(|&flag| flag)
    }
}

// =============================================================================
// Text Renderer
// =============================================================================

/// Renders a board as proportional horizontal bars.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Width in characters of the longest bar.
    width: usize,
}

impl TextRenderer {
    /// Creates a renderer with the default bar width.
    #[must_use]
    pub const fn new() -> Self {
        Self { width: 40 }
    }

    /// Sets the width of the longest bar.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the whole board, one bar line per element.
    ///
    /// Bar length is proportional to the largest key on the board.
    /// Sorted positions carry a `*` marker, the latest compared pair a
    /// `?`, the latest swapped pair a `!`.
    #[must_use]
    pub fn render(&self, seq: &Sequence, view: &RunView) -> String {
        let max = seq.max_key().unwrap_or(1).max(1);
        let mut out = String::new();

        for (index, element) in seq.elements().iter().enumerate() {
            let key = element.key();
            let bar = self.bar(key, max);
            let marker = Self::marker(view, index);
            out.push_str(&format!(
                "{index:>3} {marker} {label:<8} {bar} {key}\n",
                label = element.label(),
            ));
        }
        out
    }

    /// Formats a consumed step as a log line with current board values.
    #[must_use]
    pub fn log_line(&self, step: &Step, seq: &Sequence) -> String {
        match *step {
            Step::Compare { i, j } => format!(
                "> compare position {i} ({}) and {j} ({})",
                Self::key_text(seq, i),
                Self::key_text(seq, j),
            ),
            Step::Swap { i, j } => format!(
                "> swap position {i} and {j} (now {} and {})",
                Self::key_text(seq, i),
                Self::key_text(seq, j),
            ),
            Step::MarkSorted { index } => format!("> position {index} is sorted"),
            Step::Info { ref message } => format!("> {message}"),
        }
    }

    fn bar(&self, key: i64, max: i64) -> String {
        #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
        #[allow(clippy::cast_possible_truncation)]
        let len = if key <= 0 {
            0
        } else {
            ((key as f64 / max as f64) * self.width as f64).round() as usize
        };
        "#".repeat(len.min(self.width))
    }

    fn marker(view: &RunView, index: usize) -> char {
        if view.is_sorted(index) {
            '*'
        } else if matches!(view.swapping(), Some((a, b)) if a == index || b == index) {
            '!'
        } else if matches!(view.comparing(), Some((a, b)) if a == index || b == index) {
            '?'
        } else {
            ' '
        }
    }

    fn key_text(seq: &Sequence, index: usize) -> String {
        seq.key(index).map_or_else(|| "?".to_string(), |k| k.to_string())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
