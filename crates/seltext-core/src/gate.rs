//! Change detection in front of the transport.
//!
//! A normalized selection is delivered only if it is longer than
//! [`GateOptions::min_chars`] characters and differs from the last delivered
//! string. The gate records a string as delivered *before* the transport is
//! called, so a string whose send failed is not sent again until something
//! else has been delivered in between.

/// Options for [`DeliveryGate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateOptions {
    /// Text must be strictly longer than this many characters (default: 3).
    pub min_chars: usize,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self { min_chars: 3 }
    }
}

/// De-duplication and length filter for extracted selections.
#[derive(Debug, Clone, Default)]
pub struct DeliveryGate {
    options: GateOptions,
    last_delivered: String,
}

impl DeliveryGate {
    pub fn new(options: GateOptions) -> Self {
        Self {
            options,
            last_delivered: String::new(),
        }
    }

    /// Decide whether `text` should go to the transport.
    ///
    /// Returns `true` iff `text` has more than `min_chars` characters and is
    /// not equal to the last delivered string; in that case `text` becomes
    /// the new last-delivered string.
    pub fn should_deliver(&mut self, text: &str) -> bool {
        if !self.passes(text) {
            return false;
        }
        self.last_delivered.clear();
        self.last_delivered.push_str(text);
        true
    }

    /// Same test as [`should_deliver`](Self::should_deliver) without
    /// recording anything.
    pub fn passes(&self, text: &str) -> bool {
        text.chars().count() > self.options.min_chars && text != self.last_delivered
    }

    /// The most recently accepted string (empty before the first delivery).
    pub fn last_delivered(&self) -> &str {
        &self.last_delivered
    }
}
