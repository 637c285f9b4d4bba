/// A freshly fetched exchange rate. Produced on every fetch, never cached.
/// Failures are carried by `NotifierError`, not by this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
    /// Rate text ready for display (separators or plain decimal, source-dependent).
    pub value: String,
    /// Base currency code, e.g. "AUD".
    pub currency: String,
}

impl Rate {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }
}

/// Per-broadcast delivery tally. Ephemeral, not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub succeeded: usize,
    pub failed: usize,
}
