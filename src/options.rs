//! Translation options and configuration.

/// Widest number, in digits, the downstream macro consumer can represent.
pub const DEFAULT_DIGIT_BUDGET: usize = 10;

/// The kind of layout pattern being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Date/time layout (`dd-MMM-yyyy`)
    DateTime,
    /// Decimal, currency or percent layout (`#,##0.00`)
    Number,
}

/// Options for translating patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslateOptions {
    /// Number of digit positions every integer or fraction run is padded or
    /// truncated to.
    pub digit_budget: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            digit_budget: DEFAULT_DIGIT_BUDGET,
        }
    }
}

impl TranslateOptions {
    /// Returns options with the given digit budget (a budget of 0 becomes 1).
    pub fn with_digit_budget(mut self, digit_budget: usize) -> Self {
        self.digit_budget = digit_budget.max(1);
        self
    }

    /// The effective digit budget, never zero.
    pub fn budget(&self) -> usize {
        self.digit_budget.max(1)
    }
}
