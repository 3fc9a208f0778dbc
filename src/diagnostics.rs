//! Caller-supplied warning sink
//!
//! Conversion never logs through a global logger. Warnings (color table
//! collisions, unresolved references passed through to the output) are
//! appended to a `Diagnostics` collector owned by the caller, so they are
//! observable and testable without global state.

/// Append-only collection of conversion warnings
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// All warnings recorded so far, in order
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// True if no warnings have been recorded
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_preserve_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        diagnostics.warn("first");
        diagnostics.warn(String::from("second"));
        assert_eq!(diagnostics.warnings(), ["first", "second"]);
    }
}
