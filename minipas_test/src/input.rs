//! This module provides the [`Input`] trait, implemented by source fragments generated for
//! property based testing of the scanner.

use proptest::test_runner::{TestCaseError, TestCaseResult};

/// Represents a generated source fragment that knows what the scanner must produce for it.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

/// A run of expected items checked one by one against the produced items.
///
/// A failure names the position of the first mismatching item, so that a shrunk case points
/// straight at the offending token.
impl<'o, T, U> Input<&'o [T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &'o [T]) -> TestCaseResult {
        for (index, input) in self.iter().enumerate() {
            let Some(produced) = output.get(index) else {
                return Err(TestCaseError::fail(format!(
                    "expected {} items, only {} were produced",
                    self.len(),
                    output.len()
                )));
            };

            input
                .assert(produced)
                .map_err(|error| TestCaseError::fail(format!("item #{index}: {error}")))?;
        }

        if output.len() > self.len() {
            return Err(TestCaseError::fail(format!(
                "expected {} items, {} were produced",
                self.len(),
                output.len()
            )));
        }

        Ok(())
    }
}
