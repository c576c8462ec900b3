//! Conversion and rendering of results.

use crate::Mode;

/// Trim and convert every input, keeping order.
pub fn convert_all<S: AsRef<str>>(mode: Mode, inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| mode.convert(input.as_ref().trim()))
        .collect()
}

/// Format converted strings for stdout.
///
/// Returns `None` when there is nothing to print. A single result has no
/// trailing newline; several results are joined and terminated by one.
pub fn render(outputs: &[String]) -> Option<String> {
    match outputs {
        // Unreachable from the CLI: collected input is never an empty list.
        [] => None,
        [single] => Some(single.clone()),
        many => {
            let mut text = many.join("\n");
            text.push('\n');
            Some(text)
        }
    }
}
