//! Plain-text component listing.

use std::fmt;

use crate::labeling::Component;

/// An ordered list of components rendered one per line, followed by a total.
///
/// ```text
/// Connected Component 3, number of pixels = 120
/// Connected Component 1, number of pixels = 7
/// Total number of connected components = 2
/// ```
///
/// The total line has no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    components: Vec<Component>,
}

impl ComponentReport {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.components.iter().map(|c| {
            format!(
                "Connected Component {}, number of pixels = {}",
                c.label, c.pixel_count
            )
        })
    }

    pub fn total_line(&self) -> String {
        format!(
            "Total number of connected components = {}",
            self.components.len()
        )
    }
}

impl fmt::Display for ComponentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        f.write_str(&self.total_line())
    }
}
