pub mod html_import;
pub mod opener;

pub use opener::{SystemOpener, UrlOpener};

/// Replaces tabs and line breaks so a value fits on one output line.
pub fn single_line(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}
