//! Section renderers for the landing page.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod panels;
mod products;
mod values;

pub use about::*;
pub use contact::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use panels::*;
pub use products::*;
pub use values::*;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// ` disabled` when the control is off.
pub(crate) fn disabled_attr(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled"
    }
}
