//! View rendering.
//!
//! Produces neutral render descriptions (data, not markup) from the catalog
//! state, with every interpolated string HTML-escaped.

mod escape;
mod locale;
mod view;

pub use escape::{Escaped, escape_html, safe_url};
pub use locale::Locale;
pub use view::{
    Card, DownloadAction, RenderDescription, ResultCount, Stats, TagButton, describe_view,
};
