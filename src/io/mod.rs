//! Document loading.
//!
//! The catalog and about documents are read once, from a local file or an
//! `http(s)` URL. A catalog failure becomes a display-level error on the
//! session; an about failure is silent.

mod loader;
mod source;

pub use loader::{DEFAULT_FETCH_TIMEOUT, Loader};
pub use source::{Source, build_http_client};
