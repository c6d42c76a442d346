//! A service for greeting someone.
//!
//! The JS twin of this function lives in `client/util/say_hello.js` and is
//! concatenated into every browser bundle; both sides must produce the
//! same text for the same input.

use tracing::instrument;

/// Returns a greeting based on someone's name.
#[instrument(ret)]
pub fn say_hello(name: &str) -> String {
    format!("Hello {name}!")
}
