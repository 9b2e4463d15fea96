//! Website up/down detection.
//!
//! A check normalizes the user's input into a URL, sends one request with a
//! bounded timeout and classifies what came back:
//!
//! - `UP`: the server answered with a 2xx or 3xx status.
//! - `DOWN`: any other status, a failed connection, or no answer in time.
//! - `ERROR`: the input could not be turned into a request target.
//!
//! ```no_run
//! # async fn demo() {
//! let result = downdetector::check_url_status("example.com").await;
//! println!("{} {}", result.status, result.status_line());
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod http_probe;
pub mod pages;
pub mod session;

pub use http_probe::prelude::*;
