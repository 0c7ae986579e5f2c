//! Callback-style completion for any client call.
//!
//! Every API method returns a future. Callers that prefer a completion
//! callback can attach one with [`CallbackExt::with_callback`]; the callback
//! sees the same outcome the future resolves with.
//!
//! ```no_run
//! use vine_api::{CallbackExt, VineClient};
//!
//! # async fn run() -> vine_api::Result<()> {
//! let client = VineClient::new()?;
//! client
//!     .popular(&Default::default())
//!     .with_callback(|err, page| match (err, page) {
//!         (None, Some(page)) => println!("{} popular posts", page.records.len()),
//!         (Some(err), _) => eprintln!("failed: {err}"),
//!         _ => {}
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, VineError};
use futures::future::FutureExt;
use std::future::Future;

/// Adds [`with_callback`](CallbackExt::with_callback) to futures resolving to
/// a [`Result`].
pub trait CallbackExt<T>: Future<Output = Result<T>> + Sized {
    /// Invoke `callback(error, value)` once when the future completes.
    ///
    /// Exactly one argument is `Some`. The returned future still resolves with
    /// the original outcome.
    fn with_callback<F>(self, callback: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(Option<&VineError>, Option<&T>),
    {
        self.inspect(move |outcome| match outcome {
            Ok(value) => callback(None, Some(value)),
            Err(err) => callback(Some(err), None),
        })
    }
}

impl<T, Fut> CallbackExt<T> for Fut where Fut: Future<Output = Result<T>> {}
