//! HTTP request handlers.

mod categories;
mod health;
mod links;

pub use categories::categories_handler;
pub use health::health_handler;
pub use links::whatsapp_links_handler;

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::{JoinError, JoinHandle};

/// A scrape running on its own task, aborted when the handler is dropped.
///
/// axum drops the handler future when the client disconnects; the scrape
/// must stop with it instead of fetching upstream pages nobody will read.
struct ScrapeTask<T>(JoinHandle<T>);

impl<T: Send + 'static> ScrapeTask<T> {
    fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self(tokio::spawn(future))
    }
}

impl<T> Future for ScrapeTask<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for ScrapeTask<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
