//! Timer helpers shared by native and wasm builds.

use std::future::Future;
use std::pin::pin;

use futures_util::future::{self, Either};

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Race `fut` against a timer. `None` means the timer won.
pub async fn with_timeout<F: Future>(ms: u64, fut: F) -> Option<F::Output> {
    let fut = pin!(fut);
    let timer = pin!(sleep_ms(ms));
    match future::select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
