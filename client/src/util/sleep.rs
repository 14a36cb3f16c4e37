//! Real-timer sleeper for the simulated session latency.

use std::time::Duration;

use session::Sleeper;

/// Sleeper backed by a browser timeout. Outside hydration it resolves
/// immediately, which keeps SSR rendering synchronous.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleeper;

impl Sleeper for BrowserSleeper {
    #[allow(clippy::manual_async_fn)]
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        async move {
            #[cfg(feature = "hydrate")]
            {
                let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
                gloo_timers::future::TimeoutFuture::new(millis).await;
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = duration;
            }
        }
    }
}
