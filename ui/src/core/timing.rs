//! Timer utilities. Every delay in the site is a one-shot sleep; repetition and
//! cancellation are handled by the controllers through generation tokens.

/// Suspend the current task for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Format a millisecond delay as a CSS time value (`"0.3s"`).
pub fn css_seconds(ms: u64) -> String {
    let secs = ms as f64 / 1000.0;
    format!("{secs}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_seconds_matches_stagger_steps() {
        assert_eq!(css_seconds(0), "0s");
        assert_eq!(css_seconds(100), "0.1s");
        assert_eq!(css_seconds(300), "0.3s");
        assert_eq!(css_seconds(2500), "2.5s");
    }
}
