//! Resolves and applies the artificial delay a client asked for.
//!
//! An explicit `delay` always wins over `random_delay` when both are given;
//! `random_delay` draws once, uniformly, over an inclusive `[min, max]` range.

use std::time::Duration;

use rand::Rng;

use super::params::ParamSet;

pub fn resolve(params: &ParamSet) -> Option<Duration> {
    if let Some(ms) = params.delay {
        return Some(Duration::from_millis(ms));
    }
    if let (Some(min), Some(max)) = (params.random_delay.min, params.random_delay.max) {
        let ms = if min == max {
            min
        } else {
            rand::rng().random_range(min..=max)
        };
        return Some(Duration::from_millis(ms));
    }
    None
}

pub async fn apply(params: &ParamSet) {
    if let Some(wait) = resolve(params) {
        tokio::time::sleep(wait).await;
    }
}
