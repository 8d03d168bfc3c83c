use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::DEFAULT_REFRESH_INTERVAL_MS;
use crate::services::logging::Logger;

/// Configuration for periodic refresh behavior
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicRefreshConfig {
    pub interval_ms: u32,
    pub initial_delay_ms: Option<u32>,
}

impl Default for PeriodicRefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            initial_delay_ms: None,
        }
    }
}

impl PeriodicRefreshConfig {
    pub fn every(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            ..Self::default()
        }
    }
}

/// Run `refresh_fn` immediately and then every `config.interval_ms` until the
/// component unmounts or the config changes.
///
/// Each tick fires regardless of whether the previous refresh finished;
/// callers are expected to discard out-of-order results themselves.
#[hook]
pub fn use_periodic_refresh(config: PeriodicRefreshConfig, refresh_fn: Callback<()>) {
    use_effect_with(config, move |config| {
        let active = Rc::new(Cell::new(true));

        {
            let active = active.clone();
            let config = config.clone();
            spawn_local(async move {
                if let Some(initial_delay) = config.initial_delay_ms {
                    TimeoutFuture::new(initial_delay).await;
                }

                Logger::debug_with_component(
                    "periodic-refresh",
                    &format!("Refreshing every {}ms", config.interval_ms),
                );

                while active.get() {
                    refresh_fn.emit(());
                    TimeoutFuture::new(config.interval_ms).await;
                }

                Logger::debug_with_component("periodic-refresh", "Periodic refresh stopped");
            });
        }

        move || active.set(false)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PeriodicRefreshConfig::default();
        assert_eq!(config.interval_ms, 30_000);
        assert_eq!(config.initial_delay_ms, None);
    }

    #[test]
    fn test_config_every() {
        let config = PeriodicRefreshConfig::every(5_000);
        assert_eq!(config.interval_ms, 5_000);
        assert_eq!(config.initial_delay_ms, None);
    }
}
