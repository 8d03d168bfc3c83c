/// What the dashboard page should render for its current fetch state
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardPhase {
    /// Nothing loaded yet and a request is in flight
    Loading,
    /// Nothing loaded and the last request failed
    Failed(String),
    /// Data is available; `stale_error` carries the failure of the most
    /// recent poll, if it failed
    Ready { stale_error: Option<String> },
    /// Nothing loaded, nothing in flight, no error
    Empty,
}

impl DashboardPhase {
    /// Loaded data always wins over an error: a failed poll after a success
    /// keeps the last good data on screen with a banner.
    pub fn resolve(has_data: bool, loading: bool, error: Option<&str>) -> Self {
        match (has_data, error) {
            (true, error) => DashboardPhase::Ready {
                stale_error: error.map(str::to_string),
            },
            (false, _) if loading => DashboardPhase::Loading,
            (false, Some(error)) => DashboardPhase::Failed(error.to_string()),
            (false, None) => DashboardPhase::Empty,
        }
    }
}

/// Message shown when the summary cannot be loaded
pub fn connection_error_message(base_url: &str) -> String {
    format!(
        "Failed to load dashboard data. Make sure the backend is running on {}",
        base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_load_shows_loading() {
        assert_eq!(DashboardPhase::resolve(false, true, None), DashboardPhase::Loading);
    }

    #[test]
    fn test_failure_without_data_shows_error_panel() {
        assert_eq!(
            DashboardPhase::resolve(false, false, Some("boom")),
            DashboardPhase::Failed("boom".to_string())
        );
    }

    #[test]
    fn test_retry_without_data_shows_loading() {
        assert_eq!(
            DashboardPhase::resolve(false, true, Some("boom")),
            DashboardPhase::Loading
        );
    }

    #[test]
    fn test_polling_keeps_data_on_screen() {
        assert_eq!(
            DashboardPhase::resolve(true, true, None),
            DashboardPhase::Ready { stale_error: None }
        );
    }

    #[test]
    fn test_failed_poll_keeps_data_with_banner() {
        assert_eq!(
            DashboardPhase::resolve(true, false, Some("boom")),
            DashboardPhase::Ready {
                stale_error: Some("boom".to_string())
            }
        );
    }

    #[test]
    fn test_nothing_to_show() {
        assert_eq!(DashboardPhase::resolve(false, false, None), DashboardPhase::Empty);
    }

    #[test]
    fn test_connection_error_names_backend() {
        assert_eq!(
            connection_error_message("http://localhost:8080"),
            "Failed to load dashboard data. Make sure the backend is running on http://localhost:8080"
        );
    }
}
