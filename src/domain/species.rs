// Species directory domain models
use super::fish::Ecosystem;

/// Reachability of the species directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartbeatStatus {
    Operational,
    // Part of the v1alpha1 contract; FishBase's heartbeat has no partial state to report.
    #[allow(dead_code)]
    Degraded,
    Down,
}

impl HeartbeatStatus {
    /// Anything below 400 counts as up.
    pub fn from_status_code(code: u16) -> Self {
        if code < 400 {
            HeartbeatStatus::Operational
        } else {
            HeartbeatStatus::Down
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesDetails {
    pub spec_code: i64,
    pub genus: String,
    pub species: String,
    pub subfamily: String,
    pub dangerous: String,
    pub image: String,
    pub ecosystem: Ecosystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_code() {
        assert_eq!(HeartbeatStatus::from_status_code(200), HeartbeatStatus::Operational);
        assert_eq!(HeartbeatStatus::from_status_code(302), HeartbeatStatus::Operational);
        assert_eq!(HeartbeatStatus::from_status_code(399), HeartbeatStatus::Operational);
        assert_eq!(HeartbeatStatus::from_status_code(400), HeartbeatStatus::Down);
        assert_eq!(HeartbeatStatus::from_status_code(503), HeartbeatStatus::Down);
    }
}
