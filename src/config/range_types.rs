use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Obstacle clearance constrained to [0.0, 100.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct ClearanceMargin(f64);

impl ClearanceMargin {
    const MIN: f64 = 0.0;
    const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for ClearanceMargin {
    fn default() -> Self {
        Self::new(crate::pathfinding::DEFAULT_CLEARANCE_MARGIN)
    }
}

/// A waypoint reach distance constrained to [0.01, 10.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct ReachDistance(f64);

impl ReachDistance {
    const MIN: f64 = 0.01;
    const MAX: f64 = 10.0;

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for ReachDistance {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// A movement speed value constrained to [0.1, 1000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct MovementSpeed(f64);

impl MovementSpeed {
    const MIN: f64 = 0.1;
    const MAX: f64 = 1000.0;

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self::new(5.0)
    }
}

/// A stopping distance value constrained to [0.01, 10.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct StoppingDistance(f64);

impl StoppingDistance {
    const MIN: f64 = 0.01;
    const MAX: f64 = 10.0;

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for StoppingDistance {
    fn default() -> Self {
        Self::new(0.1)
    }
}

/// A slowdown distance value constrained to [0.0, 50.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct SlowdownDistance(f64);

impl SlowdownDistance {
    const MIN: f64 = 0.0;
    const MAX: f64 = 50.0;

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SlowdownDistance {
    fn default() -> Self {
        Self::new(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearance_margin_clamping() {
        assert_eq!(ClearanceMargin::new(-1.0).get(), 0.0);
        assert_eq!(ClearanceMargin::new(2.5).get(), 2.5);
        assert_eq!(ClearanceMargin::new(500.0).get(), 100.0);
    }

    #[test]
    fn test_movement_speed_clamping() {
        assert_eq!(MovementSpeed::new(-1.0).get(), 0.1);
        assert_eq!(MovementSpeed::new(5.0).get(), 5.0);
        assert_eq!(MovementSpeed::new(5000.0).get(), 1000.0);
    }

    #[test]
    fn test_display() {
        let speed = MovementSpeed::new(5.5);
        assert_eq!(format!("{speed}"), "5.5");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ClearanceMargin::default().get(), 1.0);
        assert_eq!(ReachDistance::default().get(), 0.5);
        assert_eq!(StoppingDistance::default().get(), 0.1);
        assert_eq!(SlowdownDistance::default().get(), 2.0);
    }
}
