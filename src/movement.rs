use crate::geometry::Point;

/// Pure movement calculation logic that can be tested without Bevy runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementCalculation {
    pub movement_vector: Point,
    pub should_move: bool,
    pub distance_to_target: f64,
    pub slowdown_factor: f64,
}

impl MovementCalculation {
    fn idle(distance_to_target: f64) -> Self {
        Self {
            movement_vector: Point::ORIGIN,
            should_move: false,
            distance_to_target,
            slowdown_factor: 0.0,
        }
    }
}

/// Configuration for movement calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    pub speed: f64,
    pub stopping_distance: f64,
    pub slowdown_distance: f64,
    pub delta_time: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            stopping_distance: 0.1,
            slowdown_distance: 2.0,
            delta_time: 1.0 / 60.0, // 60 FPS
        }
    }
}

/// Calculate one step of movement from `current_position` toward `target_position`
pub fn calculate_movement(
    current_position: Point,
    target_position: Option<Point>,
    config: MovementConfig,
) -> MovementCalculation {
    let Some(target) = target_position else {
        return MovementCalculation::idle(0.0);
    };

    let direction = (target - current_position).normalize_or_zero();
    let distance = current_position.distance(target);

    if distance <= config.stopping_distance {
        return MovementCalculation::idle(distance);
    }

    let max_move_distance = config.speed * config.delta_time;

    // Apply slowdown as we approach target
    let slowdown_factor = if config.slowdown_distance > 0.0 {
        (distance / config.slowdown_distance).min(1.0)
    } else {
        1.0
    };
    let actual_move_distance = max_move_distance * slowdown_factor;

    // Clamp movement to not overshoot target
    let clamped_move_distance = actual_move_distance.min(distance);

    MovementCalculation {
        movement_vector: direction * clamped_move_distance,
        should_move: true,
        distance_to_target: distance,
        slowdown_factor,
    }
}

/// Validate a destination before asking for a path to it
pub fn validate_target(current_position: Point, target_position: Point) -> bool {
    let distance = current_position.distance(target_position);

    distance > 0.01 && // Must be meaningful distance
    distance < 10_000.0 && // Reasonable maximum distance
    target_position.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_movement_calculation() {
        let current = Point::new(0.0, 0.0);
        let target = Point::new(5.0, 0.0);
        let config = MovementConfig::default();

        let result = calculate_movement(current, Some(target), config);

        assert!(result.should_move);
        assert_eq!(result.distance_to_target, 5.0);
        assert!(result.movement_vector.length() > 0.0);
        assert!(result.movement_vector.x > 0.0);
        assert_eq!(result.movement_vector.y, 0.0);
    }

    #[test]
    fn test_no_target_no_movement() {
        let result = calculate_movement(Point::new(0.0, 0.0), None, MovementConfig::default());

        assert!(!result.should_move);
        assert_eq!(result.movement_vector, Point::ORIGIN);
        assert_eq!(result.distance_to_target, 0.0);
    }

    #[test]
    fn test_close_target_no_movement() {
        let current = Point::new(0.0, 0.0);
        let target = Point::new(0.05, 0.0); // Within stopping distance

        let result = calculate_movement(current, Some(target), MovementConfig::default());

        assert!(!result.should_move);
        assert_eq!(result.movement_vector, Point::ORIGIN);
    }

    #[test]
    fn test_slowdown_near_target() {
        let current = Point::new(0.0, 0.0);
        let target = Point::new(1.0, 0.0); // Within slowdown distance (2.0)
        let config = MovementConfig::default();

        let result = calculate_movement(current, Some(target), config);

        assert!(result.should_move);
        assert!(result.slowdown_factor < 1.0);
        assert!(result.movement_vector.length() < config.speed * config.delta_time);
    }

    #[test]
    fn test_movement_clamping() {
        let current = Point::new(0.0, 0.0);
        let target = Point::new(0.5, 0.0);
        let config = MovementConfig {
            speed: 100.0,
            delta_time: 1.0,
            slowdown_distance: 0.0,
            ..Default::default()
        };

        let result = calculate_movement(current, Some(target), config);

        assert!(result.should_move);
        assert_eq!(result.movement_vector, Point::new(0.5, 0.0));
    }

    #[test]
    fn test_diagonal_movement_distance() {
        let result = calculate_movement(
            Point::new(0.0, 0.0),
            Some(Point::new(3.0, 4.0)),
            MovementConfig::default(),
        );
        assert_eq!(result.distance_to_target, 5.0);
        assert!(result.movement_vector.x > 0.0 && result.movement_vector.y > 0.0);
    }

    #[test]
    fn test_target_validation() {
        let origin = Point::new(0.0, 0.0);
        assert!(validate_target(origin, Point::new(10.0, 0.0)));
        assert!(!validate_target(origin, Point::new(0.001, 0.0)));
        assert!(!validate_target(origin, Point::new(50_000.0, 0.0)));
        assert!(!validate_target(origin, Point::new(f64::NAN, 0.0)));
    }
}
