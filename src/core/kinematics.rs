use thiserror::Error;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

/// Hose-shot description: everything else in this module derives from it.
#[derive(Clone, Copy, Debug)]
pub struct LaunchParameters {
    pub initial_speed_mps: f64,
    pub gravity_mps2: f64,
    pub target_distance_m: f64,
    pub time_of_flight_s: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct VelocityComponents {
    pub horizontal_mps: f64,
    pub vertical_mps: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct ImpactPoint {
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct ApexPoint {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Everything the front-ends need to print or draw one shot.
#[derive(Clone, Debug)]
pub struct StreamSolution {
    pub params: LaunchParameters,
    pub angle_rad: f64,
    pub velocity: VelocityComponents,
    pub samples: Vec<TrajectorySample>,
    pub impact: ImpactPoint,
    pub apex: ApexPoint,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid {name}: expected a positive finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error(
        "target unreachable: distance / (speed * time) = {ratio:.4} exceeds 1, \
         no launch angle satisfies it"
    )]
    UnreachableTarget { ratio: f64 },
}

impl LaunchParameters {
    pub fn validate(&self) -> Result<(), DomainError> {
        let checks = [
            ("initial speed", self.initial_speed_mps),
            ("gravity", self.gravity_mps2),
            ("target distance", self.target_distance_m),
            ("time of flight", self.time_of_flight_s),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Angle whose cosine is `distance / (speed * time)`, checked before the
/// arc-cosine so an unreachable target never surfaces as NaN.
pub fn launch_angle(params: LaunchParameters) -> Result<f64, DomainError> {
    params.validate()?;

    let ratio =
        params.target_distance_m / (params.initial_speed_mps * params.time_of_flight_s);
    if ratio > 1.0 {
        return Err(DomainError::UnreachableTarget { ratio });
    }

    Ok(ratio.acos())
}

pub fn velocity_components(params: LaunchParameters, angle_rad: f64) -> VelocityComponents {
    VelocityComponents {
        horizontal_mps: params.initial_speed_mps * angle_rad.cos(),
        vertical_mps: params.initial_speed_mps * angle_rad.sin(),
    }
}

pub fn position_at_time(
    params: LaunchParameters,
    velocity: VelocityComponents,
    time_s: f64,
) -> (f64, f64) {
    let x = velocity.horizontal_mps * time_s;
    let y = (velocity.vertical_mps * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

pub fn sample_trajectory(
    params: LaunchParameters,
    velocity: VelocityComponents,
    sample_count: usize,
) -> Vec<TrajectorySample> {
    let count = sample_count.max(2);
    (0..count)
        .map(|i| {
            let time_s = (i as f64 * params.time_of_flight_s) / (count - 1) as f64;
            let (x_m, y_m) = position_at_time(params, velocity, time_s);
            TrajectorySample { time_s, x_m, y_m }
        })
        .collect()
}

pub fn impact_point(params: LaunchParameters, velocity: VelocityComponents) -> ImpactPoint {
    let (_, y_m) = position_at_time(params, velocity, params.time_of_flight_s);
    ImpactPoint {
        x_m: params.target_distance_m,
        y_m,
    }
}

/// Highest point of the arc. When the stream is still rising at impact the
/// apex time exceeds the time of flight and the point lies past the plotted
/// window; callers treat it as informational only.
pub fn apex_point(params: LaunchParameters, velocity: VelocityComponents) -> ApexPoint {
    let time_s = velocity.vertical_mps / params.gravity_mps2;
    let (x_m, y_m) = position_at_time(params, velocity, time_s);
    ApexPoint { time_s, x_m, y_m }
}

pub fn solve(
    params: LaunchParameters,
    sample_count: usize,
) -> Result<StreamSolution, DomainError> {
    let angle_rad = launch_angle(params)?;
    let velocity = velocity_components(params, angle_rad);

    Ok(StreamSolution {
        params,
        angle_rad,
        velocity,
        samples: sample_trajectory(params, velocity, sample_count),
        impact: impact_point(params, velocity),
        apex: apex_point(params, velocity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn firemen_params() -> LaunchParameters {
        LaunchParameters {
            initial_speed_mps: 25.0,
            gravity_mps2: 9.8,
            target_distance_m: 45.0,
            time_of_flight_s: 3.0,
        }
    }

    #[test]
    fn derives_known_angle_and_components() {
        let params = firemen_params();
        let angle = launch_angle(params).expect("angle should exist");
        let velocity = velocity_components(params, angle);

        assert_close(angle.to_degrees(), 53.1301, 0.001);
        assert_close(velocity.horizontal_mps, 15.0, 1e-9);
        assert_close(velocity.vertical_mps, 20.0, 1e-9);
    }

    #[test]
    fn impact_height_matches_hand_calculation() {
        let params = firemen_params();
        let solution = solve(params, 100).expect("solution should exist");

        // 20 * 3 - 0.5 * 9.8 * 9
        assert_close(solution.impact.y_m, 15.9, 1e-9);
        assert_close(solution.impact.x_m, 45.0, 1e-9);
    }

    #[test]
    fn last_sample_lands_on_the_target_distance() {
        let solution = solve(firemen_params(), 300).expect("solution should exist");
        let last = solution.samples.last().expect("samples are never empty");

        assert_close(last.time_s, 3.0, 1e-9);
        assert_close(last.x_m, 45.0, 1e-6);
    }

    #[test]
    fn vertical_velocity_vanishes_at_the_apex() {
        let params = firemen_params();
        let solution = solve(params, 100).expect("solution should exist");

        let residual =
            solution.velocity.vertical_mps - params.gravity_mps2 * solution.apex.time_s;
        assert_close(residual, 0.0, 1e-12);
        assert_close(solution.apex.time_s, 20.0 / 9.8, 1e-9);
    }

    #[test]
    fn rejects_unreachable_target() {
        let params = LaunchParameters {
            target_distance_m: 80.0,
            ..firemen_params()
        };
        let err = launch_angle(params).expect_err("angle should not exist");

        assert!(matches!(err, DomainError::UnreachableTarget { .. }));
        assert!(err.to_string().contains("target unreachable"));
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let zero_speed = LaunchParameters {
            initial_speed_mps: 0.0,
            ..firemen_params()
        };
        let negative_gravity = LaunchParameters {
            gravity_mps2: -9.8,
            ..firemen_params()
        };
        let nan_distance = LaunchParameters {
            target_distance_m: f64::NAN,
            ..firemen_params()
        };

        for params in [zero_speed, negative_gravity, nan_distance] {
            let err = launch_angle(params).expect_err("validation should fail");
            assert!(matches!(err, DomainError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn sampled_horizontal_positions_increase_strictly() {
        let solution = solve(firemen_params(), 200).expect("solution should exist");

        for pair in solution.samples.windows(2) {
            assert!(
                pair[1].x_m > pair[0].x_m,
                "x must grow: {} then {}",
                pair[0].x_m,
                pair[1].x_m
            );
        }
    }

    #[test]
    fn symmetric_arc_returns_to_launch_height() {
        // Same 53.13 degree shot, but flown for the full 2 * t_apex so the
        // stream comes back down to y = 0.
        let full_arc_s = 2.0 * 20.0 / 9.8;
        let params = LaunchParameters {
            initial_speed_mps: 25.0,
            gravity_mps2: 9.8,
            target_distance_m: 15.0 * full_arc_s,
            time_of_flight_s: full_arc_s,
        };
        let solution = solve(params, 100).expect("solution should exist");

        assert_close(solution.impact.y_m, 0.0, 1e-9);
        assert_close(solution.apex.time_s, full_arc_s / 2.0, 1e-9);
    }

    #[test]
    fn honours_the_requested_sample_count() {
        let params = firemen_params();
        let angle = launch_angle(params).expect("angle should exist");
        let velocity = velocity_components(params, angle);

        assert_eq!(sample_trajectory(params, velocity, 5).len(), 5);
        // Degenerate requests still produce a drawable two-point curve.
        assert_eq!(sample_trajectory(params, velocity, 0).len(), 2);

        let first = sample_trajectory(params, velocity, 5)[0];
        assert_close(first.time_s, 0.0, 0.0);
        assert_close(first.x_m, 0.0, 0.0);
        assert_close(first.y_m, 0.0, 0.0);
    }

    #[test]
    fn apex_past_the_flight_window_is_still_reported() {
        // Steep short shot: the stream is still rising when it hits.
        let params = LaunchParameters {
            initial_speed_mps: 25.0,
            gravity_mps2: 9.8,
            target_distance_m: 20.0,
            time_of_flight_s: 1.0,
        };
        let solution = solve(params, 100).expect("solution should exist");

        assert!(solution.apex.time_s > params.time_of_flight_s);
        assert!(solution.apex.y_m > solution.impact.y_m);
    }
}
