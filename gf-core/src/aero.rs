//! Tabulated aerodynamic coefficients.
//!
//! Lift and drag coefficients for a dimpled ball come from wind-tunnel
//! measurements taken on a fixed grid of speeds and spin rates. The lookup
//! deliberately snaps to the nearest measured bucket instead of
//! interpolating, matching the resolution of the source data: ten ascending
//! speed² bins by seven spin-rate bins.
//!
//! The table values are empirical constants and must be reproduced exactly.

/// Dimensionless lift and drag coefficients for one (speed², spin) bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub lift: f64,
    pub drag: f64,
}

const fn c(lift: f64, drag: f64) -> Coefficients {
    Coefficients { lift, drag }
}

/// Measured (lift, drag) pairs, rows indexed by speed² bin, columns by
/// spin-rate bin.
#[rustfmt::skip]
const COEFFICIENT_TABLE: [[Coefficients; 7]; 10] = [
    [c(-0.11, 0.52), c(-0.06, 0.39), c(0.06, 0.36), c(0.35, 0.42), c(0.39, 0.40), c(0.41, 0.48), c(0.49, 0.52)],
    [c( 0.00, 0.33), c( 0.12, 0.25), c(0.18, 0.28), c(0.33, 0.36), c(0.36, 0.38), c(0.38, 0.43), c(0.45, 0.45)],
    [c( 0.06, 0.22), c( 0.17, 0.24), c(0.24, 0.27), c(0.29, 0.31), c(0.33, 0.34), c(0.34, 0.37), c(0.39, 0.39)],
    [c( 0.07, 0.23), c( 0.14, 0.23), c(0.19, 0.25), c(0.24, 0.28), c(0.28, 0.30), c(0.31, 0.33), c(0.35, 0.36)],
    [c( 0.07, 0.24), c( 0.13, 0.24), c(0.16, 0.25), c(0.20, 0.27), c(0.24, 0.28), c(0.27, 0.30), c(0.31, 0.34)],
    [c( 0.07, 0.24), c( 0.12, 0.24), c(0.15, 0.25), c(0.18, 0.26), c(0.21, 0.26), c(0.24, 0.29), c(0.28, 0.32)],
    [c( 0.08, 0.25), c( 0.12, 0.25), c(0.14, 0.25), c(0.17, 0.26), c(0.19, 0.26), c(0.22, 0.28), c(0.26, 0.29)],
    [c( 0.08, 0.25), c( 0.12, 0.25), c(0.14, 0.25), c(0.16, 0.26), c(0.18, 0.26), c(0.20, 0.28), c(0.23, 0.29)],
    [c( 0.07, 0.25), c( 0.11, 0.25), c(0.13, 0.25), c(0.15, 0.26), c(0.17, 0.26), c(0.18, 0.27), c(0.22, 0.28)],
    [c( 0.07, 0.24), c( 0.11, 0.24), c(0.13, 0.25), c(0.15, 0.26), c(0.16, 0.26), c(0.17, 0.27), c(0.20, 0.27)],
];

/// Upper bounds (exclusive) of the first nine speed² bins (m²/s²). The
/// tenth bin is everything above the last threshold.
const SPEED_SQ_THRESHOLDS: [f64; 9] = [
    338.0, 705.0, 1226.0, 1874.0, 2654.0, 3588.0, 4698.0, 5939.0, 7249.0,
];

/// Upper bounds (exclusive) of the first six spin-rate bins (RPM).
const SPIN_RATE_THRESHOLDS: [f64; 6] = [500.0, 1433.0, 2340.0, 3283.0, 4223.0, 5478.0];

fn speed_sq_bin(ground_speed_squared: f64) -> usize {
    SPEED_SQ_THRESHOLDS
        .iter()
        .position(|threshold| ground_speed_squared <= *threshold)
        .unwrap_or(SPEED_SQ_THRESHOLDS.len())
}

fn spin_rate_bin(spin_rate: f64) -> usize {
    SPIN_RATE_THRESHOLDS
        .iter()
        .position(|threshold| spin_rate <= *threshold)
        .unwrap_or(SPIN_RATE_THRESHOLDS.len())
}

/// Look up lift and drag coefficients for a ground-relative speed² (m²/s²)
/// and spin rate (RPM).
///
/// Pure step function: every input pair inside the same bucket yields the
/// identical coefficients.
pub fn lift_and_drag_coefficients(ground_speed_squared: f64, spin_rate: f64) -> Coefficients {
    let row = speed_sq_bin(ground_speed_squared);
    let col = spin_rate_bin(spin_rate);
    COEFFICIENT_TABLE[row][col]
}

// =============================================================================
// Tests
// =============================================================================
