//! Interpolation strategies for pointer motion paths
//!
//! This module converts a start and a target coordinate into a finite,
//! ordered sequence of intermediate screen coordinates under a chosen
//! interpolation law. Path generation is a pure function of its inputs:
//! identical (start, target, strategy, steps) always produce the identical
//! coordinate sequence.
//!
//! # Example
//!
//! ```rust
//! use virtual_input::motion::{generate_path, MovementStrategy, PathPoint, DEFAULT_STEPS};
//!
//! let start = PathPoint::new(0, 0);
//! let target = PathPoint::new(100, 0);
//!
//! let path = generate_path(start, target, MovementStrategy::Linear, DEFAULT_STEPS);
//! assert_eq!(path.len(), 101);
//! assert_eq!(path[0], start);
//! assert_eq!(path[50], PathPoint::new(50, 0));
//! assert_eq!(path[100], target);
//! ```

use serde::{Deserialize, Serialize};

/// Number of intermediate steps per path unless configured otherwise
pub const DEFAULT_STEPS: u32 = 100;

/// An absolute screen coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PathPoint {
    /// X coordinate in pixels
    pub x: i32,
    /// Y coordinate in pixels
    pub y: i32,
}

impl PathPoint {
    /// Creates a new point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0)
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl std::ops::Add for PathPoint {
    type Output = PathPoint;

    fn add(self, other: PathPoint) -> PathPoint {
        PathPoint {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for PathPoint {
    type Output = PathPoint;

    fn sub(self, other: PathPoint) -> PathPoint {
        PathPoint {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::fmt::Display for PathPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The closed set of pointer movement laws
///
/// The scalar-easing variants (`Linear` through `SineWave`, plus
/// `CubicInterpolation`) blend start and target through a factor function
/// of normalized time. The spline variants evaluate a full 2-D curve and
/// are not reducible to a scalar factor times a linear blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementStrategy {
    /// Jump straight to the target with a single cursor write
    Instant,
    /// Constant-velocity straight line
    Linear,
    /// Accelerating start, `f = t²`
    EaseIn,
    /// Decelerating finish, `f = 1-(1-t)²`
    EaseOut,
    /// Smoothstep, `f = t²(3-2t)`
    CubicEase,
    /// Sine-shaped ease-in-out, `f = (sin(tπ - π/2)+1)/2`
    SineWave,
    /// Quadratic Bezier arcing through a control point level with the start
    Bezier,
    /// Smoothstep blend between the endpoints; kept as a distinct tag for
    /// API compatibility even though its output coincides with `CubicEase`
    CubicInterpolation,
    /// Hermite-basis curve with tangents taken from 1/3 and 2/3 control points
    CardinalSpline,
    /// Hermite-basis curve with half-displacement tangents
    HermiteSpline,
    /// Catmull-Rom segment framed by mirrored phantom points
    CatmullRomSpline,
}

/// Scalar easing laws mapping normalized time `t ∈ [0,1]` to a blend factor
pub mod easing {
    use std::f64::consts::PI;

    /// No easing, `f = t`
    pub fn linear(t: f64) -> f64 {
        t
    }

    /// Quadratic ease-in, `f = t²`
    pub fn ease_in(t: f64) -> f64 {
        t * t
    }

    /// Quadratic ease-out, `f = 1-(1-t)²`
    pub fn ease_out(t: f64) -> f64 {
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Smoothstep, `f = t²(3-2t)`
    pub fn smoothstep(t: f64) -> f64 {
        t * t * (3.0 - 2.0 * t)
    }

    /// Sine-shaped ease-in-out, `f = (sin(tπ - π/2)+1)/2`
    pub fn sine_wave(t: f64) -> f64 {
        ((t * PI - PI / 2.0).sin() + 1.0) / 2.0
    }
}

/// Generates the ordered coordinate sequence for one pointer move
///
/// For every strategy except `Instant` the result holds `steps + 1` points:
/// the start at `t = 0`, the target at `t = 1`, and the interior samples in
/// strictly increasing `t` order. `Instant` yields the target alone.
/// Real-valued intermediate positions are truncated toward zero.
pub fn generate_path(
    start: PathPoint,
    target: PathPoint,
    strategy: MovementStrategy,
    steps: u32,
) -> Vec<PathPoint> {
    let steps = steps.max(1);

    match strategy {
        MovementStrategy::Instant => vec![target],
        MovementStrategy::Linear => eased_path(start, target, steps, easing::linear),
        MovementStrategy::EaseIn => eased_path(start, target, steps, easing::ease_in),
        MovementStrategy::EaseOut => eased_path(start, target, steps, easing::ease_out),
        MovementStrategy::CubicEase => eased_path(start, target, steps, easing::smoothstep),
        MovementStrategy::SineWave => eased_path(start, target, steps, easing::sine_wave),
        // The classic cubic formulation derives 1/3 and 2/3 control points,
        // but the observed blend collapses to a smoothstep between the
        // endpoints; that output is preserved here.
        MovementStrategy::CubicInterpolation => {
            eased_path(start, target, steps, easing::smoothstep)
        }
        MovementStrategy::Bezier => quadratic_bezier_path(start, target, steps),
        MovementStrategy::CardinalSpline => cardinal_path(start, target, steps),
        MovementStrategy::HermiteSpline => hermite_path(start, target, steps),
        MovementStrategy::CatmullRomSpline => catmull_rom_path(start, target, steps),
    }
}

/// Blends start and target through a scalar factor function
fn eased_path(
    start: PathPoint,
    target: PathPoint,
    steps: u32,
    factor: fn(f64) -> f64,
) -> Vec<PathPoint> {
    let dx = f64::from(target.x - start.x);
    let dy = f64::from(target.y - start.y);

    (0..=steps)
        .map(|i| {
            let f = factor(f64::from(i) / f64::from(steps));
            PathPoint::new(
                (f64::from(start.x) + dx * f) as i32,
                (f64::from(start.y) + dy * f) as i32,
            )
        })
        .collect()
}

/// Quadratic Bezier through a single control point at the horizontal
/// midpoint, level with the start
fn quadratic_bezier_path(start: PathPoint, target: PathPoint, steps: u32) -> Vec<PathPoint> {
    // Integer midpoint, truncated like every other coordinate
    let control = PathPoint::new((start.x + target.x) / 2, start.y);

    (0..=steps)
        .map(|i| {
            let t = f64::from(i) / f64::from(steps);
            let mt = 1.0 - t;
            let x = mt * mt * f64::from(start.x)
                + 2.0 * mt * t * f64::from(control.x)
                + t * t * f64::from(target.x);
            let y = mt * mt * f64::from(start.y)
                + 2.0 * mt * t * f64::from(control.y)
                + t * t * f64::from(target.y);
            PathPoint::new(x as i32, y as i32)
        })
        .collect()
}

/// Cubic Hermite basis functions `h1..h4`
fn hermite_basis(t: f64) -> (f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        2.0 * t3 - 3.0 * t2 + 1.0,
        -2.0 * t3 + 3.0 * t2,
        t3 - 2.0 * t2 + t,
        t3 - t2,
    )
}

/// Evaluates `p(t) = start·h1 + target·h2 + m1·h3 + m2·h4` over the step grid
fn hermite_blend(
    start: PathPoint,
    target: PathPoint,
    m1: PathPoint,
    m2: PathPoint,
    steps: u32,
) -> Vec<PathPoint> {
    (0..=steps)
        .map(|i| {
            let t = f64::from(i) / f64::from(steps);
            let (h1, h2, h3, h4) = hermite_basis(t);
            let x = f64::from(start.x) * h1
                + f64::from(target.x) * h2
                + f64::from(m1.x) * h3
                + f64::from(m2.x) * h4;
            let y = f64::from(start.y) * h1
                + f64::from(target.y) * h2
                + f64::from(m1.y) * h3
                + f64::from(m2.y) * h4;
            PathPoint::new(x as i32, y as i32)
        })
        .collect()
}

/// Cardinal variant: tangents recovered from control points placed at 1/3
/// and 2/3 of the displacement
fn cardinal_path(start: PathPoint, target: PathPoint, steps: u32) -> Vec<PathPoint> {
    let d = target - start;
    let c1 = start + PathPoint::new(d.x / 3, d.y / 3);
    let c2 = start + PathPoint::new(2 * d.x / 3, 2 * d.y / 3);

    // m1 = 3(c1 - start), m2 = 3(target - c2); with exact thirds both equal
    // the displacement, and the 1-pixel truncation of c1/c2 carries through.
    let m1 = PathPoint::new(3 * (c1.x - start.x), 3 * (c1.y - start.y));
    let m2 = PathPoint::new(3 * (target.x - c2.x), 3 * (target.y - c2.y));

    hermite_blend(start, target, m1, m2, steps)
}

/// Hermite variant: tangents are plus and minus half the displacement
fn hermite_path(start: PathPoint, target: PathPoint, steps: u32) -> Vec<PathPoint> {
    let d = target - start;
    let m1 = PathPoint::new(d.x / 2, d.y / 2);
    let m2 = PathPoint::new(-d.x / 2, -d.y / 2);

    hermite_blend(start, target, m1, m2, steps)
}

/// Catmull-Rom segment with phantom points mirroring the displacement
fn catmull_rom_path(start: PathPoint, target: PathPoint, steps: u32) -> Vec<PathPoint> {
    let d = target - start;
    let p0 = start - d;
    let p1 = start;
    let p2 = target;
    let p3 = target + d;

    let axis = |a: i32, b: i32, c: i32, e: i32, t: f64, t2: f64, t3: f64| {
        0.5 * (2.0 * f64::from(b)
            + f64::from(c - a) * t
            + f64::from(2 * a - 5 * b + 4 * c - e) * t2
            + f64::from(-a + 3 * b - 3 * c + e) * t3)
    };

    (0..=steps)
        .map(|i| {
            let t = f64::from(i) / f64::from(steps);
            let t2 = t * t;
            let t3 = t2 * t;
            PathPoint::new(
                axis(p0.x, p1.x, p2.x, p3.x, t, t2, t3) as i32,
                axis(p0.y, p1.y, p2.y, p3.y, t, t2, t3) as i32,
            )
        })
        .collect()
}
