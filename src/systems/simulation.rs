//! Simulation system
//!
//! Owns the ball physics and the cached projected wireframe, and hands out one
//! [`Frame`] per tick through the [`Iterator`] interface. The frontend pulls
//! frames at its own cadence; the simulation never calls back into it.

use std::iter::FusedIterator;
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tesseract_math::{HypercubeGeometry, Projector, Segment3, Vec3, Vec4, AXES};
use tesseract_physics::{BallState, BounceAxes, Bounds4D, PhysicsState};

use crate::error::ConfigurationError;

/// How many ticks the simulation runs for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FrameCountRepr", into = "FrameCountRepr")]
pub enum FrameCount {
    Limited(u64),
    /// Runs until the frontend stops pulling frames
    Unbounded,
}

impl Default for FrameCount {
    fn default() -> Self {
        FrameCount::Limited(500)
    }
}

/// On-disk form: an integer or the word `"unbounded"`
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FrameCountRepr {
    Count(u64),
    Keyword(String),
}

impl TryFrom<FrameCountRepr> for FrameCount {
    type Error = String;

    fn try_from(repr: FrameCountRepr) -> Result<Self, Self::Error> {
        match repr {
            FrameCountRepr::Count(n) => Ok(FrameCount::Limited(n)),
            FrameCountRepr::Keyword(word) if word.eq_ignore_ascii_case("unbounded") => {
                Ok(FrameCount::Unbounded)
            }
            FrameCountRepr::Keyword(word) => Err(format!(
                "frame count must be an integer or \"unbounded\", got \"{}\"",
                word
            )),
        }
    }
}

impl From<FrameCount> for FrameCountRepr {
    fn from(count: FrameCount) -> Self {
        match count {
            FrameCount::Limited(n) => FrameCountRepr::Count(n),
            FrameCount::Unbounded => FrameCountRepr::Keyword("unbounded".to_string()),
        }
    }
}

/// Where the ball's starting velocity comes from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialVelocity {
    Fixed(Vec4),
    /// Each axis drawn uniformly from `[min, max]`
    Random { min: f32, max: f32, seed: Option<u64> },
}

impl Default for InitialVelocity {
    fn default() -> Self {
        InitialVelocity::Random {
            min: -0.5,
            max: 0.5,
            seed: None,
        }
    }
}

impl InitialVelocity {
    /// Produce the concrete starting velocity
    pub fn resolve(&self) -> Vec4 {
        match *self {
            InitialVelocity::Fixed(v) => v,
            InitialVelocity::Random { min, max, seed } => {
                let mut rng = match seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                let mut velocity = Vec4::ZERO;
                for axis in 0..AXES {
                    velocity[axis] = rng.gen_range(min..=max);
                }
                velocity
            }
        }
    }
}

/// Validated-on-construction settings for one simulation run
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub bounds: Bounds4D,
    pub radius: f32,
    /// Seconds per tick
    pub dt: f32,
    /// Eye distance along w for the 4D -> 3D projection
    pub projection_distance: f32,
    pub initial_position: Vec4,
    pub initial_velocity: InitialVelocity,
    pub frame_count: FrameCount,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds4D::default(),
            radius: 0.1,
            dt: 0.02,
            projection_distance: 3.0,
            initial_position: Vec4::ZERO,
            initial_velocity: InitialVelocity::default(),
            frame_count: FrameCount::default(),
        }
    }
}

impl SimulationConfig {
    /// Check that the simulation can run and project every reachable position
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let Bounds4D { low, high } = self.bounds;

        for (name, value) in [
            ("bounds.low", low),
            ("bounds.high", high),
            ("radius", self.radius),
            ("dt", self.dt),
            ("projection_distance", self.projection_distance),
        ] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite(name));
            }
        }
        if !self.initial_position.is_finite() {
            return Err(ConfigurationError::NonFinite("initial_position"));
        }

        if low >= high {
            return Err(ConfigurationError::InvalidBounds { low, high });
        }
        if self.dt <= 0.0 {
            return Err(ConfigurationError::NonPositiveTimeStep(self.dt));
        }
        if self.radius <= 0.0 {
            return Err(ConfigurationError::NonPositiveRadius(self.radius));
        }
        let extent = self.bounds.extent();
        if self.radius >= extent {
            return Err(ConfigurationError::BallTooLarge {
                radius: self.radius,
                extent,
            });
        }

        // The ball center never exceeds high - radius, but a sphere of `radius`
        // around it reaches high + radius in the worst case
        let limit = high + self.radius;
        if self.projection_distance <= limit || self.projection_distance <= 0.0 {
            return Err(ConfigurationError::DegenerateProjection {
                distance: self.projection_distance,
                limit,
            });
        }

        let (min, max) = (
            self.bounds.min_center(self.radius),
            self.bounds.max_center(self.radius),
        );
        if !self.bounds.contains(self.initial_position, self.radius) {
            return Err(ConfigurationError::InitialPositionOutside {
                position: self.initial_position,
                min,
                max,
            });
        }

        match self.initial_velocity {
            InitialVelocity::Fixed(v) if !v.is_finite() => {
                Err(ConfigurationError::NonFinite("initial_velocity"))
            }
            InitialVelocity::Random { min, max, .. } if !min.is_finite() || !max.is_finite() => {
                Err(ConfigurationError::NonFinite("velocity_range"))
            }
            InitialVelocity::Random { min, max, .. } if min > max => {
                Err(ConfigurationError::EmptyVelocityRange { min, max })
            }
            // The sampler needs the width of the range as a finite f32
            InitialVelocity::Random { min, max, .. } if !(max - min).is_finite() => {
                Err(ConfigurationError::VelocityRangeTooWide { min, max })
            }
            _ => Ok(()),
        }
    }
}

/// Everything the frontend needs to draw one tick
#[derive(Clone, Debug)]
pub struct Frame {
    /// Ticks elapsed; the starting frame is tick 0
    pub tick: u64,
    /// Projected ball position
    pub ball: Vec3,
    /// Ball position before projection
    pub ball_4d: Vec4,
    /// Axes that bounced during this tick
    pub bounces: BounceAxes,
    /// The projected wireframe, shared between frames
    pub edges: Arc<[Segment3]>,
}

/// Drives the ball and produces a lazy stream of frames
///
/// The stream is fused: once the frame budget is exhausted (or a projection
/// fails) it keeps returning `None`. Restarting means building a new system.
pub struct SimulationSystem {
    physics: PhysicsState,
    projector: Projector,
    geometry: HypercubeGeometry,
    wireframe: Arc<[Segment3]>,
    frame_count: FrameCount,
    tick: u64,
    finished: bool,
}

impl SimulationSystem {
    /// Validate `config`, build the wireframe and place the ball
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let projector = Projector::new(config.projection_distance)?;
        let geometry = HypercubeGeometry::from_bounds(config.bounds.low, config.bounds.high);
        let wireframe: Arc<[Segment3]> = geometry
            .edge_endpoints()
            .map(|(a, b)| projector.project_segment(a, b))
            .collect::<Result<Vec<_>, _>>()?
            .into();

        let velocity = config.initial_velocity.resolve();
        let ball = BallState::new(config.initial_position, config.radius).with_velocity(velocity);
        log::debug!(
            "Ball starts at {:?} with velocity {:?}",
            ball.position,
            ball.velocity
        );

        Ok(Self {
            physics: PhysicsState::new(ball, config.bounds, config.dt),
            projector,
            geometry,
            wireframe,
            frame_count: config.frame_count,
            tick: 0,
            finished: false,
        })
    }

    /// The projected wireframe, computed once at construction
    pub fn wireframe(&self) -> Arc<[Segment3]> {
        Arc::clone(&self.wireframe)
    }

    pub fn geometry(&self) -> &HypercubeGeometry {
        &self.geometry
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn ball(&self) -> &BallState {
        self.physics.ball()
    }

    /// Ticks advanced so far
    pub fn ticks_elapsed(&self) -> u64 {
        self.tick
    }

    /// Frame for the current state without stepping
    ///
    /// Before the first call to `next` this is the starting position.
    pub fn current_frame(&self) -> Option<Frame> {
        let ball_4d = self.physics.ball().position;
        let ball = match self.projector.project(ball_4d) {
            Ok(ball) => ball,
            Err(e) => {
                log::error!("Tick {}: {}. No frame for the current state.", self.tick, e);
                return None;
            }
        };
        Some(Frame {
            tick: self.tick,
            ball,
            ball_4d,
            bounces: BounceAxes::empty(),
            edges: self.wireframe(),
        })
    }

    fn remaining(&self) -> Option<u64> {
        if self.finished {
            return Some(0);
        }
        match self.frame_count {
            FrameCount::Limited(n) => Some(n.saturating_sub(self.tick)),
            FrameCount::Unbounded => None,
        }
    }
}

impl Iterator for SimulationSystem {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.remaining() == Some(0) {
            self.finished = true;
            return None;
        }

        let bounces = self.physics.step();
        self.tick += 1;

        let ball_4d = self.physics.ball().position;
        match self.projector.project(ball_4d) {
            Ok(ball) => Some(Frame {
                tick: self.tick,
                ball,
                ball_4d,
                bounces,
                edges: self.wireframe(),
            }),
            Err(e) => {
                log::error!("Tick {}: {}. Stopping simulation.", self.tick, e);
                self.finished = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            // A projection failure can end the stream early
            Some(n) => (0, usize::try_from(n).ok()),
            None => (0, None),
        }
    }
}

impl FusedIterator for SimulationSystem {}
