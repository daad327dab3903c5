//! Rendering frontend contract and frame driver
//!
//! The core never touches a drawing surface. A frontend only has to accept the
//! static wireframe once and a ball position per frame; [`FrameDriver`] plays
//! the role of the frontend's timer and pulls frames from the simulation.

use std::time::Duration;

use tesseract_math::Segment3;

use super::simulation::{Frame, SimulationSystem};

/// Anything that can display the projected tesseract and ball
pub trait RenderFrontend {
    /// Draw the static wireframe. Called once before any frame.
    fn draw_wireframe(&mut self, edges: &[Segment3]);

    /// Draw the ball for one frame
    fn draw_ball(&mut self, frame: &Frame);

    /// Returning false stops the driver before the next frame
    fn keep_running(&self) -> bool {
        true
    }
}

/// Pulls frames from a simulation at a fixed interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDriver {
    interval: Duration,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(Duration::from_millis(20))
    }
}

impl FrameDriver {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run `simulation` to completion (or until the frontend stops it)
    ///
    /// Returns the number of ticks drawn, not counting the starting frame.
    pub fn run<F>(&self, mut simulation: SimulationSystem, frontend: &mut F) -> u64
    where
        F: RenderFrontend + ?Sized,
    {
        frontend.draw_wireframe(&simulation.wireframe());
        if let Some(start) = simulation.current_frame() {
            frontend.draw_ball(&start);
        }

        let mut drawn = 0;
        while frontend.keep_running() {
            let Some(frame) = simulation.next() else {
                break;
            };
            frontend.draw_ball(&frame);
            drawn += 1;
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }

        log::info!("Simulation stopped after {} ticks", drawn);
        drawn
    }
}

/// Headless frontend that reports through the `log` facade
#[derive(Debug)]
pub struct LogFrontend {
    log_every: u64,
    bounces: u64,
}

impl LogFrontend {
    /// Log the ball at `info` every `log_every` ticks (0 disables those lines)
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every,
            bounces: 0,
        }
    }

    /// Wall hits seen so far, counting each axis separately
    pub fn bounces(&self) -> u64 {
        self.bounces
    }
}

impl RenderFrontend for LogFrontend {
    fn draw_wireframe(&mut self, edges: &[Segment3]) {
        let reach = edges
            .iter()
            .flat_map(|e| [e.start.length(), e.end.length()])
            .fold(0.0f32, f32::max);
        log::info!(
            "Wireframe: {} edges, farthest projected vertex at {:.3}",
            edges.len(),
            reach
        );
    }

    fn draw_ball(&mut self, frame: &Frame) {
        self.bounces += u64::from(frame.bounces.bits().count_ones());
        log::debug!(
            "tick {:>5}: ball {:?} -> {:?}",
            frame.tick,
            frame.ball_4d.to_array(),
            frame.ball.to_array()
        );
        if self.log_every > 0 && frame.tick % self.log_every == 0 {
            log::info!(
                "tick {}: ball at ({:.3}, {:.3}, {:.3}), {} bounces so far",
                frame.tick,
                frame.ball.x,
                frame.ball.y,
                frame.ball.z,
                self.bounces
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::simulation::{FrameCount, InitialVelocity, SimulationConfig};
    use tesseract_math::Vec4;

    #[derive(Default)]
    struct Recorder {
        wireframes: usize,
        ticks: Vec<u64>,
        stop_after: Option<usize>,
    }

    impl RenderFrontend for Recorder {
        fn draw_wireframe(&mut self, edges: &[Segment3]) {
            assert_eq!(edges.len(), 32);
            self.wireframes += 1;
        }

        fn draw_ball(&mut self, frame: &Frame) {
            self.ticks.push(frame.tick);
        }

        fn keep_running(&self) -> bool {
            self.stop_after.map_or(true, |n| self.ticks.len() < n)
        }
    }

    fn simulation(frames: FrameCount) -> SimulationSystem {
        SimulationSystem::new(SimulationConfig {
            initial_velocity: InitialVelocity::Fixed(Vec4::new(0.4, -0.3, 0.2, 0.5)),
            frame_count: frames,
            ..SimulationConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_driver_draws_wireframe_once_then_every_frame() {
        let mut recorder = Recorder::default();
        let drawn = FrameDriver::new(Duration::ZERO).run(simulation(FrameCount::Limited(4)), &mut recorder);

        assert_eq!(drawn, 4);
        assert_eq!(recorder.wireframes, 1);
        assert_eq!(recorder.ticks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_frontend_can_stop_unbounded_run() {
        let mut recorder = Recorder {
            stop_after: Some(10),
            ..Recorder::default()
        };
        let drawn = FrameDriver::new(Duration::ZERO).run(simulation(FrameCount::Unbounded), &mut recorder);

        // Starting frame plus nine ticks
        assert_eq!(drawn, 9);
        assert_eq!(recorder.ticks.len(), 10);
    }

    #[test]
    fn test_default_interval_is_50hz() {
        assert_eq!(FrameDriver::default().interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_log_frontend_counts_bounces() {
        let mut frontend = LogFrontend::new(0);
        let sim = SimulationSystem::new(SimulationConfig {
            initial_velocity: InitialVelocity::Fixed(Vec4::new(0.0, 0.0, 0.0, 5.0)),
            frame_count: FrameCount::Limited(30),
            ..SimulationConfig::default()
        })
        .unwrap();

        FrameDriver::new(Duration::ZERO).run(sim, &mut frontend);
        assert!(frontend.bounces() >= 1);
    }
}
