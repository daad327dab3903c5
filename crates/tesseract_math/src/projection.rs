//! Perspective projection from 4D to 3D
//!
//! The eye sits on the w axis at distance `d`. A point `(x, y, z, w)` maps to
//! `(x, y, z) * d / (d - w)`, so points with larger w are magnified.

use crate::vec3::{Segment3, Vec3};
use crate::vec4::Vec4;
use thiserror::Error;

/// Errors produced by [`Projector`]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    /// The eye distance itself is unusable
    #[error("projection distance must be finite and positive, got {0}")]
    InvalidDistance(f32),
    /// The point lies at or behind the eye along w
    #[error("cannot project point with w = {w}: eye distance is {distance}")]
    Degenerate { w: f32, distance: f32 },
}

/// Perspective projector with a fixed eye distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    distance: f32,
}

impl Projector {
    /// Create a projector whose eye sits at `w = distance`
    pub fn new(distance: f32) -> Result<Self, ProjectionError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ProjectionError::InvalidDistance(distance));
        }
        Ok(Self { distance })
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Scale factor `d / (d - w)` applied to x, y and z
    pub fn factor(&self, w: f32) -> Result<f32, ProjectionError> {
        let degenerate = ProjectionError::Degenerate {
            w,
            distance: self.distance,
        };
        // NaN fails this comparison too
        if !(w < self.distance) {
            return Err(degenerate);
        }
        let factor = self.distance / (self.distance - w);
        if factor.is_finite() {
            Ok(factor)
        } else {
            Err(degenerate)
        }
    }

    /// Project a 4D point by dropping w and foreshortening the rest
    pub fn project(&self, point: Vec4) -> Result<Vec3, ProjectionError> {
        let factor = self.factor(point.w)?;
        Ok(Vec3::from(point.xyz()) * factor)
    }

    /// Project both endpoints of a 4D line segment
    pub fn project_segment(&self, start: Vec4, end: Vec4) -> Result<Segment3, ProjectionError> {
        Ok(Segment3::new(self.project(start)?, self.project(end)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_identity_at_w_zero() {
        for d in [0.5, 1.0, 3.0, 100.0] {
            let p = Projector::new(d).unwrap();
            let out = p.project(Vec4::new(0.3, -0.7, 1.2, 0.0)).unwrap();
            assert_eq!(out, Vec3::new(0.3, -0.7, 1.2));
        }
    }

    #[test]
    fn test_factor_formula() {
        let p = Projector::new(3.0).unwrap();
        assert!(approx_eq(p.factor(1.0).unwrap(), 1.5));
        assert!(approx_eq(p.factor(-1.0).unwrap(), 0.75));
        assert!(approx_eq(p.factor(2.0).unwrap(), 3.0));
    }

    #[test]
    fn test_larger_w_magnifies() {
        let p = Projector::new(3.0).unwrap();
        let base = Vec4::new(1.0, 2.0, -1.0, 0.0);

        let mut last = p.project(base).unwrap().length();
        for w in [0.5, 1.0, 1.5, 2.0, 2.5] {
            let point = Vec4 { w, ..base };
            let projected = p.project(point).unwrap();
            let expected = Vec3::from(base.xyz()) * (3.0 / (3.0 - w));
            assert!(approx_eq(projected.x, expected.x));
            assert!(approx_eq(projected.y, expected.y));
            assert!(approx_eq(projected.z, expected.z));
            assert!(projected.length() > last);
            last = projected.length();
        }
    }

    #[test]
    fn test_point_at_eye_is_degenerate() {
        let p = Projector::new(3.0).unwrap();
        let err = p.project(Vec4::new(1.0, 1.0, 1.0, 3.0)).unwrap_err();
        assert_eq!(err, ProjectionError::Degenerate { w: 3.0, distance: 3.0 });
    }

    #[test]
    fn test_point_behind_eye_is_degenerate() {
        let p = Projector::new(3.0).unwrap();
        assert!(p.project(Vec4::new(0.0, 0.0, 0.0, 4.0)).is_err());
        assert!(p.factor(f32::NAN).is_err());
    }

    #[test]
    fn test_invalid_distance() {
        assert_eq!(Projector::new(0.0), Err(ProjectionError::InvalidDistance(0.0)));
        assert!(Projector::new(-1.0).is_err());
        assert!(Projector::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_project_segment() {
        let p = Projector::new(2.0).unwrap();
        let seg = p
            .project_segment(Vec4::new(1.0, 0.0, 0.0, 0.0), Vec4::new(1.0, 0.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(seg.start, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(seg.end, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_error_display() {
        let msg = ProjectionError::Degenerate { w: 3.5, distance: 3.0 }.to_string();
        assert!(msg.contains("w = 3.5"));
        assert!(msg.contains("3"));
    }
}
