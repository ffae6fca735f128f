//! Planar path geometry that the sampler can query.
//!
//! Anything that can report its arc length and the point at a given arc-length
//! offset can be sampled. The web frontend implements this for DOM SVG
//! elements; [`SvgPath`] covers raw path data (`d` attribute syntax) and is
//! what the host tests and tools use.

use glam::Vec2;
use lyon::algorithms::measure::{PathMeasurements, SampleType};
use lyon::path::Path;
use lyon_extra::parser::{ParserOptions, PathParser, Source};
use thiserror::Error;

use crate::constants::PATH_TOLERANCE;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid svg path data: {0}")]
    Parse(String),
    #[error("element `{0}` does not support arc-length queries")]
    Unsupported(String),
    #[error("point query at distance {distance} failed: {reason}")]
    Query { distance: f32, reason: String },
}

pub trait PathGeometry {
    /// Measured arc length of the whole path.
    fn total_length(&self) -> f32;
    /// Point at `distance` along the path, in the path's own coordinate space.
    fn point_at_length(&self, distance: f32) -> Result<Vec2, PathError>;
}

/// Path data parsed from svg `d` syntax and measured once.
pub struct SvgPath {
    path: Path,
    measurements: PathMeasurements,
    length: f32,
}

impl SvgPath {
    pub fn parse(data: &str) -> Result<Self, PathError> {
        let mut builder = Path::builder();
        PathParser::new()
            .parse(
                &ParserOptions::DEFAULT,
                &mut Source::new(data.chars()),
                &mut builder,
            )
            .map_err(|err| PathError::Parse(format!("{err:?}")))?;
        Ok(Self::from_path(builder.build()))
    }

    pub fn from_path(path: Path) -> Self {
        let measurements = PathMeasurements::from_path(&path, PATH_TOLERANCE);
        let length = if path.iter().next().is_none() {
            0.0
        } else {
            measurements
                .create_sampler(&path, SampleType::Distance)
                .length()
        };
        Self {
            path,
            measurements,
            length,
        }
    }
}

impl PathGeometry for SvgPath {
    fn total_length(&self) -> f32 {
        self.length
    }

    fn point_at_length(&self, distance: f32) -> Result<Vec2, PathError> {
        if !distance.is_finite() {
            return Err(PathError::Query {
                distance,
                reason: "distance is not finite".to_string(),
            });
        }
        if self.length <= 0.0 {
            return Err(PathError::Query {
                distance,
                reason: "path has no measurable length".to_string(),
            });
        }
        let mut sampler = self
            .measurements
            .create_sampler(&self.path, SampleType::Distance);
        let p = sampler.sample(distance.clamp(0.0, self.length)).position();
        Ok(Vec2::new(p.x, p.y))
    }
}

impl<G: PathGeometry + ?Sized> PathGeometry for &G {
    fn total_length(&self) -> f32 {
        (**self).total_length()
    }

    fn point_at_length(&self, distance: f32) -> Result<Vec2, PathError> {
        (**self).point_at_length(distance)
    }
}
