//! High-level runner for generating a hatched canvas.
use glam::Vec2;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::canvas::events::{CanvasEvent, CanvasEventKind, EventSink};
use crate::canvas::{Canvas, CanvasConfig, HatchedTriangle, UnsolvablePolicy};
use crate::error::{Error, Result};
use crate::hatch::TriangleHatcher;
use crate::sampling::PoissonDiskSampler;
use crate::triangulation::{triangles_from_indices, Triangulator};

/// Reusable generator bound to a validated [`CanvasConfig`].
#[derive(Debug, Clone)]
pub struct CanvasGenerator {
    /// Configuration applied to every run.
    pub config: CanvasConfig,
}

impl CanvasGenerator {
    pub fn try_new(config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: CanvasConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid canvas config");
        Self { config }
    }

    /// Generates one canvas. Each call samples a fresh point field.
    pub fn run<T, R>(&self, triangulator: &T, rng: &mut R) -> Result<Canvas>
    where
        T: Triangulator + ?Sized,
        R: RngCore,
    {
        generate_canvas(&self.config, triangulator, rng, None)
    }

    pub fn run_with_events<T, R>(
        &self,
        triangulator: &T,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<Canvas>
    where
        T: Triangulator + ?Sized,
        R: RngCore,
    {
        generate_canvas(&self.config, triangulator, rng, Some(sink))
    }
}

/// Samples points over the padded domain, triangulates them, and hatches every triangle.
///
/// Unsolvable triangles follow `config.unsolvable`. Fewer than three points
/// produce a canvas without triangles.
pub fn generate_canvas<T, R>(
    config: &CanvasConfig,
    triangulator: &T,
    rng: &mut R,
    sink: Option<&mut dyn EventSink>,
) -> Result<Canvas>
where
    T: Triangulator + ?Sized,
    R: RngCore,
{
    if let Some(s) = sink {
        generate_canvas_internal(config, triangulator, rng, s)
    } else {
        generate_canvas_internal(config, triangulator, rng, &mut ())
    }
}

fn generate_canvas_internal<T>(
    config: &CanvasConfig,
    triangulator: &T,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> Result<Canvas>
where
    T: Triangulator + ?Sized,
{
    config.validate()?;
    info!(
        "Generating {}x{} canvas (bleed {}, minimum distance {}).",
        config.width, config.height, config.bleed, config.minimum_distance
    );
    if sink.wants(CanvasEventKind::RunStarted) {
        sink.send(CanvasEvent::RunStarted { config: *config });
    }

    let (points, candidates_tried) = sample_points(config, rng)?;
    debug!(
        "Sampled {} points from {} candidates.",
        points.len(),
        candidates_tried
    );
    if sink.wants(CanvasEventKind::PointsSampled) {
        sink.send(CanvasEvent::PointsSampled {
            count: points.len(),
            candidates_tried,
        });
    }

    let triangles = if points.len() < 3 {
        debug!("Only {} point(s) sampled; nothing to triangulate.", points.len());
        Vec::new()
    } else {
        let indices = triangulator.triangulate(&points);
        triangles_from_indices(&points, &indices)?
    };
    if sink.wants(CanvasEventKind::Triangulated) {
        sink.send(CanvasEvent::Triangulated {
            triangles: triangles.len(),
        });
    }

    let hatcher = TriangleHatcher::new(config.hatch);
    let mut hatched = Vec::with_capacity(triangles.len());
    let mut skipped = 0;

    for (index, triangle) in triangles.into_iter().enumerate() {
        match hatcher.hatch(&triangle, rng) {
            Ok(lines) => {
                if sink.wants(CanvasEventKind::TriangleHatched) {
                    sink.send(CanvasEvent::TriangleHatched {
                        index,
                        lines: lines.len(),
                    });
                }
                hatched.push(HatchedTriangle { triangle, lines });
            }
            Err(Error::TriangleUnsolvable { attempts })
                if config.unsolvable == UnsolvablePolicy::Skip =>
            {
                warn!(
                    "Triangle {index} has no valid base edge after {attempts} attempt(s); skipping."
                );
                skipped += 1;
                if sink.wants(CanvasEventKind::TriangleSkipped) {
                    sink.send(CanvasEvent::TriangleSkipped { index, attempts });
                }
                hatched.push(HatchedTriangle {
                    triangle,
                    lines: Vec::new(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    let canvas = Canvas {
        points,
        triangles: hatched,
        skipped,
        viewbox: config.viewbox(),
    };

    info!(
        "Canvas ready: {} triangles, {} lines, {} skipped.",
        canvas.triangles.len(),
        canvas.line_count(),
        canvas.skipped
    );
    if sink.wants(CanvasEventKind::RunFinished) {
        sink.send(CanvasEvent::RunFinished {
            points: canvas.points.len(),
            triangles: canvas.triangles.len(),
            lines: canvas.line_count(),
            skipped: canvas.skipped,
        });
    }

    Ok(canvas)
}

fn sample_points(config: &CanvasConfig, rng: &mut dyn RngCore) -> Result<(Vec<Vec2>, usize)> {
    let mut sampler = PoissonDiskSampler::new(config.sampling_domain(), rng)?;
    let points: Vec<Vec2> = sampler.by_ref().collect();
    Ok((points, sampler.candidates_tried()))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::canvas::events::VecSink;

    fn fan(points: &[Vec2]) -> Vec<usize> {
        (1..points.len().saturating_sub(1))
            .flat_map(|i| [0, i, i + 1])
            .collect()
    }

    fn coincident(points: &[Vec2]) -> Vec<usize> {
        if points.len() < 2 {
            return Vec::new();
        }
        vec![0, 0, 1, 0, 1, 2]
    }

    fn small_config() -> CanvasConfig {
        CanvasConfig::new(200.0, 200.0)
            .with_bleed(20.0)
            .with_minimum_distance(40.0)
    }

    #[test]
    fn run_hatches_every_triangle() {
        let generator = CanvasGenerator::try_new(small_config()).expect("valid config");
        let mut rng = StdRng::seed_from_u64(3);
        let canvas = generator.run(&fan, &mut rng).expect("run succeeds");

        assert!(canvas.points.len() >= 3);
        assert_eq!(canvas.triangles.len(), canvas.points.len() - 2);
        assert_eq!(canvas.skipped, 0);
        assert!(canvas.line_count() > 0);
        assert_eq!(canvas.viewbox, small_config().viewbox());
    }

    #[test]
    fn skip_policy_keeps_unsolvable_triangles_without_lines() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut sink = VecSink::new();
        let canvas = generate_canvas(&small_config(), &coincident, &mut rng, Some(&mut sink))
            .expect("run succeeds");

        assert_eq!(canvas.triangles.len(), 2);
        assert_eq!(canvas.skipped, 1);
        assert!(canvas.triangles[0].lines.is_empty());
        assert!(!canvas.triangles[1].lines.is_empty());
        assert!(sink.as_slice().iter().any(|e| matches!(
            e,
            CanvasEvent::TriangleSkipped {
                index: 0,
                attempts: 3
            }
        )));
    }

    #[test]
    fn abort_policy_propagates_unsolvable() {
        let config = small_config().with_unsolvable_policy(UnsolvablePolicy::Abort);
        let mut rng = StdRng::seed_from_u64(4);
        let err = generate_canvas(&config, &coincident, &mut rng, None).unwrap_err();
        assert!(matches!(err, Error::TriangleUnsolvable { attempts: 3 }));
    }

    #[test]
    fn tiny_canvas_produces_no_triangles() {
        let config = CanvasConfig::new(5.0, 5.0)
            .with_bleed(0.0)
            .with_minimum_distance(60.0);
        let mut rng = StdRng::seed_from_u64(8);
        let canvas = generate_canvas(&config, &fan, &mut rng, None).expect("run succeeds");
        assert_eq!(canvas.points.len(), 1);
        assert!(canvas.triangles.is_empty());
        assert_eq!(canvas.line_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected_before_sampling() {
        let config = small_config().with_minimum_distance(-1.0);
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_canvas(&config, &fan, &mut rng, None).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(CanvasGenerator::try_new(config).is_err());
    }

    #[test]
    fn bad_triangulation_is_reported() {
        let broken = |points: &[Vec2]| vec![0, 1, points.len()];
        let mut rng = StdRng::seed_from_u64(2);
        let err = generate_canvas(&small_config(), &broken, &mut rng, None).unwrap_err();
        assert!(matches!(err, Error::InvalidTriangulation(_)));
    }
}
