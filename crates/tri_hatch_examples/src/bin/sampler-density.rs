use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tri_hatch::canvas::Viewbox;
use tri_hatch::prelude::*;
use tri_hatch_examples::{init_tracing, render_points_to_png, RenderConfig};

const EXTENT: f32 = 400.0;
const DISTANCES: [f32; 3] = [40.0, 20.0, 10.0];

fn main() -> anyhow::Result<()> {
    init_tracing();

    for (i, &distance) in DISTANCES.iter().enumerate() {
        let domain = SamplingDomain::new(EXTENT, EXTENT, distance).with_max_attempts(30);
        let mut rng = StdRng::seed_from_u64(7 + i as u64);
        let mut sampler = PoissonDiskSampler::new(domain, &mut rng)?;
        let points: Vec<Vec2> = sampler.by_ref().collect();
        info!(
            "Minimum distance {distance}: {} points from {} candidates.",
            points.len(),
            sampler.candidates_tried()
        );

        let render = RenderConfig::new(
            (800, 800),
            Viewbox {
                min: Vec2::ZERO,
                size: Vec2::splat(EXTENT),
            },
        )
        .with_background([20, 22, 30])
        .with_points([235, 225, 190], 3);
        render_points_to_png(&points, &render, format!("sampler-density-{distance}.png"))?;
    }
    Ok(())
}
