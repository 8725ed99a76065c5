use rand::rngs::StdRng;
use rand::SeedableRng;
use tri_hatch::prelude::*;
use tri_hatch_examples::{init_tracing, render_canvas_to_png, BowyerWatson, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 600x600 canvas, 100 units of bleed, points at least 60 apart, k = 30.
    let config = CanvasConfig::default();
    let generator = CanvasGenerator::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(42);

    let canvas = generator.run(&BowyerWatson, &mut rng)?;

    let render = RenderConfig::new((1200, 1200), canvas.viewbox)
        .with_background([255, 255, 255])
        .with_outline(Some([64, 64, 64]))
        .with_palette(vec![[170, 170, 170]]);
    render_canvas_to_png(&canvas, &render, "canvas-basic.png")?;
    Ok(())
}
