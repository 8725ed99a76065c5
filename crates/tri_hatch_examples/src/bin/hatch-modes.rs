use rand::rngs::StdRng;
use rand::SeedableRng;
use tri_hatch::prelude::*;
use tri_hatch_examples::{init_tracing, render_canvas_to_png, BowyerWatson, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let modes = [
        ("clipped", HatchMode::Clipped),
        ("translated", HatchMode::Translated),
    ];

    for (name, mode) in modes {
        let hatch = HatchConfig::default()
            .with_stripe_range(5, 10)
            .with_mode(mode);
        let config = CanvasConfig::new(400.0, 400.0)
            .with_bleed(50.0)
            .with_minimum_distance(50.0)
            .with_hatch(hatch);

        // Same seed for both modes so only the stripe fitting differs.
        let mut rng = StdRng::seed_from_u64(1234);
        let canvas = generate_canvas(&config, &BowyerWatson, &mut rng, None)?;

        let render = RenderConfig::new((800, 800), canvas.viewbox).with_palette(vec![
            [196, 92, 72],
            [72, 120, 168],
            [96, 150, 96],
        ]);
        render_canvas_to_png(&canvas, &render, format!("hatch-modes-{name}.png"))?;
    }
    Ok(())
}
