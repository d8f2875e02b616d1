use std::io;

use curvekit::pipeline::{self, PipelineConfig};

fn main() {
    let config = PipelineConfig::default();
    let mut rng = rand::thread_rng();

    let curves = pipeline::generate_curves(&mut rng, &config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(err) = pipeline::write_report(
        &mut stdout.lock(),
        &mut stderr.lock(),
        &curves,
        config.sample_t,
    ) {
        eprintln!("Error: {err}");
    }

    let mut circles = pipeline::filter_circles(&curves);
    pipeline::sort_by_radius(&mut circles);

    let sum = pipeline::sum_of_radii_with_workers(&circles, config.workers);
    println!("Sum of radii of all circles: {sum}");
}
