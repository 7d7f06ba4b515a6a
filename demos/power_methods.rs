use eigeniter::io::matrix::load_matrix_csv;
use eigeniter::{inverse_power_iteration, power_iteration, qr_iteration, IterationConfig};

fn init_logging() {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<tracing_subscriber::filter::LevelFilter>().ok())
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    // MATRIX_CSV overrides the built-in 3x3 example with spectrum {-5, 3, 6}
    let a = match std::env::var("MATRIX_CSV") {
        Ok(path) => load_matrix_csv(&path)?,
        Err(_) => vec![
            vec![-2.0, -4.0, 2.0],
            vec![-2.0, 1.0, 2.0],
            vec![4.0, 2.0, 5.0],
        ],
    };
    let n = a.len();

    let tol: f64 = std::env::var("TOL").ok().and_then(|v| v.parse().ok()).unwrap_or(1e-10);
    let max_iter: usize = std::env::var("MAX_ITER").ok().and_then(|v| v.parse().ok()).unwrap_or(1000);
    let cfg = IterationConfig::new(tol, max_iter);

    let mut x0 = vec![0.0; n];
    x0[0] = 1.0;

    let dominant = power_iteration(&a, &x0, &cfg)?;
    println!(
        "power: lambda={:.10} iterations={} converged={} u={:?}",
        dominant.value, dominant.iterations, dominant.converged, dominant.vector
    );

    let smallest = inverse_power_iteration(&a, &x0, &cfg)?;
    println!(
        "inverse power: lambda={:.10} iterations={} converged={} u={:?}",
        smallest.value, smallest.iterations, smallest.converged, smallest.vector
    );

    let spectrum = qr_iteration(&a, &cfg)?;
    println!(
        "qr: eigenvalues={:?} iterations={} converged={}",
        spectrum.values, spectrum.iterations, spectrum.converged
    );

    Ok(())
}
