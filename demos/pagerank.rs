use eigeniter::io::links::load_links_csv;
use eigeniter::{google_matrix, stationary_distribution, IterationConfig};

fn main() -> anyhow::Result<()> {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<tracing_subscriber::filter::LevelFilter>().ok())
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    // LINKS_CSV (columns from,to) with PAGES pages replaces the toy web below
    let links = match std::env::var("LINKS_CSV") {
        Ok(path) => {
            let pages: usize = std::env::var("PAGES").ok().and_then(|v| v.parse().ok()).unwrap_or(10);
            load_links_csv(&path, pages)?
        }
        Err(_) => vec![
            vec![1, 2],
            vec![2, 3, 4],
            vec![0, 5],
            vec![6],
            vec![5, 6, 7],
            vec![8],
            vec![9, 0],
            vec![],
            vec![0, 9],
            vec![4, 8],
        ],
    };

    let damping: f64 = std::env::var("DAMPING").ok().and_then(|v| v.parse().ok()).unwrap_or(0.85);
    let g = google_matrix(&links, damping)?;
    let dist = stationary_distribution(&g, &IterationConfig::default())?;

    println!("page,rank");
    for (page, rank) in dist.ranks.iter().enumerate() {
        println!("{},{:.6}", page, rank);
    }
    println!(
        "# eigenvalue={:.10} iterations={} converged={}",
        dist.eigenvalue, dist.iterations, dist.converged
    );

    Ok(())
}
