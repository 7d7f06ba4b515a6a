use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LinkRow {
    from: usize,
    to: usize,
}

/// Load a link graph from a CSV file with columns `from,to` (0-based page ids).
///
/// Returns the out-link list of each of the `pages` pages, in file order.
pub fn load_links_csv(path: &str, pages: usize) -> anyhow::Result<Vec<Vec<usize>>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open links CSV: {}", path))?;
    let mut links = vec![Vec::new(); pages];
    for result in rdr.deserialize::<LinkRow>() {
        let row = result.with_context(|| format!("Bad link row in {}", path))?;
        anyhow::ensure!(
            row.from < pages && row.to < pages,
            "link {} -> {} out of range for {} pages",
            row.from,
            row.to,
            pages
        );
        links[row.from].push(row.to);
    }
    Ok(links)
}
