use std::env;

use ad_dist::AndersonDarling;
use ad_dist::AndersonDarlingQuick;
use ad_dist::DistributionExt;
use anyhow::Context;
use anyhow::Result;
use prettytable::row;
use prettytable::Table;

const PROBS: [f64; 6] = [0.5, 0.75, 0.9, 0.95, 0.975, 0.99];
const DEFAULT_SIZES: [usize; 3] = [5, 10, 50];

fn main() -> Result<()> {
  let sizes = parse_sizes(env::args().skip(1))?;
  tracing::debug!(?sizes, "printing critical values");

  let mut table = Table::new();
  table.add_row(row!["n", "p", "exact", "quick", "|diff|"]);

  for n in sizes {
    let exact = AndersonDarling::new(n).with_context(|| format!("sample size {n}"))?;
    let quick = AndersonDarlingQuick::new(n).with_context(|| format!("sample size {n}"))?;

    for p in PROBS {
      let xe = exact
        .inv_cdf(p)
        .with_context(|| format!("exact quantile n = {n}, p = {p}"))?;
      let xq = quick
        .inv_cdf(p)
        .with_context(|| format!("quick quantile n = {n}, p = {p}"))?;
      tracing::debug!(n, p, xe, xq, "quantiles");
      table.add_row(row![
        n,
        p,
        format!("{xe:.6}"),
        format!("{xq:.6}"),
        format!("{:.2e}", (xe - xq).abs())
      ]);
    }
  }

  table.printstd();
  Ok(())
}

fn parse_sizes(args: impl Iterator<Item = String>) -> Result<Vec<usize>> {
  let sizes = args
    .map(|a| {
      a.parse::<usize>()
        .with_context(|| format!("invalid sample size `{a}`"))
    })
    .collect::<Result<Vec<_>>>()?;

  if sizes.is_empty() {
    return Ok(DEFAULT_SIZES.to_vec());
  }
  Ok(sizes)
}
