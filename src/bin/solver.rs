//! Solver Binary
//!
//! Solves, queries and exports exact-EV strategy tables.
//!
//! Commands: solve, lookup, analyze, export, paytables

use vpsolver::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let interrupt = solver::Interrupt::new();
    brb(interrupt.clone());
    cli::run(interrupt).await
}
