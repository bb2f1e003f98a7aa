//! Command line entry points of the solver binary.
mod command;
pub use command::*;

use crate::N_CANONICAL;
use crate::cards::CanonicalKey;
use crate::cards::Deal;
use crate::paytable::Catalog;
use crate::paytable::Paytable;
use crate::sink::Memory;
use crate::sink::Sink;
use crate::sink::Source;
use crate::solver::Interrupt;
use crate::solver::Settings;
use crate::solver::Solver;
use crate::solver::Space;
use crate::strategy::Engine;
use crate::strategy::Hold;
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

pub async fn run(interrupt: Interrupt) -> anyhow::Result<()> {
    let args = Args::parse();
    let catalog = match args.paytables {
        Some(ref path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    match args.command {
        Command::Solve {
            ids,
            all,
            dry_run,
            resume,
            workers,
            batch,
        } => {
            let paytables = match all {
                true => catalog.iter().cloned().collect(),
                false => {
                    anyhow::ensure!(!ids.is_empty(), "name at least one paytable, or pass --all");
                    catalog.resolve(&ids)?
                }
            };
            let mut settings = Settings::default();
            if let Some(n) = workers {
                settings = settings.workers(n);
            }
            if let Some(n) = batch {
                settings = settings.batch(n);
            }
            match dry_run {
                true => solve(Arc::new(Memory::default()), paytables, settings, resume, interrupt).await,
                false => solve(crate::sink::postgres::db().await?, paytables, settings, resume, interrupt).await,
            }
        }
        Command::Lookup { paytable, hand } => {
            let paytable = catalog.get(&paytable)?;
            lookup(crate::sink::postgres::db().await?, &paytable, &hand).await
        }
        Command::Analyze { paytable, hand } => {
            let paytable = catalog.get(&paytable)?;
            analyze(&paytable, &hand)
        }
        Command::Export {
            paytable,
            out,
            binary,
        } => {
            let paytable = catalog.get(&paytable)?;
            export(crate::sink::postgres::db().await?, &paytable, &out, binary).await
        }
        Command::Verify {
            paytable,
            sample,
            bundle,
        } => {
            let paytable = catalog.get(&paytable)?;
            verify(crate::sink::postgres::db().await?, paytable, sample, bundle.as_deref()).await
        }
        Command::Paytables => {
            catalog.iter().for_each(|p| println!("{}", p));
            Ok(())
        }
    }
}

/// solve each paytable in turn, stopping at the first failed run
async fn solve<S>(
    store: Arc<S>,
    paytables: Vec<Arc<Paytable>>,
    settings: Settings,
    resume: bool,
    interrupt: Interrupt,
) -> anyhow::Result<()>
where
    S: Sink + Source + 'static,
{
    let space = tokio::task::spawn_blocking(Space::exhaust)
        .await
        .context("hand space task")??;
    sweep(store, paytables, Arc::new(space), settings, resume, interrupt).await
}

/// every run ends by reporting the stored count against the full key space,
/// failed runs included, so a resumption point is always known
async fn sweep<S>(
    store: Arc<S>,
    paytables: Vec<Arc<Paytable>>,
    space: Arc<Space>,
    settings: Settings,
    resume: bool,
    interrupt: Interrupt,
) -> anyhow::Result<()>
where
    S: Sink + Source + 'static,
{
    let solver = Solver::new(store.clone(), settings, interrupt);
    for paytable in paytables {
        let space = match resume {
            false => space.clone(),
            true => {
                let solved = store.keys(paytable.id()).await?;
                log::info!("{} has {} of {} keys stored", paytable.id(), solved.len(), N_CANONICAL);
                Arc::new(space.without(&solved))
            }
        };
        let outcome = solver.solve(paytable.clone(), space).await;
        let stored = store.count(paytable.id()).await?;
        let standing = format!("{} holds {} of {} keys", paytable.id(), stored, N_CANONICAL);
        match outcome {
            Err(failure) => return Err(anyhow::Error::new(failure).context(standing)),
            Ok(_) if stored == N_CANONICAL => log::info!("{}", standing),
            Ok(_) => log::warn!("{}", standing),
        }
    }
    Ok(())
}

/// recompute stored records, and optionally cross-check an export on disk
async fn verify<S: Source>(
    store: Arc<S>,
    paytable: Arc<Paytable>,
    sample: Option<usize>,
    bundle: Option<&Path>,
) -> anyhow::Result<()> {
    let verification = crate::solver::verify(store.as_ref(), paytable.clone(), sample).await?;
    println!("{}", verification);
    for key in verification.mismatches.iter() {
        println!("mismatch  {}", key);
    }
    let mut problems = verification.mismatches.len();
    if let Some(dir) = bundle {
        let issues = crate::export::check(dir, &paytable)?;
        for issue in issues.iter() {
            println!("bundle    {}", issue);
        }
        problems += issues.len();
    }
    anyhow::ensure!(problems == 0, "{} failed verification with {} problems", paytable.id(), problems);
    Ok(())
}

async fn lookup<S: Source>(store: Arc<S>, paytable: &Paytable, hand: &str) -> anyhow::Result<()> {
    let deal = Deal::try_from(hand).map_err(anyhow::Error::msg)?;
    let (sorted, order) = deal.canonical();
    let key = CanonicalKey::from(&sorted);
    let record = store
        .lookup(paytable.id(), key)
        .await?
        .with_context(|| format!("{} has no strategy for {}", paytable.id(), key))?;
    let best = record.hold.translate(&order);
    println!("{} {}  key {}", paytable.id(), deal, key);
    println!("best  {:>2}  {}  {:.6}", best, best.describe(&deal), record.ev);
    let mut ranking = Hold::all()
        .map(|hold| (hold.translate(&order), record.evs[usize::from(hold)]))
        .collect::<Vec<_>>();
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    for (hold, ev) in ranking {
        println!("      {:>2}  {}  {:.6}", hold, hold.describe(&deal), ev);
    }
    Ok(())
}

/// live evaluation in dealt positions, no store involved
fn analyze(paytable: &Paytable, hand: &str) -> anyhow::Result<()> {
    let deal = Deal::try_from(hand).map_err(anyhow::Error::msg)?;
    let analysis = Engine::from(paytable).analyze(&deal);
    println!("{} {}  key {}", paytable.id(), deal, CanonicalKey::from(&deal));
    for (hold, ev) in analysis.ranking() {
        let mark = if hold == analysis.best() { "best" } else { "" };
        println!("{:<6}{:>2}  {}  {:.6}", mark, hold, hold.describe(&deal), ev.rounded());
    }
    Ok(())
}

async fn export<S: Source>(store: Arc<S>, paytable: &Paytable, out: &Path, binary: bool) -> anyhow::Result<()> {
    let records = store.export(paytable.id()).await?;
    anyhow::ensure!(!records.is_empty(), "{} has not been solved", paytable.id());
    if records.len() != N_CANONICAL {
        log::warn!("exporting {} of {} keys for {}", records.len(), N_CANONICAL, paytable.id());
    }
    for path in crate::export::write(out, paytable, &records, binary)? {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
