use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Exact-EV video poker strategy solver", long_about = None)]
pub struct Args {
    /// replace the built-in pay schedules with a JSON catalog
    #[arg(long, global = true)]
    pub paytables: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Solve every canonical hand of one or more paytables")]
    Solve {
        /// paytable ids to solve
        ids: Vec<String>,
        #[arg(long, conflicts_with = "ids")]
        all: bool,
        /// persist into an in-process store instead of the database
        #[arg(long)]
        dry_run: bool,
        /// skip canonical keys already stored for the paytable
        #[arg(long)]
        resume: bool,
        #[arg(long)]
        workers: Option<usize>,
        #[arg(long)]
        batch: Option<usize>,
    },
    #[command(about = "Look up the stored strategy of a dealt hand", alias = "get")]
    Lookup {
        #[arg(required = true)]
        paytable: String,
        /// five cards in dealt order, e.g. "Jh Js 3d 7c 9h"
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Compute all 32 hold EVs of a dealt hand", alias = "ev")]
    Analyze {
        #[arg(required = true)]
        paytable: String,
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Export a solved paytable as an offline bundle")]
    Export {
        #[arg(required = true)]
        paytable: String,
        #[arg(long, default_value = "exports")]
        out: PathBuf,
        /// also write the compact .vpstrat table
        #[arg(long)]
        binary: bool,
    },
    #[command(about = "Recompute stored strategies and compare them", alias = "check")]
    Verify {
        #[arg(required = true)]
        paytable: String,
        /// records to recompute at random, every stored record if omitted
        #[arg(long)]
        sample: Option<usize>,
        /// export directory whose .vpstrat is checked against its JSON bundle
        #[arg(long)]
        bundle: Option<PathBuf>,
    },
    #[command(about = "List the available pay schedules", alias = "ls")]
    Paytables,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("solver").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn solve_flags() {
        match parse(&["solve", "jacks-or-better-9-6", "bonus-poker-8-5", "--resume", "--workers", "4"]).command {
            Command::Solve { ids, resume, workers, dry_run, all, .. } => {
                assert_eq!(ids.len(), 2);
                assert!(resume && !dry_run && !all);
                assert_eq!(workers, Some(4));
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn all_conflicts_with_ids() {
        let args = ["solver", "solve", "jacks-or-better-9-6", "--all"];
        assert!(Args::try_parse_from(args).is_err());
    }

    #[test]
    fn verify_flags() {
        match parse(&["verify", "bonus-poker-8-5", "--sample", "50", "--bundle", "exports"]).command {
            Command::Verify { paytable, sample, bundle } => {
                assert_eq!(paytable, "bonus-poker-8-5");
                assert_eq!(sample, Some(50));
                assert_eq!(bundle, Some(PathBuf::from("exports")));
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn global_catalog() {
        let args = parse(&["paytables", "--paytables", "custom.json"]);
        assert_eq!(args.paytables, Some(PathBuf::from("custom.json")));
    }
}
