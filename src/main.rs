mod cli;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Args, Command, PruneArgs};
use env_logger::Env;
use log::{error, info, warn};
use simpost::config::CleanupConfig;
use simpost::{PruneReport, SeriesPruner, convert_file, scan_members};

fn prune(args: PruneArgs) -> anyhow::Result<PruneReport> {
    let pruners: Vec<SeriesPruner> = match &args.config {
        Some(path) => {
            let config = CleanupConfig::from_file(path)
                .with_context(|| format!("Could not load cleanup config {}", path.display()))?;
            Vec::<SeriesPruner>::try_from(config)?
        }
        None => {
            let (Some(dir), Some(start), Some(end)) = (&args.dir, args.start, args.end) else {
                bail!("--dir, --header, --start and --end are required without --config");
            };
            vec![SeriesPruner::new(
                dir,
                args.headers.iter().cloned(),
                start,
                end,
                args.stride,
                args.mode(),
            )?]
        }
    };

    let mut report = PruneReport::default();
    for pruner in &pruners {
        report.merge(pruner.run());
    }
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Prune(prune_args) => {
            let report = prune(prune_args)?;
            for header in &report.guarded {
                warn!("NO FILES WERE DELETED FOR SERIES '{header}'");
            }
            for failure in &report.failed {
                error!(
                    "Not deleted: {} ({})",
                    failure.path.display(),
                    failure.reason
                );
            }
            info!("Done. {} files deleted.", report.deleted.len());
        }
        Command::Scan(scan) => {
            for number in scan_members(&scan.dir, &scan.header, scan.start, scan.end)? {
                println!("{}", scan.dir.join(format!("{}.{number}", scan.header)).display());
            }
        }
        Command::Convert { input, output } => {
            convert_file(&input, &output).with_context(|| {
                format!("Could not convert {} to {}", input.display(), output.display())
            })?;
        }
    }
    Ok(())
}
