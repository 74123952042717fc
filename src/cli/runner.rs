use tracing::info;
use tracing_subscriber::EnvFilter;

use pairbatch::{
    BatchParams, Error, LocalFs, RunReport, TransferMode, organise_directory, write_run_report,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn params_from_args(args: &CliArgs) -> Result<BatchParams, Error> {
    let batch_size = usize::try_from(args.batch_size)
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| {
            Error::invalid(
                "batch_size",
                args.batch_size.to_string(),
                "must be greater than 0",
            )
        })?;

    Ok(BatchParams {
        batch_size,
        prefix: args.prefix.clone(),
        text_ext: args.text_ext.clone(),
        image_ext: args.image_ext.clone(),
        combined_name: args.combined_name.clone(),
        transfer_mode: if args.move_files {
            TransferMode::Move
        } else {
            TransferMode::Copy
        },
    })
}

fn print_summary(report: &RunReport) {
    let rule = "=".repeat(60);
    println!("{}", rule);
    if report.total_pairs == 0 {
        println!("No file pairs found. Nothing to do.");
    } else {
        println!("Processing complete!");
    }
    println!("Created {} batch folders", report.batch_count());
    println!("Total file pairs: {}", report.total_pairs);
    println!("Pairs transferred: {}", report.pairs_transferred());
    println!("Pairs failed: {}", report.pairs_failed());
    println!("Unmatched stems: {}", report.unmatched.len());

    let issues = report.issues();
    if !issues.is_empty() {
        println!("Issues ({}):", issues.len());
        for issue in &issues {
            println!("  {}", issue);
        }
    }
    println!("{}", rule);
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = params_from_args(&args).map_err(AppError::from)?;
    let dest_root = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.source_dir.clone());

    info!(
        "{} pairs from {:?} into {:?}",
        params.transfer_mode.verb(),
        args.source_dir,
        dest_root
    );

    let report = organise_directory(&LocalFs, &args.source_dir, &dest_root, &params)
        .map_err(AppError::from)?;

    if let Some(path) = &args.report {
        write_run_report(&LocalFs, &report, path).map_err(|source| AppError::Report {
            path: path.clone(),
            source,
        })?;
    }

    print_summary(&report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_documented_values() {
        let args = CliArgs::parse_from(["pairbatch", "/data"]);
        let params = params_from_args(&args).unwrap();
        assert_eq!(params, BatchParams::default());
        assert!(args.output_dir.is_none());
    }

    #[test]
    fn move_flag_selects_move_mode() {
        let args = CliArgs::parse_from(["pairbatch", "/data", "--move", "--batch-size", "10"]);
        let params = params_from_args(&args).unwrap();
        assert_eq!(params.transfer_mode, TransferMode::Move);
        assert_eq!(params.batch_size, 10);
    }

    #[test]
    fn non_positive_batch_size_is_invalid() {
        for value in ["0", "-5"] {
            let args = CliArgs::parse_from(["pairbatch", "/data", "--batch-size", value]);
            assert!(matches!(
                params_from_args(&args),
                Err(Error::InvalidConfiguration { arg: "batch_size", .. })
            ));
        }
    }
}
