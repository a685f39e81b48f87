use crate::cli::OrientArgs;
use crate::config::PartialOrientConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use mdorient::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub async fn run(args: OrientArgs) -> Result<()> {
    let partial_config = PartialOrientConfig::load(&args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;
    info!(
        "Orientation vector: {} -> {} (degenerate policy: {}).",
        config.tail_selection(),
        config.head_selection(),
        config.degenerate_policy
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Computing ligand orientation...");
    info!("Invoking the core orientation workflow...");

    let series = tokio::task::block_in_place(|| workflows::orient::run(&config, &reporter))?;
    tokio::task::block_in_place(|| workflows::orient::write_series(&series, &config.output_path))?;

    let degenerate = series.degenerate_count();
    if degenerate > 0 {
        warn!("{} frame(s) were written as NaN.", degenerate);
        println!(
            "Warning: {} frame(s) had coincident atoms and were written as 'nan'.",
            degenerate
        );
    }
    println!(
        "✓ Orientation angles for {} frame(s) written to: {}",
        series.len(),
        config.output_path.display()
    );

    Ok(())
}
