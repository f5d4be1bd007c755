use anyhow::Context;
use clap::Parser;
use concert_finder::utils::{logger, validation::Validate};
use concert_finder::{CliConfig, ConcertEngine, ConcertError, RunSummary, TicketmasterClient};

fn report_failure(e: &ConcertError) -> i32 {
    tracing::debug!(
        "Concert search failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("{}", e.diagnostic_line());

    e.exit_code()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting concert-finder CLI");

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => std::process::exit(report_failure(&e)),
    };

    let query = config.search_query();
    let engine = ConcertEngine::new(TicketmasterClient::new(config)).with_output_format(cli.output);

    let mut stdout = std::io::stdout();
    match engine.run(&query, &mut stdout).await {
        Ok(RunSummary::NoConcerts) => {
            tracing::debug!("No concerts found for '{}' in {}", query.artist_name, query.city);
        }
        Ok(RunSummary::Completed { concerts, report }) => {
            tracing::info!(
                "✅ Done: {} concerts, {} printed, {} incomplete",
                concerts,
                report.printed,
                report.incomplete.len()
            );
        }
        Err(e) => {
            let exit_code = report_failure(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    std::io::Write::flush(&mut stdout).context("failed to flush stdout")?;
    Ok(())
}
