use anolis_errata::prelude::*;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    let config = args.to_config();

    let transport = HttpTransport::new()?;
    let writer = JsonCollectionWriter::new();
    let observer = StderrObserver::new(args.quiet);

    let use_case = SyncErrataUseCase::new(config, transport, writer, observer);
    let report = use_case.run()?;

    if !args.quiet {
        eprintln!(
            "✅ Sync complete: {} year(s), {} errata persisted, {} skipped",
            report.years.len(),
            report.total_persisted(),
            report.total_skipped()
        );
    }

    Ok(())
}
