use clap::Parser;
use icp_zonefile::utils::logger;
use icp_zonefile::{CliConfig, LocalStorage, ZoneError, ZoneFileGenerator, ZoneRequest};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "Zone file generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), ZoneError> {
    let settings = config.resolve()?;
    let generator = ZoneFileGenerator::new(LocalStorage::new());

    if config.dry_run {
        tracing::info!("Dry run, nothing will be written to {}", settings.output_path);
        let request = ZoneRequest::new(settings.domain.as_str(), settings.canister_id.as_str());
        print!("{}", generator.render(&request));
        return Ok(());
    }

    let output_path = generator.generate_from(&settings)?;
    println!("Zone file written to {}", output_path);
    Ok(())
}
