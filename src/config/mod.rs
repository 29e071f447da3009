pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_OUTPUT_PATH;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, Validate,
};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "icp-zonefile")]
#[command(about = "Generate a DNS zone file pointing a custom domain at a canister")]
pub struct CliConfig {
    /// Your custom domain (e.g., hash.aman.run)
    #[arg(long, required_unless_present = "config")]
    pub domain: Option<String>,

    /// The canister ID (e.g., 7xbei-4yaaa-aaaad-qg6dq-cai)
    #[arg(long, required_unless_present = "config")]
    pub canister: Option<String>,

    /// Output file name [default: zonefile.zone]
    #[arg(long)]
    pub output: Option<String>,

    /// TOML file providing any of domain, canister and output under [zone]
    #[arg(long)]
    pub config: Option<String>,

    /// Print the zone file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the command line over the optional TOML file.
    pub fn resolve(&self) -> Result<ZoneSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        ZoneSettings::merge(
            self.domain.clone(),
            self.canister.clone(),
            self.output.clone(),
            file,
        )
    }
}

/// Fully resolved inputs for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSettings {
    pub domain: String,
    pub canister_id: String,
    pub output_path: String,
}

impl ZoneSettings {
    /// Explicit values win over the file; `output` falls back to
    /// `zonefile.zone`. The result is validated before it is returned.
    pub fn merge(
        domain: Option<String>,
        canister: Option<String>,
        output: Option<String>,
        file: TomlConfig,
    ) -> Result<Self> {
        let zone = file.zone;
        let domain = domain.or(zone.domain);
        let canister = canister.or(zone.canister);
        let output_path = output
            .or(zone.output)
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        let settings = Self {
            domain: validate_required_field("domain", &domain)?.clone(),
            canister_id: validate_required_field("canister", &canister)?.clone(),
            output_path,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for ZoneSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("domain", &self.domain)?;
        validate_non_empty_string("canister", &self.canister_id)?;
        validate_path("output", &self.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for ZoneSettings {
    fn domain(&self) -> &str {
        &self.domain
    }

    fn canister_id(&self) -> &str {
        &self.canister_id
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}
