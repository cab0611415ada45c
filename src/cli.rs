use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use std::path::PathBuf;
use url::Url;

use crate::auth::Token;
use crate::constants::DEFAULT_BUILD_URL;
use crate::error::BuildStatsError;
use crate::insights::BuildMetricsReport;
use crate::output::{render_json, render_table};
use crate::providers::azure::{BuildsCollector, ReqwestClient};
use crate::tasks::{self, Task};

#[derive(Parser)]
#[command(name = "buildstats")]
#[command(author, version, about = "CI build metrics tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Install dependencies
    Setup,

    /// Lint the source code
    Lint,

    /// Run the unit tests
    Test,

    /// Print build metrics rolled up by date
    Metrics {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print every normalized build record as JSON
    Builds {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Lint then test (default)
    Build,
}

#[derive(Args)]
struct SourceArgs {
    /// Build server token, sent as basic auth
    #[arg(short, long, env = "AZURE_DEVOPS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Build list endpoint
    #[arg(short, long, env = "BUILDSTATS_URL", default_value = DEFAULT_BUILD_URL)]
    url: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl SourceArgs {
    fn collector(&self) -> Result<BuildsCollector<ReqwestClient>> {
        let url = Url::parse(&self.url)
            .map_err(|e| BuildStatsError::Config(format!("Invalid build URL: {e}")))?;

        if self.token.is_none() {
            warn!("No build server token provided, requests will be unauthenticated");
        }
        let token = Token::from(self.token.as_deref().unwrap_or_default());

        Ok(BuildsCollector::new(ReqwestClient::new()?, url, &token)?)
    }
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Setup) => tasks::run(Task::Setup)?,
            Some(Commands::Lint) => tasks::run(Task::Lint)?,
            Some(Commands::Test) => tasks::run(Task::Test)?,
            Some(Commands::Build) | None => tasks::run(Task::Build)?,
            Some(Commands::Metrics { source, format }) => {
                let collector = source.collector()?;
                let summary = collector.summary_table().await?;
                info!("Summarized {} dates", summary.rows.len());

                let rendered = match format {
                    OutputFormat::Table => render_table(&summary).to_string(),
                    OutputFormat::Json => {
                        let report = BuildMetricsReport {
                            provider: "Azure DevOps".to_string(),
                            build_url: collector.build_url().to_string(),
                            collected_at: Utc::now(),
                            total_dates: summary.rows.len(),
                            summary,
                        };
                        render_json(&report, self.pretty)?
                    }
                };
                self.emit(&rendered)?;
            }
            Some(Commands::Builds { source }) => {
                let collector = source.collector()?;
                let records = collector.fetch_build_metrics().await?;

                let json_output = if self.pretty {
                    serde_json::to_string_pretty(&records)?
                } else {
                    serde_json::to_string(&records)?
                };
                self.emit(&json_output)?;
            }
        }

        Ok(())
    }

    fn emit(&self, content: &str) -> Result<()> {
        if let Some(output_path) = &self.output {
            std::fs::write(output_path, content)?;
            info!("Output written to: {}", output_path.display());
        } else {
            println!("{content}");
        }
        Ok(())
    }
}
