use crate::config::toml_config::JobFile;
use crate::config::RunConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "process_batch")]
#[command(about = "Split a text file into two lowercased files, alternating line by line")]
pub struct CliConfig {
    /// Input text file (UTF-8, one entry per line)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Receives lines 1, 3, 5, ...
    #[arg(value_name = "SINK_A")]
    pub sink_a: Option<PathBuf>,

    /// Receives lines 2, 4, 6, ...
    #[arg(value_name = "SINK_B")]
    pub sink_b: Option<PathBuf>,

    /// TOML job file; positional arguments override its [job] values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl CliConfig {
    /// 合併 job file 與命令列參數, 命令列優先
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_job_file(&JobFile::from_file(path)?),
            None => RunConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(sink_a) = &self.sink_a {
            config.sink_a = Some(sink_a.clone());
        }
        if let Some(sink_b) = &self.sink_b {
            config.sink_b = Some(sink_b.clone());
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(report) = &self.report {
            config.report = Some(report.clone());
        }
        config.verbose |= self.verbose;
        config.monitor |= self.monitor;

        Ok(config)
    }
}
