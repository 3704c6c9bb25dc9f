use anyhow::Context;
use clap::Parser;
use process_batch::utils::{logger, validation::Validate};
use process_batch::{BatchEngine, BatchError, CliConfig, DistributionReport, RunConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // 日誌設定可能來自 job file, 所以先解析配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    logger::init_logger(config.verbose, config.log_format);
    tracing::debug!("Run config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        return ExitCode::from(e.exit_code() as u8);
    }

    match run(&config) {
        Ok(report) => {
            tracing::info!(
                "✅ Done in {}ms ({} lines)",
                report.elapsed_ms,
                report.counts.lines_read
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Batch failed: {:#}", e);
            match e.downcast_ref::<BatchError>() {
                Some(batch_error) => {
                    tracing::error!("Category: {:?}", batch_error.category());
                    eprintln!("❌ {}", batch_error.user_friendly_message());
                    eprintln!("💡 Suggestion: {}", batch_error.recovery_suggestion());
                    ExitCode::from(batch_error.exit_code() as u8)
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run(config: &RunConfig) -> anyhow::Result<DistributionReport> {
    let job = config.job()?;
    let engine = BatchEngine::new_with_monitoring(config.monitor);
    if engine.is_monitoring() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let report = engine.run(&job)?;

    if let Some(path) = &config.report {
        let json = serde_json::to_string_pretty(&report).map_err(BatchError::from)?;
        std::fs::write(path, json + "\n")
            .map_err(|e| BatchError::output(path, e))
            .with_context(|| format!("writing run report to {}", path.display()))?;
        tracing::info!("📁 Report saved to: {}", path.display());
    }

    Ok(report)
}
