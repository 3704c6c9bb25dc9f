#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::BatchJob;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_distinct_paths, validate_path, validate_required_field, Validate,
};
use std::path::PathBuf;
use toml_config::JobFile;

/// Settings for one run, after merging the job file with command-line overrides.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub input: Option<PathBuf>,
    pub sink_a: Option<PathBuf>,
    pub sink_b: Option<PathBuf>,
    pub verbose: bool,
    pub log_format: LogFormat,
    pub monitor: bool,
    pub report: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_job_file(file: &JobFile) -> Self {
        Self {
            input: file.job.input.clone(),
            sink_a: file.job.sink_a.clone(),
            sink_b: file.job.sink_b.clone(),
            verbose: file.verbose(),
            log_format: file.log_format().unwrap_or_default(),
            monitor: file.monitoring_enabled(),
            report: file.report_path().map(PathBuf::from),
        }
    }

    pub fn job(&self) -> Result<BatchJob> {
        let input = validate_required_field("job.input", &self.input)?;
        let sink_a = validate_required_field("job.sink_a", &self.sink_a)?;
        let sink_b = validate_required_field("job.sink_b", &self.sink_b)?;
        Ok(BatchJob::new(input.clone(), sink_a.clone(), sink_b.clone()))
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        let job = self.job()?;
        job.validate()?;

        if let Some(report) = &self.report {
            validate_path("report.path", report)?;
            validate_distinct_paths(
                "report.path",
                report,
                &[
                    ("job.input", &job.input),
                    ("job.sink_a", &job.sink_a),
                    ("job.sink_b", &job.sink_b),
                ],
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BatchError;

    fn config(input: &str, sink_a: &str, sink_b: &str) -> RunConfig {
        RunConfig {
            input: Some(input.into()),
            sink_a: Some(sink_a.into()),
            sink_b: Some(sink_b.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config("corpus.txt", "train.txt", "test.txt").validate().is_ok());
    }

    #[test]
    fn test_missing_sink_is_reported_by_field() {
        let mut cfg = config("corpus.txt", "train.txt", "test.txt");
        cfg.sink_b = None;

        let err = cfg.validate().unwrap_err();
        assert!(
            matches!(err, BatchError::MissingConfigError { ref field } if field == "job.sink_b")
        );
    }

    #[test]
    fn test_identical_sinks_rejected() {
        let err = config("corpus.txt", "out.txt", "out.txt").validate().unwrap_err();
        assert!(matches!(
            err,
            BatchError::InvalidConfigValueError { ref field, .. } if field == "job.sink_b"
        ));
    }

    #[test]
    fn test_sink_equal_to_input_rejected() {
        assert!(config("corpus.txt", "corpus.txt", "b.txt").validate().is_err());
        assert!(config("corpus.txt", "a.txt", "corpus.txt").validate().is_err());
    }

    #[test]
    fn test_report_must_not_overwrite_sink() {
        let mut cfg = config("corpus.txt", "a.txt", "b.txt");
        cfg.report = Some("a.txt".into());
        assert!(cfg.validate().is_err());

        cfg.report = Some("report.json".into());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_from_job_file() {
        let file = JobFile::from_toml_str(
            "[job]\ninput = \"in.txt\"\nsink_a = \"a.txt\"\nsink_b = \"b.txt\"\n\
             [monitoring]\nenabled = true\n",
        )
        .unwrap();

        let cfg = RunConfig::from_job_file(&file);
        assert_eq!(cfg.job().unwrap(), BatchJob::new("in.txt", "a.txt", "b.txt"));
        assert!(cfg.monitor);
        assert_eq!(cfg.log_format, LogFormat::Compact);
    }
}
