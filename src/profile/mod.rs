//! Flat profiles: running gprof, and picking samples out of its report.

use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::language::{ProfilerSample, ProfilingError};
use crate::parsing::parse_profile;

/// The data rows of one flat profile, in report order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    samples: Vec<ProfilerSample>,
}

impl Profile {
    pub fn new(samples: Vec<ProfilerSample>) -> Profile {
        Profile { samples }
    }

    /// Scan a flat profile report, skipping everything that isn't a data row.
    pub fn from_text(content: &str) -> Profile {
        Profile::new(parse_profile(content))
    }

    pub fn samples(&self) -> &[ProfilerSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The first sample whose name contains `needle`. Callers should pass
    /// something specific enough to pick out a single function.
    pub fn function(&self, needle: &str) -> Option<&ProfilerSample> {
        self.samples
            .iter()
            .find(|sample| {
                sample
                    .name
                    .contains(needle)
            })
    }

    /// The `n` samples with the most self time, greatest first. Ties keep
    /// report order.
    pub fn top_functions(&self, n: usize) -> Vec<&ProfilerSample> {
        let mut ranked: Vec<&ProfilerSample> = self
            .samples
            .iter()
            .collect();

        ranked.sort_by(|a, b| {
            b.self_seconds
                .total_cmp(&a.self_seconds)
        });
        ranked.truncate(n);
        ranked
    }
}

/// Run `gprof <executable> --flat-profile` and return its report. The
/// executable must already have been run to produce gmon.out in the current
/// directory.
pub fn run_gprof(executable: &Path) -> Result<String, ProfilingError> {
    info!("Profiling: {}", executable.display());

    let output = Command::new("gprof")
        .arg(executable)
        .arg("--flat-profile")
        .output()
        .map_err(|error| ProfilingError::Launch(error.to_string()))?;

    debug!(status = ?output.status, bytes = output.stdout.len());

    if !output
        .status
        .success()
    {
        return Err(ProfilingError::Failed {
            status: output
                .status
                .code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
