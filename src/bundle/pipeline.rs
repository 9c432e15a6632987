// file: src/bundle/pipeline.rs
// version: 1.1.0
// guid: 7d3a9f12-5e68-4c21-8b0f-2e9c6a4d1b75

//! The bundle orchestrator

use super::arch::Architecture;
use super::cleanup::clean_history;
use super::credentials::Credential;
use super::naming::sanitize_name;
use super::toolchain::{BundleJob, ToolFamily, VersionCheck};
use super::BUNDLE_DIR;
use crate::config::ConfigRecord;
use crate::console::StatusReporter;
use crate::error::BundlerError;
use crate::network::RemoteExecutor;
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Pattern of the image id printed by the registration tool
const IMAGE_ID_PATTERN: &str = r"(?i)ami-[a-z0-9]+";

static IMAGE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(IMAGE_ID_PATTERN).expect("Invalid image id regex"));

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    DetectTools,
    StageCredentials,
    CleanBefore,
    DetectArchitecture,
    Bundle,
    Upload,
    Register,
    CleanAfter,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::DetectTools => "detect tools",
            Step::StageCredentials => "stage credentials",
            Step::CleanBefore => "clean before bundling",
            Step::DetectArchitecture => "detect architecture",
            Step::Bundle => "bundle volume",
            Step::Upload => "upload bundle",
            Step::Register => "register image",
            Step::CleanAfter => "clean after bundling",
        };
        f.write_str(name)
    }
}

/// Wall-clock run time split into whole minutes and leftover seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElapsedReport {
    pub minutes: u64,
    pub seconds: f64,
}

impl From<Duration> for ElapsedReport {
    fn from(elapsed: Duration) -> Self {
        let minutes = elapsed.as_secs() / 60;
        let seconds = elapsed.as_secs_f64() - (minutes * 60) as f64;
        Self {
            minutes,
            seconds: seconds.max(0.0),
        }
    }
}

impl fmt::Display for ElapsedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes and {:.2} seconds", self.minutes, self.seconds)
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct BundleOutcome {
    pub image_id: String,
    pub architecture: Architecture,
    pub elapsed: ElapsedReport,
}

/// First image id in the registration output, scanning line by line
pub fn extract_image_id(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| IMAGE_ID_REGEX.find(line).map(|m| m.as_str().to_string()))
}

/// Runs the bundle pipeline against one connected host
pub struct BundleOrchestrator<'a, E: ?Sized, R: ?Sized> {
    executor: &'a mut E,
    reporter: &'a R,
    tools: ToolFamily,
}

impl<'a, E, R> BundleOrchestrator<'a, E, R>
where
    E: RemoteExecutor + ?Sized,
    R: StatusReporter + ?Sized,
{
    pub fn new(executor: &'a mut E, reporter: &'a R, tools: ToolFamily) -> Self {
        Self {
            executor,
            reporter,
            tools,
        }
    }

    /// Run every step in order. The first failure ends the run.
    pub async fn run(&mut self, config: &ConfigRecord) -> Result<BundleOutcome> {
        config.validate()?;
        let started = Instant::now();

        self.enter(Step::DetectTools);
        self.detect_tools().await?;

        self.enter(Step::StageCredentials);
        let private_key = Credential::from_config(&config.ec2_private_key)?;
        let certificate = Credential::from_config(&config.ec2_cert)?;
        let private_key = private_key.stage(&mut *self.executor).await?;
        let certificate = certificate.stage(&mut *self.executor).await?;

        self.enter(Step::CleanBefore);
        clean_history(&mut *self.executor).await?;

        self.enter(Step::DetectArchitecture);
        let arch = self.detect_architecture().await?;

        let prefix = sanitize_name(&config.image_name);
        let job = BundleJob {
            arch,
            image_name: &config.image_name,
            bucket_path: format!(
                "{}/image_bundles/{}",
                config.s3_bucket_name,
                sanitize_name(&config.image_name)
            ),
            prefix,
            account_id: &config.amazon_account_id,
            access_key: &config.amazon_access_key,
            secret_key: &config.amazon_secret_key,
            private_key,
            certificate,
        };

        self.enter(Step::Bundle);
        self.reporter.success("Creating the EC2 Bundle...");
        self.executor.sudo(&format!("mkdir -p {}/", BUNDLE_DIR)).await?;
        self.executor.sudo(&self.tools.bundle_command(&job)).await?;

        self.enter(Step::Upload);
        self.reporter.success("Uploading the EC2 Bundle to S3...");
        self.executor.sudo(&self.tools.upload_command(&job)).await?;

        self.enter(Step::Register);
        self.reporter.success("Registering the AMI...");
        let output = self.executor.sudo(&self.tools.register_command(&job)).await?;
        let image_id = extract_image_id(&output).ok_or_else(|| {
            BundlerError::RegistrationError(format!(
                "no image id in registration output: {}",
                output.trim()
            ))
        })?;
        info!("Registered {} as {}", config.image_name, image_id);

        self.enter(Step::CleanAfter);
        self.reporter.success("Cleaning up after myself...");
        clean_history(&mut *self.executor).await?;

        let elapsed = ElapsedReport::from(started.elapsed());
        self.reporter.success(&format!(
            "\nDone! Took {}.\n\nYour new image '{}' has been registered as {}.",
            elapsed, config.image_name, image_id
        ));

        Ok(BundleOutcome {
            image_id,
            architecture: arch,
            elapsed,
        })
    }

    fn enter(&self, step: Step) {
        info!("Step: {}", step);
    }

    /// Check each version probe of the tool family.
    ///
    /// A missing tool ends the run; an unexpected version only warns.
    pub async fn detect_tools(&mut self) -> Result<()> {
        self.reporter
            .success("Detecting if the bundling tools are installed...");

        for probe in &self.tools.probes {
            let output = self.executor.run(&probe.command_line()).await?;
            match probe.check(&output) {
                VersionCheck::Match(found) => {
                    self.reporter
                        .success(&format!("Detected {} {}. OK.", probe.label, found));
                }
                VersionCheck::Mismatch(found) => {
                    self.reporter.warning(&format!(
                        "Detected {} {}. Expected {}. Use at your own risk!",
                        probe.label, found, probe.expected
                    ));
                }
                VersionCheck::Missing => {
                    self.reporter
                        .fatal(&format!("Couldn't find {}. Exiting.", probe.label));
                    return Err(BundlerError::ToolchainMissing(probe.label.to_string()));
                }
            }
        }
        Ok(())
    }

    pub async fn detect_architecture(&mut self) -> Result<Architecture> {
        let output = self.executor.run("uname -m").await?;
        debug!("uname -m reported {:?}", output.trim());
        let arch = Architecture::from_uname(&output);
        self.reporter
            .success(&format!("Detected instance architecture: {}.", arch));
        Ok(arch)
    }
}
