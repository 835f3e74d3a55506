//! One-shot retrieval of the job listing.
//!
//! The listing is fetched exactly once per session. [`FetchHandle`] runs the
//! request on a background thread and hands the result back over a channel so
//! the UI loop never blocks on the network.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::job::JobPosting;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/crackeddevs";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("jobdeck/", env!("CARGO_PKG_VERSION"));

/// Where the listing comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    /// `GET` this URL and decode the JSON body.
    Http(String),
    /// Read a JSON file with the same shape as the API body.
    File(PathBuf),
}

impl JobSource {
    /// Human-readable location for the status bar and logs.
    pub fn label(&self) -> String {
        match self {
            Self::Http(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl Default for JobSource {
    fn default() -> Self {
        Self::Http(DEFAULT_ENDPOINT.to_string())
    }
}

/// Why the listing could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("listing is not a JSON array of jobs: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch worker exited without a result")]
    Disconnected,
}

/// Fetch the listing, surfacing any failure.
///
/// # Errors
///
/// Returns an error for network failures, non-success HTTP statuses, file
/// read failures, or a body that is not a JSON array of postings.
pub fn fetch_jobs(source: &JobSource) -> Result<Vec<JobPosting>, FetchError> {
    match source {
        JobSource::Http(url) => fetch_http(url),
        JobSource::File(path) => fetch_file(path),
    }
}

fn fetch_http(url: &str) -> Result<Vec<JobPosting>, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    tracing::debug!(status = %response.status(), url, "listing response received");
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

fn fetch_file(path: &Path) -> Result<Vec<JobPosting>, FetchError> {
    let body = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&body)?)
}

/// Fetch the listing, degrading any failure to an empty list.
///
/// The failure is logged and otherwise indistinguishable from an empty
/// listing, which is what the board shows in both cases.
pub fn load_jobs(source: &JobSource) -> Vec<JobPosting> {
    settle(source, fetch_jobs(source))
}

fn settle(source: &JobSource, result: Result<Vec<JobPosting>, FetchError>) -> Vec<JobPosting> {
    match result {
        Ok(jobs) => {
            tracing::info!(count = jobs.len(), source = %source.label(), "fetched job listing");
            jobs
        }
        Err(err) => {
            tracing::warn!(error = %err, source = %source.label(), "failed to fetch job listing");
            Vec::new()
        }
    }
}

/// A listing fetch running on a background thread.
pub struct FetchHandle {
    rx: Receiver<Result<Vec<JobPosting>, FetchError>>,
    source: JobSource,
    started: Instant,
    done: bool,
}

impl FetchHandle {
    /// Start fetching `source` in the background.
    pub fn spawn(source: JobSource) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_source = source.clone();
        std::thread::spawn(move || {
            // The receiver is gone if the app quit mid-fetch.
            let _ = tx.send(fetch_jobs(&worker_source));
        });
        Self {
            rx,
            source,
            started: Instant::now(),
            done: false,
        }
    }

    /// Returns the listing once the fetch has finished, exactly once.
    ///
    /// Failures are logged and yield an empty listing.
    pub fn take_ready(&mut self) -> Option<Vec<JobPosting>> {
        if self.done {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(FetchError::Disconnected),
        };
        self.done = true;
        tracing::debug!(
            elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "listing fetch settled"
        );
        Some(settle(&self.source, result))
    }

    pub const fn is_done(&self) -> bool {
        self.done
    }
}
