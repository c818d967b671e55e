// src/supervise/bounded.rs

//! Lifetime-bounded execution of a single external command.
//!
//! `run_bounded` launches the command, drains its output on dedicated reader
//! workers, and waits for natural exit up to the resolved lifetime budget.
//! An overdue process is asked to exit gracefully, given a fixed grace
//! period, then killed. Termination races and decode failures are logged and
//! absorbed, never surfaced as errors.

use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::errors::{AutomgrError, Result};
use crate::lifetime::Lifetime;

/// How long an overdue process gets to exit after the graceful request.
pub const TERM_GRACE: Duration = Duration::from_secs(5);

/// Best-effort window for reader workers to unwind once the process is dead.
pub const JOIN_GRACE: Duration = Duration::from_secs(1);

type SharedBuf = Arc<Mutex<Vec<u8>>>;

/// Run `command` under a wall-clock lifetime budget.
///
/// Returns the decoded `(stdout, stderr)` pair when `capture_output` is set,
/// `None` otherwise. A process that outlives its budget is sent a graceful
/// termination request, granted [`TERM_GRACE`] to comply, then killed; the
/// call returns no later than roughly `budget + TERM_GRACE + JOIN_GRACE`.
/// A process that survives even the kill is logged and abandoned.
///
/// A zero (or already spent) budget still launches the command and then
/// immediately enters the termination path. Spawn failures propagate as the
/// underlying OS error.
pub async fn run_bounded(
    command: &[String],
    lifetime: &Lifetime,
    capture_output: bool,
) -> Result<Option<(String, String)>> {
    let (program, args) = command.split_first().ok_or_else(|| {
        AutomgrError::ConfigError("cannot supervise an empty command".to_string())
    })?;

    let budget = lifetime.remaining()?;
    info!(seconds = budget.as_secs_f64(), "lifetime budget resolved");

    let mut cmd = Command::new(program);
    cmd.args(args);
    if capture_output {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
    }
    // Last-resort cleanup if this future is dropped mid-flight.
    cmd.kill_on_drop(true);

    let mut child = cmd.spawn()?;
    debug!(program = %program, pid = child.id(), "child process started");

    let stdout_buf: SharedBuf = Arc::new(Mutex::new(Vec::new()));
    let stderr_buf: SharedBuf = Arc::new(Mutex::new(Vec::new()));
    let mut readers: Vec<JoinHandle<()>> = Vec::new();
    if let Some(stream) = child.stdout.take() {
        readers.push(spawn_reader("stdout", stream, stdout_buf.clone()));
    }
    if let Some(stream) = child.stderr.take() {
        readers.push(spawn_reader("stderr", stream, stderr_buf.clone()));
    }

    let started = Instant::now();
    let timed_out = match timeout(budget, child.wait()).await {
        Ok(status) => {
            let status = status?;
            debug!(?status, "child exited within its lifetime budget");
            false
        }
        Err(_) => {
            info!("process exceeded its lifetime budget, terminating");
            terminate_overdue(&mut child).await;
            true
        }
    };

    // Give the reader workers a bounded window to reach EOF. After a kill
    // the pipes close almost immediately; after a natural exit the window
    // covers whatever budget is left plus the join grace.
    let reader_window = if timed_out {
        JOIN_GRACE
    } else {
        budget.saturating_sub(started.elapsed()) + JOIN_GRACE
    };
    for handle in readers {
        if timeout(reader_window, handle).await.is_err() {
            warn!("output reader still draining at the join deadline; capture may be partial");
        }
    }

    if timed_out {
        match child.try_wait() {
            Ok(Some(status)) => debug!(?status, "overdue child reaped"),
            Ok(None) => warn!("child still running after kill; abandoning the handle"),
            Err(err) => debug!(error = %err, "could not check child state after kill"),
        }
    }

    if !capture_output {
        return Ok(None);
    }

    let stdout = decode("stdout", take_buffer(&stdout_buf).await);
    let stderr = decode("stderr", take_buffer(&stderr_buf).await);
    Ok(Some((stdout, stderr)))
}

/// Graceful-then-forceful termination of an overdue child.
///
/// Signalling a process that already exited is treated as success. After the
/// kill, reaping is left to the caller's join window.
async fn terminate_overdue(child: &mut Child) {
    request_graceful_exit(child);

    match timeout(TERM_GRACE, child.wait()).await {
        Ok(Ok(status)) => {
            debug!(?status, "child exited after the graceful termination request");
            return;
        }
        Ok(Err(err)) => {
            debug!(error = %err, "waiting for the terminated child failed; assuming it is gone");
            return;
        }
        Err(_) => {
            warn!("process ignored the termination request, killing");
        }
    }

    if let Err(err) = child.start_kill() {
        // Typically the process exited between the grace wait and the kill.
        debug!(error = %err, "kill after the grace period failed; child likely already gone");
    }
}

/// Ask the child to exit cleanly. On Unix this is SIGTERM; elsewhere the
/// closest available request is the hard kill.
#[cfg(unix)]
fn request_graceful_exit(child: &mut Child) {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let Some(pid) = child.id() else {
        debug!("child already reaped before the termination request");
        return;
    };
    match kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
        Ok(()) => debug!(pid, "sent SIGTERM"),
        Err(Errno::ESRCH) => debug!(pid, "child exited before SIGTERM was sent"),
        Err(err) => warn!(pid, error = %err, "failed to send SIGTERM"),
    }
}

#[cfg(not(unix))]
fn request_graceful_exit(child: &mut Child) {
    if let Err(err) = child.start_kill() {
        debug!(error = %err, "kill request failed; child likely already gone");
    }
}

fn spawn_reader<R>(stream: &'static str, mut source: R, buf: SharedBuf) -> JoinHandle<()>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut chunk = [0u8; 8192];
        loop {
            match source.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => buf.lock().await.extend_from_slice(&chunk[..n]),
                Err(err) => {
                    debug!(stream, error = %err, "output stream closed with an error");
                    break;
                }
            }
        }
    })
}

async fn take_buffer(buf: &SharedBuf) -> Vec<u8> {
    std::mem::take(&mut *buf.lock().await)
}

/// Decode captured bytes as UTF-8. A failure is logged and replaced with a
/// lossy decoding instead of failing the supervision call.
fn decode(stream: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(stream, error = %err, "captured output is not valid UTF-8");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
