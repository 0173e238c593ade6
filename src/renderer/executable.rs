use std::io::{Read, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::constants::EXECUTABLE_POLL_INTERVAL_MS;
use crate::error::{Error, Result};

/// Renders an executable template by running it.
///
/// # Arguments
/// * `template_path` - Path to the executable template
/// * `context` - Metadata, sent to the child as JSON on stdin
/// * `timeout` - Kill the child once this much time has passed
///
/// # Returns
/// * `Result<Vec<u8>>` - Everything the child wrote to stdout, untouched
///
/// # Notes
/// - The child gets no arguments; stdin is closed after the JSON is written
/// - stderr is only kept to explain a failure
/// - A non-zero exit yields [`Error::ExecutableFailed`] with stdout followed by stderr
pub fn render_executable<P: AsRef<Path>>(
    template_path: P,
    context: &serde_json::Value,
    timeout: Option<Duration>,
) -> Result<Vec<u8>> {
    let template_path = template_path.as_ref();
    let template = template_path.display().to_string();

    let input = serde_json::to_vec(context).map_err(Error::JSONParseError)?;

    log::debug!("Running executable template {template}");

    let mut child = Command::new(template_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::SpawnFailure { template: template.clone(), source })?;

    // Drain both pipes on their own threads so a child that writes a lot
    // before reading stdin cannot block on a full pipe.
    let stdout_handle = child.stdout.take().map(drain);
    let stderr_handle = child.stderr.take().map(drain);

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(&input) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                log::debug!(
                    "Executable template {template} closed stdin before reading the metadata"
                );
            } else {
                log::debug!("Writing metadata to {template} failed, killing it: {e}");
                abort(&mut child);
                return Err(e.into());
            }
        }
        // Explicitly close stdin to signal end of input
        drop(stdin);
    }

    let status = wait(&mut child, timeout, &template)?;

    let stdout = join(stdout_handle)?;
    let stderr = join(stderr_handle)?;

    if !status.success() {
        let mut output = String::from_utf8_lossy(&stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&stderr));
        return Err(Error::ExecutableFailed { template, output });
    }

    if !stderr.is_empty() {
        log::debug!(
            "Executable template {template} wrote to stderr: {}",
            String::from_utf8_lossy(&stderr)
        );
    }

    Ok(stdout)
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<std::io::Result<Vec<u8>>> {
    std::thread::spawn(move || {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(buffer)
    })
}

fn join(handle: Option<JoinHandle<std::io::Result<Vec<u8>>>>) -> Result<Vec<u8>> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| anyhow::anyhow!("pipe reader thread panicked"))?
            .map_err(Error::from),
        None => Ok(Vec::new()),
    }
}

/// Waits for the child, killing it once `timeout` has elapsed.
fn wait(child: &mut Child, timeout: Option<Duration>, template: &str) -> Result<ExitStatus> {
    let Some(timeout) = timeout else {
        return Ok(child.wait()?);
    };

    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if start.elapsed() > timeout {
            log::debug!("Killing executable template {template} after {timeout:?}");
            abort(child);
            return Err(Error::ExecutableTimeout {
                template: template.to_string(),
                seconds: timeout.as_secs(),
            });
        }
        std::thread::sleep(Duration::from_millis(EXECUTABLE_POLL_INTERVAL_MS));
    }
}

/// Kills the child and reaps it so no zombie is left behind.
fn abort(child: &mut Child) {
    // The child may already have exited; then kill fails and wait reaps it.
    let _ = child.kill();
    let _ = child.wait();
}
