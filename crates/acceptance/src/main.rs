use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use acceptance::{capability_report, read_input, render_report};
use verifier::{parse_kernel_version, run_check};

struct Args {
    arch: String,
    kernel_release: Option<String>,
    kernel_release_file: Option<String>,
    log_file: Option<String>,
    json: bool,
}

fn parse_args() -> Args {
    let mut arch: Option<String> = None;
    let mut kernel_release: Option<String> = None;
    let mut kernel_release_file: Option<String> = None;
    let mut log_file: Option<String> = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--arch" => {
                if let Some(val) = args.next() {
                    arch = Some(val);
                }
            }
            "--kernel-release" => {
                if let Some(val) = args.next() {
                    kernel_release = Some(val);
                }
            }
            "--kernel-release-file" => {
                if let Some(val) = args.next() {
                    kernel_release_file = Some(val);
                }
            }
            "--log-file" => {
                if let Some(val) = args.next() {
                    log_file = Some(val);
                }
            }
            "--json" => json = true,
            _ => {}
        }
    }

    let arch = arch
        .or_else(|| std::env::var("INGRAIND_ACCEPT_ARCH").ok())
        .unwrap_or_else(|| "x86_64".to_string());
    let log_file = log_file.or_else(|| std::env::var("INGRAIND_ACCEPT_LOG").ok());

    Args {
        arch,
        kernel_release,
        kernel_release_file,
        log_file,
        json,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = parse_args();

    let kernel_info = match (&args.kernel_release, &args.kernel_release_file) {
        (Some(release), _) => release.clone(),
        (None, Some(path)) => {
            read_input(path).with_context(|| format!("read kernel release from {path}"))?
        }
        (None, None) => bail!("one of --kernel-release or --kernel-release-file is required"),
    };
    let log_path = args
        .log_file
        .context("--log-file is required (use - for stdin)")?;
    let log_text =
        read_input(&log_path).with_context(|| format!("read agent log from {log_path}"))?;

    // A release string that does not parse is a hard stop, not a verdict.
    let version = parse_kernel_version(&kernel_info)?;
    let outcome = run_check(&args.arch, &kernel_info, &log_text)?;

    info!(
        kernel = %kernel_info.trim(),
        code = version.code(),
        arch = %args.arch,
        attached = outcome.actual.len(),
        expected = outcome.expected.len(),
        "acceptance check complete"
    );
    debug!(report = ?capability_report(&version, &args.arch, &outcome), "capability summary");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_report(&outcome));
    }

    if !outcome.pass {
        warn!(
            missing = outcome.missing.len(),
            unexpected = outcome.unexpected.len(),
            "probe set mismatch"
        );
        bail!(
            "probe verification failed: {} missing, {} unexpected",
            outcome.missing.len(),
            outcome.unexpected.len()
        );
    }

    info!("all expected probes attached");
    Ok(())
}
