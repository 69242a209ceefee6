use clap::Parser;
use drs_uuid::{run_self_check, DrsIdentity};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "drs-uuid", version)]
#[command(about = "Generate deterministic UUIDs for Git-DRS files")]
#[command(after_help = "Example: drs-uuid /data/file.bam <sha256> 1024000")]
struct Cli {
    /// File path (will be normalised)
    #[arg(required_unless_present = "self_test")]
    path: Option<String>,
    /// SHA256 hash (64-character hex string)
    #[arg(required_unless_present = "self_test")]
    sha256: Option<String>,
    /// File size in bytes
    #[arg(required_unless_present = "self_test", allow_negative_numbers = true)]
    size: Option<i64>,
    /// Show canonical DID string
    #[arg(long)]
    show_canonical: bool,
    /// Show namespace UUID
    #[arg(long)]
    show_namespace: bool,
    /// Verify against expected UUID
    #[arg(long, value_name = "UUID")]
    verify: Option<String>,
    /// Print every derived value as JSON instead of text lines
    #[arg(long)]
    json: bool,
    /// Check the namespace and reference vector, then exit
    #[arg(long, exclusive = true)]
    self_test: bool,
}

/// Result of a run, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only ever carries the documented output lines.
fn init_logging() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("drs_uuid=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Derives the identifier for the parsed arguments and writes the report.
///
/// Validation failures and verify mismatches are outcomes, not errors. `Err` is only returned
/// when writing to `out` or `err` fails.
fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> anyhow::Result<Outcome> {
    if cli.self_test {
        return self_test(out);
    }

    let (Some(path), Some(sha256), Some(size)) = (&cli.path, &cli.sha256, cli.size) else {
        anyhow::bail!("path, sha256 and size are required");
    };

    let identity = match DrsIdentity::derive(path, sha256, size) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::debug!(error = %e, "rejected input");
            writeln!(err, "Error: {e}")?;
            return Ok(Outcome::Failure);
        }
    };

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &identity)?;
        writeln!(out)?;
    } else {
        if cli.show_canonical {
            writeln!(out, "Canonical DID: {}", identity.canonical)?;
        }
        if cli.show_namespace {
            writeln!(out, "Namespace UUID: {}", identity.namespace)?;
        }
        writeln!(out, "Generated UUID: {}", identity.uuid)?;
    }

    if let Some(expected) = &cli.verify {
        if identity.uuid.matches(expected) {
            writeln!(out, "✓ UUID matches expected value")?;
        } else {
            writeln!(out, "✗ UUID mismatch!")?;
            writeln!(out, "  Expected: {expected}")?;
            writeln!(out, "  Got:      {}", identity.uuid)?;
            return Ok(Outcome::Failure);
        }
    }

    Ok(Outcome::Success)
}

/// Prints one line per known-answer check and fails if any check fails.
fn self_test<W: Write>(out: &mut W) -> anyhow::Result<Outcome> {
    let checks = run_self_check();

    for check in &checks {
        if check.passed() {
            writeln!(out, "✓ {}: {}", check.name, check.actual)?;
        } else {
            writeln!(
                out,
                "✗ {}: expected {}, got {}",
                check.name, check.expected, check.actual
            )?;
        }
    }

    let failed = checks.iter().filter(|c| !c.passed()).count();
    if failed > 0 {
        writeln!(out, "{failed} of {} checks failed", checks.len())?;
        return Ok(Outcome::Failure);
    }

    writeln!(out, "All checks passed")?;
    Ok(Outcome::Success)
}
