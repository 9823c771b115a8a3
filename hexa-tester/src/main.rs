mod audit;
mod reports;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use audit::{SequenceAudit, audit_import, audit_job};
use hexa_core::JOBS;
use hexa_core::jobs::{JOBS_WITH_SEQUENCES, is_known_job};
use util::split_csv;

#[derive(Debug, Parser)]
#[command(name = "hexa-tester", version = "0.1.0")]
#[command(about = "Audits HEXA priority sequences against the tracker's level rules")]
struct Args {
    /// Jobs to audit (comma-separated). `canned` selects jobs that ship a sequence, `all` every job
    #[arg(long, default_value = "canned")]
    jobs: String,

    /// Audit an exported sequence file instead of the job tables
    #[arg(long, requires = "job")]
    import: Option<PathBuf>,

    /// Job the imported file is expected to belong to
    #[arg(long, requires = "import")]
    job: Option<String>,

    /// List every supported job and exit
    #[arg(long)]
    list_jobs: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Treat completeness warnings as errors
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_jobs(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let audits = run_audits(&args)?;
    write_reports(&args, &audits, start_time)?;

    if audits.iter().any(|a| !a.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_jobs(args: &Args) -> Result<bool> {
    if !args.list_jobs {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Supported jobs:")?;
    for job in JOBS.iter() {
        let marker = if JOBS_WITH_SEQUENCES.contains(job) {
            "canned sequence"
        } else {
            "fallback sequence"
        };
        writeln!(output_target.writer(), "  {job:28} - {marker}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    eprintln!("{}", "🔷 Hexa Sequence Auditor".bright_cyan().bold());
    eprintln!("{}", "========================".cyan());
}

fn expand_jobs(jobs_arg: &str) -> Vec<String> {
    let mut jobs = Vec::new();
    for token in split_csv(jobs_arg) {
        match token.as_str() {
            "all" => jobs.extend(JOBS.iter().map(|job| (*job).to_string())),
            "canned" => jobs.extend(JOBS_WITH_SEQUENCES.iter().map(|job| (*job).to_string())),
            _ => jobs.push(token),
        }
    }
    let mut seen = std::collections::HashSet::new();
    jobs.retain(|job| seen.insert(job.clone()));
    jobs
}

fn run_audits(args: &Args) -> Result<Vec<SequenceAudit>> {
    if let (Some(path), Some(job)) = (args.import.as_ref(), args.job.as_deref()) {
        log::info!("auditing {} as a {job} sequence", path.display());
        return Ok(vec![audit_import(path, job, args.strict)?]);
    }

    let mut audits = Vec::new();
    for job in expand_jobs(&args.jobs) {
        if !is_known_job(&job) {
            eprintln!("⚠️  Unknown job: {}", job.yellow());
            continue;
        }
        audits.push(audit_job(&job, args.strict));
    }
    Ok(audits)
}

fn write_reports(args: &Args, audits: &[SequenceAudit], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, audits)?,
        "markdown" => {
            if audits.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Hexa Sequence Audit\n\n_No sequences audited._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, audits)?;
            }
        }
        _ => {
            if audits.is_empty() {
                writeln!(&mut output_target, "No sequences audited.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    audits,
                    args.verbose,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            jobs: "canned".to_string(),
            import: None,
            job: None,
            list_jobs: false,
            report: "json".to_string(),
            strict: false,
            verbose: false,
            output: None,
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hexa-main-{}-{name}", std::process::id()))
    }

    #[test]
    fn expands_job_keywords_without_duplicates() {
        let expanded = expand_jobs("canned,Hero,Bishop");
        assert_eq!(expanded, ["Hayato", "Hero", "Bishop"]);
        assert_eq!(expand_jobs("all").len(), JOBS.len());
    }

    #[test]
    fn unknown_jobs_are_skipped() {
        let args = Args {
            jobs: "Hero,Beginner".to_string(),
            ..base_args()
        };
        let audits = run_audits(&args).unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].job, "Hero");
    }

    #[test]
    fn import_replaces_job_audits() {
        let file = temp_path("import.json");
        std::fs::write(&file, r#"{"job":"Hero","sequence":[{"nodeId":"m1","targetLevel":1}]}"#)
            .unwrap();
        let args = Args {
            import: Some(file),
            job: Some("Hero".to_string()),
            ..base_args()
        };
        let audits = run_audits(&args).unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].steps, 1);
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = temp_path("report.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("No sequences audited"));
    }

    #[test]
    fn write_reports_emits_json_for_results() {
        let temp = temp_path("report.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        let audits = run_audits(&args).unwrap();
        write_reports(&args, &audits, Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("\"final_levels\""));
    }

    #[test]
    fn maybe_list_jobs_writes_output() {
        let temp = temp_path("jobs.txt");
        let args = Args {
            list_jobs: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_jobs(&args).unwrap());
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Supported jobs"));
        assert!(content.contains("canned sequence"));
    }

    #[test]
    fn maybe_list_jobs_returns_false_when_disabled() {
        assert!(!maybe_list_jobs(&base_args()).unwrap());
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::new(None).unwrap();
        target.write_all(b"ok").unwrap();
        target.flush().unwrap();
    }
}
