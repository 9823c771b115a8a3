use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::audit::SequenceAudit;

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    audits: &[SequenceAudit],
    verbose: bool,
    total_duration: Duration,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Sequence Audit Summary".bright_cyan().bold())?;
    writeln!(writer, "{}", "=========================".cyan())?;

    let total = audits.len();
    let passed = audits.iter().filter(|a| a.passed).count();
    let failed = total - passed;

    writeln!(writer, "Total sequences: {total}")?;
    writeln!(writer, "Passed: {}", passed.to_string().green())?;
    writeln!(writer, "Failed: {}", failed.to_string().red())?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    writeln!(writer)?;

    for audit in audits {
        let status = if audit.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            writer,
            "{status} {} ({})",
            audit.job.bold(),
            audit.source.label()
        )?;
        writeln!(writer, "   Steps: {}", audit.steps)?;

        if !audit.errors.is_empty() {
            writeln!(writer, "   Errors:")?;
            for error in &audit.errors {
                writeln!(writer, "     • {}", error.red())?;
            }
        }
        if !audit.warnings.is_empty() {
            writeln!(writer, "   Warnings:")?;
            for warning in &audit.warnings {
                writeln!(writer, "     • {}", warning.yellow())?;
            }
        }
        if verbose && !audit.final_levels.is_empty() {
            writeln!(writer, "   Final levels:")?;
            for (node, level) in &audit.final_levels {
                writeln!(writer, "     {node:10} Lv.{level}")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    writer: &mut W,
    audits: &[SequenceAudit],
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(audits)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    writer: &mut W,
    audits: &[SequenceAudit],
) -> Result<()> {
    writeln!(writer, "# Hexa Sequence Audit\n")?;
    writeln!(
        writer,
        "_Generated {}_\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    let total = audits.len();
    let passed = audits.iter().filter(|a| a.passed).count();

    writeln!(writer, "## Summary\n")?;
    writeln!(writer, "- **Total sequences**: {total}")?;
    writeln!(writer, "- **Passed**: {passed}")?;
    writeln!(writer, "- **Failed**: {}\n", total - passed)?;

    writeln!(writer, "## Detailed Results\n")?;
    for audit in audits {
        let status = if audit.passed { "✅" } else { "❌" };
        writeln!(
            writer,
            "### {status} {} ({})\n",
            audit.job,
            audit.source.label()
        )?;
        writeln!(writer, "- **Steps**: {}", audit.steps)?;
        if !audit.errors.is_empty() {
            writeln!(writer, "- **Errors**:")?;
            for error in &audit.errors {
                writeln!(writer, "  - {error}")?;
            }
        }
        if !audit.warnings.is_empty() {
            writeln!(writer, "- **Warnings**:")?;
            for warning in &audit.warnings {
                writeln!(writer, "  - {warning}")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
