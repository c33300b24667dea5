use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow, bail};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};
use solar_orientation::config::{FrameKind, load_plan};
use solar_orientation::export::{self, OrientationRecord};
use solar_orientation::primitives::constants::{DAYS_PER_JULIAN_MILLENNIUM, J2000_JD};
use solar_orientation::primitives::time::{julian_millennia_since_j2000, unix_seconds_to_jd};
use solar_orientation::{Body, orientation, orientation_raw};

/// Refuse plans that would produce more rows than this.
const MAX_SAMPLES: usize = 1_000_000;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Pole and prime-meridian orientation from the WGCCRE reports"
)]
struct Cli {
    /// Body name, case-sensitive (Sol, Mercury, Venus, Earth, Moon, Mars, Jupiter, Saturn, Uranus, Neptune)
    #[arg(long, required_unless_present_any = ["plan", "list"], conflicts_with = "plan")]
    body: Option<String>,

    /// Elapsed Julian millennia since J2000.0
    #[arg(long, allow_negative_numbers = true, conflicts_with_all = ["jd", "date"])]
    millennia: Option<f64>,

    /// Epoch as a Julian Date
    #[arg(long, conflicts_with = "date")]
    jd: Option<f64>,

    /// Epoch as a UTC calendar date, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS
    #[arg(long)]
    date: Option<String>,

    /// Sampling plan (YAML, or TOML by extension) listing bodies and an epoch grid
    #[arg(long, conflicts_with_all = ["millennia", "jd", "date"])]
    plan: Option<PathBuf>,

    /// Output frame; defaults to the plan's frame, or vsop87 for single queries
    #[arg(long, value_enum)]
    frame: Option<FrameArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// List supported bodies and their source report
    #[arg(long, default_value_t = false)]
    list: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FrameArg {
    Raw,
    Vsop87,
}

impl From<FrameArg> for FrameKind {
    fn from(value: FrameArg) -> Self {
        match value {
            FrameArg::Raw => FrameKind::Raw,
            FrameArg::Vsop87 => FrameKind::Vsop87,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        let mut writer = export::writer_for_path(&cli.output)?;
        for body in Body::ALL {
            let report = body.report();
            writeln!(
                writer,
                "{:<8} {:<12} {}",
                body.name(),
                report.to_string(),
                report.reference_url()
            )?;
        }
        writer.flush()?;
        return Ok(());
    }

    let records = if let Some(plan_path) = &cli.plan {
        sample_plan(plan_path, cli.frame.map(FrameKind::from))?
    } else {
        let name = cli
            .body
            .as_deref()
            .ok_or_else(|| anyhow!("--body is required without --plan"))?;
        let epoch = resolve_epoch(&cli)?;
        let frame = cli.frame.map(FrameKind::from).unwrap_or_default();
        vec![sample_by_name(name, epoch, frame)?]
    };

    let writer = export::writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    match cli.format {
        OutputFormat::Table => write_table(writer, &records)?,
        OutputFormat::Csv => export::csv::write_records(writer, &records)?,
        OutputFormat::Json => export::json::write_records(writer, &records)?,
    }

    if cli.output != Path::new("-") {
        eprintln!(
            "[info] wrote {} samples to {}",
            records.len(),
            cli.output.display()
        );
    }
    Ok(())
}

/// Requested evaluation time, kept in the unit the caller gave it in.
#[derive(Copy, Clone, Debug)]
enum Epoch {
    Millennia(f64),
    JulianDate(f64),
}

impl Epoch {
    fn millennia(self) -> f64 {
        match self {
            Self::Millennia(t) => t,
            Self::JulianDate(jd) => julian_millennia_since_j2000(jd),
        }
    }

    fn julian_date(self) -> f64 {
        match self {
            Self::Millennia(t) => J2000_JD + t * DAYS_PER_JULIAN_MILLENNIUM,
            Self::JulianDate(jd) => jd,
        }
    }
}

fn resolve_epoch(cli: &Cli) -> anyhow::Result<Epoch> {
    if let Some(t) = cli.millennia {
        return Ok(Epoch::Millennia(t));
    }
    if let Some(jd) = cli.jd {
        return Ok(Epoch::JulianDate(jd));
    }
    if let Some(date) = &cli.date {
        return parse_utc_date(date).map(Epoch::JulianDate);
    }
    Ok(Epoch::Millennia(0.0))
}

fn parse_utc_date(text: &str) -> anyhow::Result<f64> {
    let datetime = match NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        Ok(datetime) => datetime,
        Err(_) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date `{text}` (expected YYYY-MM-DD[THH:MM:SS])"))?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("invalid date `{text}`"))?,
    };
    Ok(unix_seconds_to_jd(datetime.and_utc().timestamp() as f64))
}

fn sample_plan(
    path: &Path,
    frame_override: Option<FrameKind>,
) -> anyhow::Result<Vec<OrientationRecord>> {
    let plan = load_plan(path).with_context(|| format!("loading plan {}", path.display()))?;
    let frame = frame_override.unwrap_or(plan.frame);

    let bodies = plan
        .bodies
        .iter()
        .map(|name| {
            name.parse::<Body>()
                .with_context(|| format!("in plan {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let epochs = plan.epoch_count();
    let total = epochs.saturating_mul(bodies.len());
    if total > MAX_SAMPLES {
        eprintln!("[warn] plan would produce {total} samples (limit {MAX_SAMPLES})");
        bail!("plan {} is too large; widen step_days", path.display());
    }
    eprintln!(
        "[info] plan {}: {} bodies x {} epochs, frame {}",
        path.display(),
        bodies.len(),
        epochs,
        frame.label()
    );

    let dates = plan.julian_dates();
    let mut records = Vec::with_capacity(total);
    for body in bodies {
        for &jd in &dates {
            records.push(sample_by_name(body.name(), Epoch::JulianDate(jd), frame)?);
        }
    }
    Ok(records)
}

fn sample_by_name(
    name: &str,
    epoch: Epoch,
    frame: FrameKind,
) -> anyhow::Result<OrientationRecord> {
    let t = epoch.millennia();
    let angles = match frame {
        FrameKind::Raw => orientation_raw(name, t)?.to_array(),
        FrameKind::Vsop87 => orientation(name, t)?.to_array(),
    };
    Ok(OrientationRecord {
        body: name.to_string(),
        julian_date: epoch.julian_date(),
        millennia: t,
        frame: frame.label().to_string(),
        angle_1_deg: angles[0],
        angle_2_deg: angles[1],
        angle_3_deg: angles[2],
    })
}

fn write_table(mut writer: Box<dyn Write>, records: &[OrientationRecord]) -> anyhow::Result<()> {
    writeln!(
        writer,
        "{:<8} {:>15} {:>13} {:<6} {:>14} {:>14} {:>14}",
        "body", "jd", "t [kyr]", "frame", "angle_1", "angle_2", "angle_3"
    )?;
    for record in records {
        writeln!(
            writer,
            "{:<8} {:>15.6} {:>13.9} {:<6} {:>14.9} {:>14.9} {:>14.9}",
            record.body,
            record.julian_date,
            record.millennia,
            record.frame,
            record.angle_1_deg,
            record.angle_2_deg,
            record.angle_3_deg
        )?;
    }
    writer.flush()?;
    Ok(())
}
