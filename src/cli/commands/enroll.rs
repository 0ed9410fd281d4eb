//! Enroll command handler

use std::io;
use std::path::{Path, PathBuf};
use uni_admissions::config::Config;
use uni_admissions::core::models::University;
use uni_admissions::core::parser::{parse_applicants_file, read_capacity};
use uni_admissions::core::roster::{AdmissionSummary, RosterExporter, TextRosterExporter};
use uni_admissions::core::AdmissionError;
use uni_admissions::{error, info, verbose};

/// Run the admission pass end to end and exit non-zero on any failure.
///
/// # Arguments
/// * `input` - Applicants file; falls back to config `input_file`
/// * `output` - Roster directory; falls back to config `out_dir`
/// * `capacity` - Seats per department; read from stdin when `None`
/// * `config` - Loaded configuration with CLI overrides applied
pub fn run(
    input: Option<&Path>,
    output: Option<&Path>,
    capacity: Option<usize>,
    config: &Config,
) {
    let input_file = input.map_or_else(|| PathBuf::from(&config.admission.input_file), Path::to_path_buf);
    let out_dir = output.map_or_else(|| PathBuf::from(&config.paths.out_dir), Path::to_path_buf);

    match enroll(&input_file, &out_dir, capacity) {
        Ok(summary) => print_summary(&summary, &out_dir),
        Err(err) => {
            error!("Admission run failed: {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn enroll(
    input_file: &Path,
    out_dir: &Path,
    capacity: Option<usize>,
) -> Result<AdmissionSummary, AdmissionError> {
    let capacity = match capacity {
        Some(n) => n,
        None => read_capacity(io::stdin().lock())?,
    };
    info!("Department capacity: {capacity}");

    let pool = parse_applicants_file(input_file)?;
    info!(
        "Loaded {} applicants from {}",
        pool.len(),
        input_file.display()
    );

    let mut university = University::new(capacity);
    let unplaced = university.enroll(pool);

    let written = TextRosterExporter.export(&university, out_dir)?;
    for path in &written {
        info!("Roster written: {}", path.display());
    }

    Ok(AdmissionSummary::new(&university, unplaced.len()))
}

fn print_summary(summary: &AdmissionSummary, out_dir: &Path) {
    verbose!("✓ Rosters written to: {}", out_dir.display());
    verbose!("\n=== Admission Summary (capacity {}) ===", summary.capacity);
    for (department, count) in &summary.filled {
        verbose!("{department:<12} {count}/{}", summary.capacity);
    }
    verbose!("Admitted: {}", summary.admitted());
    verbose!("Unplaced: {}", summary.unplaced);
}
