//! Console rendering of progress and the finished report.
//!
//! Everything writes to a caller-supplied `Write` so the output can be
//! checked in tests. Logging goes to stderr separately.
use diskaudit_core::model::size::{bytes_to_gb, format_count, MIB};
use diskaudit_core::model::Category;
use diskaudit_core::scanner::{AuditProgress, Pass};
use diskaudit_core::{AuditConfig, AuditReport};
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 52;

fn min_size_mb(report: &AuditReport) -> u64 {
    report.min_file_size / MIB
}

pub fn banner(out: &mut impl Write, root: &Path) -> io::Result<()> {
    writeln!(out, "Storage Audit: {}", root.display())?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)
}

/// Print one progress message. Only pass 1 is shown live; pass 2 results
/// are printed with the report.
pub fn progress(out: &mut impl Write, msg: &AuditProgress) -> io::Result<()> {
    match msg {
        AuditProgress::PassStarted {
            pass: Pass::FolderSizes,
            ..
        } => writeln!(out, "=== PASS 1: Largest Top-Level Folders (Depth=1) ==="),
        AuditProgress::FolderSized { path, size_bytes } => writeln!(
            out,
            "Scanning {}... {:.2} GB",
            path.display(),
            bytes_to_gb(*size_bytes)
        ),
        _ => Ok(()),
    }
}

pub fn report(out: &mut impl Write, report: &AuditReport, config: &AuditConfig) -> io::Result<()> {
    folder_table(out, report)?;
    large_files(out, report, config)?;
    summary(out, report)?;
    next_steps(out)
}

fn folder_table(out: &mut impl Write, report: &AuditReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:<40} {:>10}", "Folder", "Size_GB")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for folder in &report.folders {
        writeln!(
            out,
            "{:<40} {:>10.2}",
            folder.path.display().to_string(),
            bytes_to_gb(folder.size_bytes)
        )?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<40} {:>10.2} GB",
        "Total scanned:",
        bytes_to_gb(report.total_scanned)
    )?;
    writeln!(out)
}

fn large_files(out: &mut impl Write, report: &AuditReport, config: &AuditConfig) -> io::Result<()> {
    let mb = min_size_mb(report);
    writeln!(
        out,
        "=== PASS 2: Large Files in Top {} Folders ({}+ MB, Depth={}) ===",
        config.top_folders, mb, config.file_depth
    )?;
    writeln!(out)?;

    for scan in &report.scanned {
        let folder = scan.folder.path.display();
        writeln!(out, "Scanning large files in: {folder}")?;
        if scan.files.is_empty() {
            writeln!(out, "No files ≥{mb} MB found in {folder}")?;
            writeln!(out)?;
            continue;
        }

        writeln!(out)?;
        writeln!(out, "Folder: {folder}")?;
        for (category, files) in scan.by_category() {
            writeln!(out)?;
            writeln!(out, "Category: {} ({})", category, category.guidance())?;
            for file in files {
                writeln!(
                    out,
                    "{:>5.2} GB   {}",
                    bytes_to_gb(file.size_bytes),
                    file.path.display()
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn summary(out: &mut impl Write, report: &AuditReport) -> io::Result<()> {
    writeln!(out, "=== SUMMARY BY CATEGORY ===")?;
    for (category, stats) in report.totals.non_empty() {
        writeln!(
            out,
            "{:<18} : {:>7.2} GB  ({} files)",
            category.label(),
            bytes_to_gb(stats.total_size),
            format_count(stats.file_count)
        )?;
    }
    writeln!(out)
}

fn next_steps(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Next Steps:")?;
    writeln!(
        out,
        "    1. Start by deleting {} files listed above.",
        Category::LikelyUseless
    )?;
    writeln!(
        out,
        "    2. Review {} files, delete only if backed up.",
        Category::Media
    )?;
    writeln!(out, "    3. Avoid anything in {}.", Category::SystemCritical)?;
    writeln!(out)
}

pub fn csv_exported(out: &mut impl Write, path: &Path, rows: usize) -> io::Result<()> {
    writeln!(out, "Full report exported to: {}", path.display())?;
    writeln!(out, "Total files in report: {}", format_count(rows as u64))
}

pub fn nothing_to_export(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "No large files found to export.")
}

pub fn interrupted(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Audit interrupted by user.")
}

pub fn json_exported(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "JSON report written to: {}", path.display())
}

pub fn finished(out: &mut impl Write, report: &AuditReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(
        out,
        "Audit completed in {:.1}s.",
        report.duration_ms as f64 / 1000.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use diskaudit_core::audit::FolderScan;
    use diskaudit_core::model::size::GIB;
    use diskaudit_core::model::{CategoryTotals, DirectorySizeEntry, LargeFileEntry};
    use std::path::PathBuf;

    fn folder(path: &str, size: u64) -> DirectorySizeEntry {
        DirectorySizeEntry {
            path: PathBuf::from(path),
            size_bytes: size,
        }
    }

    fn file(path: &str, size: u64, category: Category) -> LargeFileEntry {
        LargeFileEntry {
            path: PathBuf::from(path),
            size_bytes: size,
            category,
        }
    }

    fn sample() -> AuditReport {
        let scanned = vec![
            FolderScan::new(
                folder("/vol/Users", 12 * GIB),
                vec![
                    file("/vol/Users/x/Downloads/a.bin", 2 * GIB, Category::LikelyUseless),
                    file("/vol/Users/x/b.mkv", GIB, Category::Media),
                    file("/vol/Users/x/c.mp4", 3 * GIB, Category::Media),
                ],
            ),
            FolderScan::new(folder("/vol/Games", 5 * GIB), Vec::new()),
        ];
        let totals = CategoryTotals::from_entries(scanned.iter().flat_map(|s| s.files.iter()));
        AuditReport {
            root: PathBuf::from("/vol"),
            generated_at: Local::now(),
            duration_ms: 1500,
            min_file_size: 50 * MIB,
            folders: vec![folder("/vol/Users", 12 * GIB), folder("/vol/Games", 5 * GIB)],
            total_scanned: 17 * GIB,
            scanned,
            totals,
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn progress_prints_folder_sizes_only() {
        let sized = AuditProgress::FolderSized {
            path: PathBuf::from("/vol/Users"),
            size_bytes: GIB + GIB / 2,
        };
        assert_eq!(
            render(|out| progress(out, &sized)),
            "Scanning /vol/Users... 1.50 GB\n"
        );

        let scanned = AuditProgress::LargeFilesScanned {
            folder: PathBuf::from("/vol/Users"),
            found: 3,
        };
        assert_eq!(render(|out| progress(out, &scanned)), "");
    }

    #[test]
    fn report_lists_folders_categories_and_totals() {
        let r = sample();
        let config = AuditConfig::new("/vol");
        let text = render(|out| report(out, &r, &config));

        assert!(text.contains("Total scanned:"));
        assert!(text.contains("17.00 GB"));
        assert!(text.contains("=== PASS 2: Large Files in Top 3 Folders (50+ MB, Depth=3) ==="));
        assert!(text.contains("Category: LIKELY_USELESS (Safe to Delete Manually)"));
        assert!(text.contains("No files ≥50 MB found in /vol/Games"));

        // Media files are listed largest first.
        let big = text.find("c.mp4").unwrap();
        let small = text.find("b.mkv").unwrap();
        assert!(big < small);

        assert!(text.contains("LIKELY_USELESS     :    2.00 GB  (1 files)"));
        assert!(text.contains("MEDIA              :    4.00 GB  (2 files)"));
        assert!(!text.contains("SYSTEM_CRITICAL    :"));
        assert!(text.contains("Next Steps:"));
    }

    #[test]
    fn threshold_text_follows_the_report() {
        let mut r = sample();
        r.min_file_size = 100 * MIB;
        let config = AuditConfig::new("/vol");
        let text = render(|out| report(out, &r, &config));

        assert!(text.contains("(100+ MB, Depth=3)"));
        assert!(text.contains("No files ≥100 MB found in /vol/Games"));
        assert!(!text.contains("50 MB"));
    }

    #[test]
    fn export_notices() {
        assert_eq!(
            render(|out| csv_exported(out, Path::new("r.csv"), 3)),
            "Full report exported to: r.csv\nTotal files in report: 3\n"
        );
        assert!(render(|out| csv_exported(out, Path::new("r.csv"), 12_345))
            .ends_with("Total files in report: 12,345\n"));
        assert_eq!(
            render(|out| interrupted(out)),
            "\nAudit interrupted by user.\n"
        );
        assert_eq!(
            render(|out| nothing_to_export(out)),
            "No large files found to export.\n"
        );
    }
}
