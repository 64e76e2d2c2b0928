//! Command-line arguments.
use clap::{Parser, ValueEnum};
use diskaudit_core::analysis::ClassificationRules;
use diskaudit_core::audit::config::{
    default_root, DEFAULT_FILE_DEPTH, DEFAULT_FOLDER_DEPTH, DEFAULT_MIN_FILE_SIZE,
    DEFAULT_TOP_FOLDERS,
};
use diskaudit_core::model::size::MIB;
use diskaudit_core::AuditConfig;
use std::path::PathBuf;

/// Separator convention the categorisation rules are matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathStyle {
    /// `C:\Users\...`
    Windows,
    /// `/home/...`
    Posix,
}

impl From<PathStyle> for ClassificationRules {
    fn from(style: PathStyle) -> Self {
        match style {
            PathStyle::Windows => ClassificationRules::windows(),
            PathStyle::Posix => ClassificationRules::posix(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "diskaudit", version)]
#[command(about = "Rank the largest folders on a volume and classify their large files for cleanup")]
pub struct Cli {
    /// Directory whose immediate subfolders are ranked (default: the system volume root)
    pub root: Option<PathBuf>,

    /// Directory levels counted when sizing each subfolder
    #[arg(long, default_value_t = DEFAULT_FOLDER_DEPTH)]
    pub folder_depth: usize,

    /// Number of largest subfolders searched for large files
    #[arg(long, default_value_t = DEFAULT_TOP_FOLDERS)]
    pub top: usize,

    /// Smallest file reported, in MB
    #[arg(long, default_value_t = DEFAULT_MIN_FILE_SIZE / MIB)]
    pub min_size_mb: u64,

    /// Directory levels searched for large files
    #[arg(long, default_value_t = DEFAULT_FILE_DEPTH)]
    pub file_depth: usize,

    /// Path convention for categorisation (default: this platform's)
    #[arg(long, value_enum)]
    pub path_style: Option<PathStyle>,

    /// Worker threads (0 = one per logical CPU)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Where to write the CSV report
    #[arg(long, default_value = "disk_audit_report.csv")]
    pub csv: PathBuf,

    /// Skip the CSV report
    #[arg(long, conflicts_with = "csv")]
    pub no_csv: bool,

    /// Also write the full report as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Log skipped entries and pass timings to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn audit_config(&self) -> AuditConfig {
        let mut config = AuditConfig::new(self.root.clone().unwrap_or_else(default_root));
        config.folder_depth = self.folder_depth;
        config.top_folders = self.top;
        config.min_file_size = self.min_size_mb.saturating_mul(MIB);
        config.file_depth = self.file_depth;
        config.threads = self.threads;
        if let Some(style) = self.path_style {
            config.rules = style.into();
        }
        config
    }

    /// CSV destination, unless disabled.
    pub fn csv_path(&self) -> Option<&PathBuf> {
        (!self.no_csv).then_some(&self.csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_map_onto_audit_config() {
        let cli = Cli::try_parse_from(["diskaudit", "/data"]).unwrap();
        let config = cli.audit_config();
        assert_eq!(config.root, PathBuf::from("/data"));
        assert_eq!(config.folder_depth, 10);
        assert_eq!(config.top_folders, 3);
        assert_eq!(config.min_file_size, 50 * MIB);
        assert_eq!(config.file_depth, 3);
        assert_eq!(config.threads, 0);
        assert_eq!(cli.csv_path(), Some(&PathBuf::from("disk_audit_report.csv")));
        assert!(cli.json.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "diskaudit",
            "/data",
            "--folder-depth",
            "4",
            "--top",
            "5",
            "--min-size-mb",
            "100",
            "--file-depth",
            "2",
            "--path-style",
            "windows",
            "--threads",
            "8",
            "--no-csv",
            "--json",
            "out.json",
        ])
        .unwrap();
        let config = cli.audit_config();
        assert_eq!(config.folder_depth, 4);
        assert_eq!(config.top_folders, 5);
        assert_eq!(config.min_file_size, 100 * MIB);
        assert_eq!(config.file_depth, 2);
        assert_eq!(config.threads, 8);
        assert_eq!(config.rules, ClassificationRules::windows());
        assert_eq!(cli.csv_path(), None);
        assert_eq!(cli.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn missing_root_uses_volume_root() {
        let cli = Cli::try_parse_from(["diskaudit"]).unwrap();
        assert_eq!(cli.audit_config().root, default_root());
    }

    #[test]
    fn no_csv_conflicts_with_explicit_csv() {
        assert!(Cli::try_parse_from(["diskaudit", "--csv", "a.csv", "--no-csv"]).is_err());
    }

    #[test]
    fn unknown_path_style_is_rejected() {
        assert!(Cli::try_parse_from(["diskaudit", "--path-style", "mac"]).is_err());
    }
}
