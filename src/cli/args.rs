//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Public Yandex Disk folder downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "yadisk-downloader",
    version,
    about = "Download every file of a public Yandex Disk folder",
    long_about = "Lists a public Yandex Disk folder, resolves a direct download link for each file\n\
                  and downloads all of them concurrently into a local directory."
)]
pub struct Args {
    /// Public URL of the shared folder.
    #[arg(short, long, env = "YADISK_TARGET_URL")]
    pub url: Option<String>,

    /// Directory to write files to (must exist).
    #[arg(short = 'd', long = "directory")]
    pub destination_folder: Option<PathBuf>,

    /// Maximum number of files to list.
    #[arg(short = 'n', long = "limit")]
    pub number_of_files: Option<u32>,

    /// Concurrent download link requests.
    #[arg(long)]
    pub resolve_workers: Option<usize>,

    /// Concurrent file downloads.
    #[arg(long)]
    pub transfer_workers: Option<usize>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(url) = self.url {
            config.target.target_url = url;
        }

        if let Some(limit) = self.number_of_files {
            config.target.number_of_files = limit;
        }

        if let Some(dir) = self.destination_folder {
            config.options.destination_folder = Some(dir);
        }

        if let Some(workers) = self.resolve_workers {
            config.options.resolve_workers = workers;
        }

        if let Some(workers) = self.transfer_workers {
            config.options.transfer_workers = workers;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_only_given_values() {
        let args = Args::parse_from([
            "yadisk-downloader",
            "--url",
            "https://disk.yandex.ru/d/xyz",
            "-n",
            "3",
            "--transfer-workers",
            "2",
            "--quiet",
        ]);

        let mut config = Config::default();
        config.options.resolve_workers = 5;
        args.merge_into_config(&mut config);

        assert_eq!(config.target.target_url, "https://disk.yandex.ru/d/xyz");
        assert_eq!(config.target.number_of_files, 3);
        assert_eq!(config.options.resolve_workers, 5);
        assert_eq!(config.options.transfer_workers, 2);
        assert!(!config.options.show_progress);
        assert!(config.options.destination_folder.is_none());
    }

    #[test]
    fn test_default_config_path() {
        let args = Args::parse_from(["yadisk-downloader"]);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(!args.debug);
    }
}
