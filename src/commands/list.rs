//! # List Command Implementation
//!
//! Scans `<apt-config>/sources.list.d` and prints every registered PPA,
//! either one short handle per line or as a JSON array of records. This
//! command never modifies any file.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use ppa_utils::config::AptConfig;
use ppa_utils::defaults::DEFAULT_APT_CONFIG;
use ppa_utils::registry;
use ppa_utils::repository::Repository;
use ppa_utils::suggestions;

/// List registered PPAs
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Root of the APT configuration.
    #[arg(long, value_name = "DIR", env = "PPA_APT_CONFIG", default_value = DEFAULT_APT_CONFIG)]
    pub apt_config: PathBuf,
}

/// Output formats for `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One ppa:<owner>/<name> per line
    #[default]
    Text,
    /// JSON array of repository records
    Json,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs) -> Result<()> {
    let config = AptConfig::new(&args.apt_config);
    let repos = registry::list(&config).map_err(|e| suggestions::explain(e, &args.apt_config))?;

    print!("{}", render(&repos, args.format)?);
    Ok(())
}

fn render(repos: &[Repository], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(repos
            .iter()
            .map(|repo| format!("{}\n", repo.short_handle()))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", registry::to_json(repos)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools() -> Repository {
        Repository {
            distro: "noble".to_string(),
            source_file: PathBuf::from("/etc/apt/sources.list.d/tools.list"),
            keyring_file: "/etc/apt/keyrings/tools.gpg".to_string(),
            ..Repository::from_short_handle("ppa:alice/tools").unwrap()
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render(&[tools()], OutputFormat::Text).unwrap(),
            "ppa:alice/tools\n"
        );
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn test_render_json_fields() {
        let json = render(&[tools()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["owner"], "alice");
        assert_eq!(value[0]["source_file"], "/etc/apt/sources.list.d/tools.list");
        assert_eq!(value[0]["key_fingerprint"], "");
    }
}
