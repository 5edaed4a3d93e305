use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use near_bind_rpc::Network;

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    network: Option<String>,
}

/// Network resolution order: CLI flag, then `~/.near-bind.toml`, then the
/// testnet default.
pub fn resolve_network(cli_flag: Option<String>) -> Result<Network> {
    if let Some(net_str) = cli_flag {
        return net_str.parse::<Network>().map_err(Into::into);
    }

    if let Some(config_path) = config_file_path() {
        if config_path.exists() {
            if let Some(network) = network_from_file(&config_path)? {
                return Ok(network);
            }
        }
    }

    Ok(Network::Testnet)
}

fn network_from_file(path: &Path) -> Result<Option<Network>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {:?}", path))?;
    let config: ConfigFile =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    config
        .network
        .map(|s| s.parse::<Network>().map_err(Into::into))
        .transpose()
}

fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|mut p| {
        p.push(".near-bind.toml");
        p
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn flag_takes_precedence() {
        let network = resolve_network(Some("mainnet".into())).unwrap();
        assert_eq!(network, Network::Mainnet);
    }

    #[test]
    fn invalid_flag_is_an_error() {
        assert!(resolve_network(Some("devnet".into())).is_err());
    }

    #[test]
    fn config_file_supplies_the_network() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "network = \"mainnet\"").unwrap();
        let network = network_from_file(file.path()).unwrap();
        assert_eq!(network, Some(Network::Mainnet));
    }

    #[test]
    fn config_file_without_network_falls_through() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();
        assert_eq!(network_from_file(file.path()).unwrap(), None);
    }

    #[test]
    fn custom_url_config_is_accepted() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "network = \"http://localhost:3030\"").unwrap();
        let network = network_from_file(file.path()).unwrap();
        assert_eq!(
            network,
            Some(Network::Custom("http://localhost:3030".into()))
        );
    }
}
