use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".action-menu.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. `.action-menu.toml` in the current working directory
/// 2. `.action-menu.toml` in the home directory
/// 3. `config.toml` in the application config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];

    if let Some(home_config) = get_home_config_path() {
        paths.push(home_config);
    }

    match crate::paths::app_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => log::debug!("No app config directory: {}", e),
    }

    paths
}

/// Returns ~/.action-menu.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_paths_start_with_local_file() {
        let paths = candidate_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE));
        assert!(paths
            .iter()
            .skip(1)
            .all(|p| p.ends_with(CONFIG_FILE) || p.ends_with("config.toml")));
    }
}
