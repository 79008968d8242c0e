use directories::ProjectDirs;
use std::path::PathBuf;

pub fn data_root() -> PathBuf {
    if let Some(pd) = ProjectDirs::from("com", "repstats", "RepStats") {
        pd.data_dir().to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Where the host's card export is looked for when no path is given.
pub fn default_export_file() -> PathBuf {
    data_root().join("cards.json")
}
