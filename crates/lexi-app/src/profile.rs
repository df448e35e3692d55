use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use lexi_config::Config;
use serde::{Deserialize, Serialize};

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profile files under `<root>/profiles/<name>.json`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `LEXI_CONFIG_DIR`, then `$XDG_CONFIG_HOME/lexi`, then `~/.config/lexi`
    pub fn from_env() -> Self {
        let root = env::var_os("LEXI_CONFIG_DIR")
            .map(PathBuf::from)
            .or_else(|| env::var_os("XDG_CONFIG_HOME").map(|dir| PathBuf::from(dir).join("lexi")))
            .or_else(|| {
                env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("lexi"))
            })
            .unwrap_or_else(|| PathBuf::from(".lexi"));

        Self::new(root)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Create the profiles folder and a main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())?;

        let main_profile = self.profile_path("main");
        if !main_profile.exists() {
            write_profile(
                &main_profile,
                &Profile {
                    name: "main".into(),
                    value: Config::default(),
                },
            )?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a profile by name, falling back to main, then to defaults
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);
        if profile_file.exists() {
            return Ok(read_profile(&profile_file)?.value);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.profile_path("main");
        if main_file.exists() {
            Ok(read_profile(&main_file)?.value)
        } else {
            Ok(Config::default())
        }
    }

    /// Add a new profile cloned from main
    pub fn add_from_main(&self, new_name: &str) -> anyhow::Result<PathBuf> {
        self.init()?;
        let profile = Profile {
            name: new_name.into(),
            value: self.load("main")?,
        };

        let file = self.profile_path(new_name);
        write_profile(&file, &profile)?;
        tracing::info!("Created new profile: {new_name}");
        Ok(file)
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Profile> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn write_profile(path: &Path, profile: &Profile) -> anyhow::Result<()> {
    fs::write(path, serde_json::to_string_pretty(profile)?)?;
    Ok(())
}
