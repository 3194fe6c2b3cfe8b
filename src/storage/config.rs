//! JSON settings file.
//!
//! Stored at `%APPDATA%/Starfield/settings.json`. Read once at startup and
//! written when the settings form is confirmed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::model::constants::*;
use crate::model::{Rgb, Settings};

const APP_DIR: &str = "Starfield";
const FILE_NAME: &str = "settings.json";

/// On-disk layout. Missing keys take their defaults. Values are wide
/// integers so out-of-range numbers clamp instead of failing the parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
struct SettingsFile {
    star_count: i64,
    speed_percent: i64,
    twinkle_percent: i64,
    color_r: i64,
    color_g: i64,
    color_b: i64,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SettingsFile {
    fn from(s: &Settings) -> Self {
        Self {
            star_count: s.star_count.into(),
            speed_percent: s.speed_pct.into(),
            twinkle_percent: s.twinkle_pct.into(),
            color_r: s.color.r.into(),
            color_g: s.color.g.into(),
            color_b: s.color.b.into(),
        }
    }
}

fn clamp_to(v: i64, min: u32, max: u32) -> u32 {
    v.clamp(min.into(), max.into()) as u32
}

fn channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

impl SettingsFile {
    fn into_settings(self) -> Settings {
        Settings {
            star_count: clamp_to(self.star_count, MIN_STAR_COUNT, MAX_STAR_COUNT),
            speed_pct: clamp_to(self.speed_percent, MIN_SPEED_PCT, MAX_SPEED_PCT),
            twinkle_pct: clamp_to(self.twinkle_percent, MIN_TWINKLE_PCT, MAX_TWINKLE_PCT),
            color: Rgb::new(channel(self.color_r), channel(self.color_g), channel(self.color_b)),
        }
        .validated()
    }
}

/// Settings persisted at one path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user default location.
    pub fn open_default() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings. A missing file gives defaults. A malformed one is
    /// logged and also gives defaults.
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                info!("no settings file at {}, using defaults", self.path.display());
                Settings::default()
            }
            Err(e) => {
                warn!("ignoring settings file: {}", e);
                Settings::default()
            }
        }
    }

    /// `Ok(None)` when there is no file yet.
    pub fn try_load(&self) -> Result<Option<Settings>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(error::Error::io(&self.path, e)),
        };
        let file: SettingsFile = serde_json::from_str(&contents)?;
        Ok(Some(file.into_settings()))
    }

    /// Write `settings` through a sibling temp file renamed over the target.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| error::Error::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(&SettingsFile::from(settings))?;
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut f = fs::File::create(&tmp).map_err(|e| error::Error::io(&tmp, e))?;
            f.write_all(json.as_bytes())
                .and_then(|_| f.sync_all())
                .map_err(|e| error::Error::io(&tmp, e))?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(error::Error::io(&self.path, e));
        }
        info!("settings saved to {}", self.path.display());
        Ok(())
    }
}

/// `%APPDATA%/Starfield/settings.json`, or the XDG config dir elsewhere.
pub fn default_path() -> PathBuf {
    config_root().join(APP_DIR).join(FILE_NAME)
}

fn config_root() -> PathBuf {
    let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty());
    if let Some(appdata) = var("APPDATA") {
        return PathBuf::from(appdata);
    }
    if let Some(xdg) = var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg);
    }
    if let Some(home) = var("HOME") {
        return PathBuf::from(home).join(".config");
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "starfield-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch("missing");
        let store = ConfigStore::new(dir.join(FILE_NAME));
        assert_eq!(store.try_load().unwrap(), None);
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let file: SettingsFile = serde_json::from_str(r#"{ "star_count": 1200 }"#).unwrap();
        let s = file.into_settings();
        assert_eq!(s.star_count, 1200);
        assert_eq!(s.speed_pct, DEFAULT_SPEED_PCT);
        assert_eq!(s.color, Rgb::default());
    }

    #[test]
    fn loaded_values_are_clamped() {
        let file: SettingsFile = serde_json::from_str(
            r#"{ "star_count": 1, "speed_percent": 9000, "twinkle_percent": -4, "color_r": 400 }"#,
        )
        .unwrap();
        let s = file.into_settings();
        assert_eq!(s.star_count, MIN_STAR_COUNT);
        assert_eq!(s.speed_pct, MAX_SPEED_PCT);
        assert_eq!(s.twinkle_pct, MIN_TWINKLE_PCT);
        assert_eq!(s.color.r, 255);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = scratch("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        let store = ConfigStore::new(&path);
        assert!(store.try_load().is_err());
        assert_eq!(store.load(), Settings::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = scratch("roundtrip");
        let store = ConfigStore::new(dir.join("nested").join(FILE_NAME));
        let settings = Settings {
            star_count: 2500,
            speed_pct: 150,
            twinkle_pct: 0,
            color: Rgb::new(160, 180, 255),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
        assert!(!store.path().with_extension("json.tmp").exists());

        let json = fs::read_to_string(store.path()).unwrap();
        for key in [PREF_STAR_COUNT, PREF_SPEED, PREF_TWINKLE, PREF_COLOR_R, PREF_COLOR_G, PREF_COLOR_B] {
            assert!(json.contains(key), "missing key {}", key);
        }
        let _ = fs::remove_dir_all(&dir);
    }
}
