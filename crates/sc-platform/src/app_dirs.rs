use std::path::PathBuf;

use sc_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "stickclip";

fn resolved_app_dir_name() -> String {
    match std::env::var("STICKCLIP_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_dir_override: None,
        }
    }

    /// Resolve both data and config roots under `base` instead of the system directories.
    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.join("config"));
        }
        dirs::config_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    /// `AppDirs` rooted at `<data_local_dir>/stickclip` and `<config_dir>/stickclip`.
    ///
    /// Setting `STICKCLIP_PROFILE` appends `-<profile>` so parallel installs
    /// keep separate histories.
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_config_root: base_config.join(&app_dir_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var("STICKCLIP_PROFILE").ok();

        match value {
            Some(profile) => std::env::set_var("STICKCLIP_PROFILE", profile),
            None => std::env::remove_var("STICKCLIP_PROFILE"),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var("STICKCLIP_PROFILE", profile),
            None => std::env::remove_var("STICKCLIP_PROFILE"),
        }

        result
    }

    #[test]
    fn adapter_appends_stickclip_dir_name() {
        with_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();

            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/stickclip"));
            assert_eq!(dirs.app_config_root, PathBuf::from("/tmp/config/stickclip"));
            assert_eq!(
                dirs.registry_path(),
                PathBuf::from("/tmp/stickclip/registry.json")
            );
        });
    }

    #[test]
    fn adapter_isolates_dirs_per_profile() {
        let dirs_a = with_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let dirs_b = with_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/stickclip-a"));
        assert_eq!(dirs_b.app_data_root, PathBuf::from("/tmp/stickclip-b"));
        assert_ne!(dirs_a.app_config_root, dirs_b.app_config_root);
    }

    #[test]
    fn empty_profile_uses_plain_dir_name() {
        let dirs = with_profile(Some(""), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/stickclip"));
    }
}
