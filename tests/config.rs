#[cfg(test)]
mod tests {
    use rollcall::api::TrackerConfig;
    use rollcall::libs::config::{Config, ScheduleConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for the config round trip.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://api.example.com/attendance".to_string(),
            }
        }
    }

    // Disk-touching assertions live in one test because the mocked home
    // directory is process-global state.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.tracker.is_none());
        assert!(config.schedule.is_none());

        let config = Config {
            tracker: Some(TrackerConfig {
                api_url: ctx.api_url.clone(),
            }),
            schedule: Some(ScheduleConfig {
                sign_in: "10:30".to_string(),
                sign_in_period: "AM".to_string(),
                sign_out: "19:00".to_string(),
                sign_out_period: "PM".to_string(),
                notify: false,
                skip_days: vec![1, 15],
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let tracker_config = read_config.tracker.unwrap();
        let schedule_config = read_config.schedule.unwrap();
        assert_eq!(tracker_config.api_url, ctx.api_url);
        assert_eq!(schedule_config.sign_in, "10:30");
        assert_eq!(schedule_config.sign_out_period, "PM");
        assert!(!schedule_config.notify);
        assert_eq!(schedule_config.skip_days, vec![1, 15]);

        Config::delete().unwrap();
        let config = Config::read().unwrap();
        assert!(config.tracker.is_none());

        // Deleting again must not fail.
        Config::delete().unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tracker.is_none());
        assert!(config.schedule.is_none());
    }

    #[test]
    fn test_default_schedule_config() {
        let schedule_config = ScheduleConfig::default();
        assert_eq!(schedule_config.sign_in, "11:00");
        assert_eq!(schedule_config.sign_in_period, "AM");
        assert_eq!(schedule_config.sign_out, "18:00");
        assert_eq!(schedule_config.sign_out_period, "PM");
        assert!(schedule_config.notify);
        assert!(schedule_config.skip_days.is_empty());
    }

    #[test]
    fn test_unconfigured_modules_stay_out_of_json() {
        let config = Config {
            tracker: Some(TrackerConfig {
                api_url: "https://api.example.com/attendance".to_string(),
            }),
            schedule: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("tracker"));
        assert!(!json.contains("schedule"));
    }

    #[test]
    fn test_tracker_module_description() {
        let module = TrackerConfig::module();
        assert_eq!(module.key, "tracker");
        assert_eq!(module.name, "Tracker");
    }
}
