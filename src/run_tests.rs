//! Tests for the run module.

use super::*;

use netcheck::config::Cli;

fn config_from(args: &[&str]) -> ValidatedConfig {
    let cli = Cli::parse_from_iter(args.iter().copied());
    ValidatedConfig::from_raw(&cli, None).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn watch_terminated_displays_message() {
        let error = RunError::WatchTerminated;
        assert_eq!(
            error.to_string(),
            "Storage watch stream terminated unexpectedly"
        );
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::WatchTerminated;
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("WatchTerminated"));
    }
}

mod storage_provider_creation {
    use super::*;
    use netcheck::config::TomlConfig;
    use std::path::PathBuf;

    #[test]
    fn configured_roots_are_used() {
        let cli = Cli::parse_from_iter(["netcheck"]);
        let toml = TomlConfig::parse("[storage]\nroots = [\"/mnt/usb\"]\n").unwrap();
        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        let provider = create_storage_provider(&config);

        assert_eq!(provider.roots(), [PathBuf::from("/mnt/usb")]);
    }

    #[test]
    fn platform_defaults_apply_without_configured_roots() {
        let config = config_from(&["netcheck"]);

        let provider = create_storage_provider(&config);

        assert_eq!(provider.roots(), MountScanProvider::default_roots());
    }
}

mod storage_probe {
    use super::*;

    #[tokio::test]
    async fn probe_writes_marker_into_first_volume() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("sd0")).unwrap();
        let provider = MountScanProvider::new(vec![root.path().to_path_buf()]);
        let config = config_from(&["netcheck"]);

        run_storage_probe(&provider, &config).await;

        let marker = root.path().join("sd0").join(&config.marker_file);
        assert_eq!(
            std::fs::read_to_string(marker).unwrap(),
            defaults::MARKER_CONTENT
        );
    }

    #[tokio::test]
    async fn probe_without_volumes_does_not_panic() {
        let provider = MountScanProvider::new(vec![]);
        let config = config_from(&["netcheck"]);

        run_storage_probe(&provider, &config).await;
    }

    #[tokio::test]
    async fn probe_honors_configured_marker_name() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("sd0")).unwrap();
        let provider = MountScanProvider::new(vec![root.path().to_path_buf()]);
        let config = config_from(&["netcheck", "--marker-file", "custom_probe.txt"]);

        run_storage_probe(&provider, &config).await;

        assert!(root.path().join("sd0").join("custom_probe.txt").exists());
    }
}
