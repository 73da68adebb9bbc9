//! Configuration contracts
//!
//! Settings loaded from disk change what the engine does, not just what it
//! reports.

use std::fs;

use crate::common::*;

use temme_live::domain::value_objects::SessionState;
use temme_live::{LiveConfig, RunReport, SkipReason};

/// CONTRACT CONFIG-001: Output suffix names the output file
mod output_suffix {
    use super::*;

    #[test]
    fn contract_custom_suffix_is_used() {
        let config = LiveConfig {
            output_suffix: ".out.json".to_string(),
            ..LiveConfig::default()
        };
        let mut env = LiveEnv::builder()
            .with_example_page()
            .with_config(config)
            .with_active_document("page.temme", TAGGED_SELECTOR)
            .build();

        env.engine.run_selector(None).unwrap();

        assert!(env.path("page.temme.out.json").exists());
        assert!(!env.path("page.temme.json").exists());
    }
}

/// CONTRACT CONFIG-002: Language id decides what is a selector document
mod language_id {
    use super::*;

    #[test]
    fn contract_other_language_id_refuses_temme_files() {
        let config = LiveConfig {
            language_id: "temme-html".to_string(),
            ..LiveConfig::default()
        };
        let mut env = LiveEnv::builder()
            .with_example_page()
            .with_config(config)
            .with_active_document("page.temme", UNBALANCED_SELECTOR)
            .build();

        assert_eq!(env.engine.activate(), None);
        assert_eq!(
            env.engine.run_selector(None).unwrap(),
            RunReport::Skipped(SkipReason::NotSelectorDocument)
        );
        assert_eq!(env.engine.state(), SessionState::Ready);
    }
}

/// CONTRACT CONFIG-003: The scan limit bounds link candidates
mod scan_limit {
    use super::*;

    #[test]
    fn contract_limit_of_one_skips_picker() {
        let config = LiveConfig {
            link_scan_limit: 1,
            ..LiveConfig::default()
        };
        let mut env = LiveEnv::builder()
            .with_example_page()
            .with_page(LIST_URL, LIST_PAGE)
            .with_config(config)
            .with_active_document("list.temme", TWO_LINK_SELECTOR)
            .picking(None)
            .build();

        let report = env.engine.run_selector(None).unwrap();

        assert!(matches!(report, RunReport::Completed { .. }));
        assert!(env.picker.prompts().is_empty());
    }
}

/// CONTRACT CONFIG-004: Project config is found from the project root
mod project_config {
    use super::*;

    #[test]
    fn contract_project_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".temme")).unwrap();
        fs::write(
            dir.path().join(".temme/config.toml"),
            "output_suffix = \".result.json\"\n\n[fetch]\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = LiveConfig::load_or_default(Some(dir.path()));

        assert_eq!(config.output_suffix, ".result.json");
        assert_eq!(config.fetch_timeout(), std::time::Duration::from_secs(5));
        assert_eq!(config.language_id, "temme");
    }
}
