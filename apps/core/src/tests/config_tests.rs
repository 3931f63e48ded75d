//! Configuration Tests
//!
//! JSON configuration files, environment overrides and scorer construction.

use crate::config::{
    SentimentConfig, CONFIG_PATH_VAR, DATA_DIR_VAR, EXCLUDE_VAR, NGRAM_ORDER_VAR, THRESHOLD_VAR,
};
use crate::error::SentimentError;
use crate::sentiment::Sentiment;
use std::fs;
use tempfile::TempDir;

const ALL_VARS: [&str; 5] = [
    CONFIG_PATH_VAR,
    THRESHOLD_VAR,
    NGRAM_ORDER_VAR,
    EXCLUDE_VAR,
    DATA_DIR_VAR,
];

#[cfg(test)]
mod json_config_tests {
    use super::*;

    #[test]
    fn test_full_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "threshold": 0.5,
                "ngram_order": 2,
                "neutral_patterns": ["^RT "],
                "word_scores": {"good": 1.0, "not good": -3.0, "spam": -9.0},
                "influencers": {"very": 2.0},
                "exclude": ["spam", {"pattern": "^@"}]
            }"#,
        )
        .unwrap();

        let scorer = SentimentConfig::from_json_file(&path)
            .unwrap()
            .build_scorer()
            .unwrap();

        assert_eq!(scorer.threshold(), 0.5);
        assert_eq!(scorer.ngram_order(), 2);
        assert_eq!(scorer.score("not good"), -2.0);
        assert_eq!(scorer.score("very good"), 2.0);
        assert_eq!(scorer.score("spam @good"), 0.0);
        assert_eq!(scorer.score("RT very good"), 0.0);
        assert_eq!(scorer.sentiment("good"), Sentiment::Positive);
    }

    #[test]
    fn test_numeric_exclude_is_invalid_filter_spec() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"exclude": 42}"#).unwrap();

        let config = SentimentConfig::from_json_file(&path).unwrap();
        let err = config.build_scorer().unwrap_err();
        assert!(matches!(err, SentimentError::InvalidFilterSpec(_)));
    }

    #[test]
    fn test_negative_threshold_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"threshold": -1}"#).unwrap();

        let err = SentimentConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, SentimentError::Config(_)));
    }

    #[test]
    fn test_build_scorer_loads_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("slang.json"), r#"{"lol": 0.5}"#).unwrap();
        fs::write(temp_dir.path().join("en_words.json"), r#"{"sad": -0.5}"#).unwrap();
        fs::write(temp_dir.path().join("influencers.json"), r#"{"so": 2.0}"#).unwrap();

        let config = SentimentConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let scorer = config.build_scorer().unwrap();

        assert_eq!(scorer.score("so sad lol"), -0.5);
    }
}

#[cfg(test)]
mod env_config_tests {
    use super::*;

    fn cleared<'a>(overrides: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
        let mut vars: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|v| (*v, None)).collect();
        for (key, value) in overrides {
            vars.retain(|(k, _)| k != key);
            vars.push((*key, *value));
        }
        vars
    }

    #[test]
    fn test_env_defaults() {
        temp_env::with_vars(cleared(&[]), || {
            let config = SentimentConfig::from_env().unwrap();
            assert_eq!(config.threshold, 0.0);
            assert_eq!(config.ngram_order, 1);
            assert!(config.data_dir.is_none());
        });
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            cleared(&[
                (THRESHOLD_VAR, Some("0.25")),
                (NGRAM_ORDER_VAR, Some("3")),
                (EXCLUDE_VAR, Some("the a an")),
            ]),
            || {
                let config = SentimentConfig::from_env().unwrap();
                assert_eq!(config.threshold, 0.25);
                assert_eq!(config.ngram_order, 3);

                let mut scorer = config.build_scorer().unwrap();
                scorer.merge_word_scores([("the", 5.0), ("good", 1.0)]);
                assert_eq!(scorer.score("the good"), 1.0);
            },
        );
    }

    #[test]
    fn test_env_zero_ngram_order_ignored() {
        temp_env::with_vars(cleared(&[(NGRAM_ORDER_VAR, Some("0"))]), || {
            let config = SentimentConfig::from_env().unwrap();
            assert_eq!(config.ngram_order, 1);
        });
    }

    #[test]
    fn test_env_bad_threshold() {
        temp_env::with_vars(cleared(&[(THRESHOLD_VAR, Some("high"))]), || {
            let err = SentimentConfig::from_env().unwrap_err();
            assert!(matches!(err, SentimentError::Config(_)));
        });
    }

    #[test]
    fn test_env_nan_threshold() {
        for value in ["NaN", "inf", "-inf"] {
            temp_env::with_vars(cleared(&[(THRESHOLD_VAR, Some(value))]), || {
                let err = SentimentConfig::from_env().unwrap_err();
                assert!(matches!(err, SentimentError::Config(_)), "{}", value);
            });
        }
    }

    #[test]
    fn test_env_config_file_with_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"threshold": 0.9, "ngram_order": 2}"#).unwrap();
        let path_str = path.to_string_lossy().to_string();

        temp_env::with_vars(
            cleared(&[
                (CONFIG_PATH_VAR, Some(path_str.as_str())),
                (THRESHOLD_VAR, Some("0.1")),
            ]),
            || {
                let config = SentimentConfig::from_env().unwrap();
                assert_eq!(config.threshold, 0.1);
                assert_eq!(config.ngram_order, 2);
            },
        );
    }
}
