//! End-to-end pipeline, configuration, and language catalogue tests.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use polyglot_wordfreq::config::{DEFAULT_TOP_N, MAX_TOP_N, MIN_TOP_N};
use polyglot_wordfreq::{
    default_pipeline, LanguageCode, Pipeline, PipelineConfig, StopwordRepository, StrategyKind,
    TokenizeMethod, WordfreqError,
};

// ==================== Helpers ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Pipeline Tests ====================

#[test]
fn test_analyze_english() {
    init_logger();
    let pipeline = Pipeline::default();
    let report = pipeline.analyze(
        "Data science is the future. Science helps us understand data better.",
        LanguageCode::English,
        20,
    );

    assert_eq!(
        report.normalized,
        "data science is the future science helps us understand data better"
    );
    assert_eq!(report.method, TokenizeMethod::EnglishWords);
    assert!(!report.fallback_used);
    assert_eq!(report.token_count, 11);
    assert_eq!(report.ranked[0], ("data", 2));
    assert_eq!(report.ranked[1], ("science", 2));
    assert_eq!(report.ranked[2], ("future", 1));
    assert_eq!(report.filtered_count, 9);
    assert_eq!(report.unique_count, 7);
    assert!(!report.is_empty());
}

#[test]
fn test_analyze_assamese() {
    init_logger();
    let report = default_pipeline().analyze(
        "ডাটা বিজ্ঞান আমাৰ ভৱিষ্যৎ। বিজ্ঞান আমাৰ জীৱন সহজ কৰে।",
        LanguageCode::Assamese,
        5,
    );
    assert_eq!(report.method, TokenizeMethod::Grapheme);
    assert_eq!(report.ranked[0], ("বিজ্ঞান", 2));
    assert_eq!(report.ranked[1], ("ডাটা", 1));
    assert_eq!(report.ranked.len(), 5);
    for stop in ["আমাৰ", "কৰে"] {
        assert!(!report.filtered.iter().any(|t| t == stop), "{} not removed", stop);
    }
}

#[test]
fn test_analyze_only_stopwords_is_empty() {
    let report = default_pipeline().analyze("the is a of", LanguageCode::English, 10);
    assert!(report.is_empty());
    assert!(report.ranked.is_empty());
    assert_eq!(report.token_count, 4);
}

#[test]
fn test_analyze_empty_text() {
    for lang in LanguageCode::ALL {
        let report = default_pipeline().analyze("", lang, 10);
        assert!(report.normalized.is_empty());
        assert!(report.tokens.is_empty());
        assert!(report.is_empty());
    }
}

#[test]
fn test_analyze_respects_top_n() {
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let report = default_pipeline().analyze(text, LanguageCode::English, 5);
    assert_eq!(report.ranked.len(), 5);
    assert_eq!(report.unique_count, 10);
    assert_eq!(report.ranked[0], ("alpha", 1));
}

#[test]
fn test_analyze_default_uses_config_top_n() {
    let config = PipelineConfig {
        top_n: 5,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config).unwrap();
    let text = "one1 two2 three3 four4 five5 six6 seven7";
    assert_eq!(pipeline.analyze_default(text, LanguageCode::English).ranked.len(), 5);
}

#[test]
fn test_pipeline_filter_code_unknown_applies_length_rule() {
    let pipeline = Pipeline::default();
    let tokens: Vec<String> = ["the", "x", "word"].iter().map(|s| s.to_string()).collect();
    assert_eq!(pipeline.filter_code(&tokens, "klingon"), vec!["the", "word"]);
    assert_eq!(pipeline.filter_code(&tokens, "english"), vec!["word"]);
}

#[test]
fn test_pipeline_with_explicit_stopwords() {
    let repo = StopwordRepository::empty();
    let pipeline = Pipeline::with_stopwords(PipelineConfig::default(), repo).unwrap();
    let report = pipeline.analyze("the cat and the hat", LanguageCode::English, 10);
    assert_eq!(report.ranked[0], ("the", 2));
}

#[test]
fn test_pipeline_degraded_strategy() {
    let config = PipelineConfig {
        indic_strategies: vec![StrategyKind::RegexLetters],
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config).unwrap();
    let report = pipeline.analyze("नमस्ते दुनिया", LanguageCode::Hindi, 10);
    assert_eq!(report.method, TokenizeMethod::RegexLetters);
    assert!(!report.fallback_used);
}

#[test]
fn test_pipeline_shared_across_threads() {
    let pipeline = Arc::new(Pipeline::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pipeline = Arc::clone(&pipeline);
            thread::spawn(move || {
                let text = format!("thread{} data data science", i);
                pipeline.analyze(&text, LanguageCode::English, 10)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let report = handle.join().unwrap();
        assert_eq!(report.ranked[0], ("data", 2));
        assert!(report.filtered.contains(&format!("thread{}", i)));
        assert_eq!(report.unique_count, 3);
    }
}

#[test]
fn test_report_serializes_to_json() {
    let report = default_pipeline().analyze("apple banana apple", LanguageCode::English, 10);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["language"], "english");
    assert_eq!(json["method"], "english_words");
    assert_eq!(json["ranked"][0]["token"], "apple");
    assert_eq!(json["ranked"][0]["count"], 2);
}

// ==================== Config Tests ====================

#[test]
fn test_config_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.top_n, DEFAULT_TOP_N);
    assert_eq!(config.min_token_chars, 2);
    assert_eq!(config.indic_strategies, StrategyKind::DEFAULT_ORDER.to_vec());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_toml() {
    let config = PipelineConfig::from_toml_str(
        r#"
top_n = 30
indic_strategies = ["indic_trivial", "regex_letters"]
font_root = "assets/fonts"

[extra_stopwords]
english = ["data"]
bodo = ["आरो"]
"#,
    )
    .unwrap();

    assert_eq!(config.top_n, 30);
    assert_eq!(config.min_token_chars, 2);
    assert_eq!(
        config.indic_strategies,
        vec![StrategyKind::IndicTrivial, StrategyKind::RegexLetters]
    );

    let pipeline = Pipeline::new(config).unwrap();
    assert_eq!(
        pipeline.tokenizer().indic_strategy(),
        Some(StrategyKind::IndicTrivial)
    );
    assert!(pipeline.stopwords().contains(LanguageCode::English, "data"));
    assert!(pipeline.stopwords().contains(LanguageCode::Bodo, "आरो"));
    assert!(pipeline.stopwords().contains(LanguageCode::English, "the"));
}

#[test]
fn test_config_rejects_out_of_range_values() {
    for top_n in [MIN_TOP_N - 1, MAX_TOP_N + 1] {
        let err = PipelineConfig::from_toml_str(&format!("top_n = {}", top_n)).unwrap_err();
        assert!(matches!(err, WordfreqError::Config(_)));
    }
    let err = PipelineConfig::from_toml_str("min_token_chars = 0").unwrap_err();
    assert!(matches!(err, WordfreqError::Config(_)));
    let err = PipelineConfig::from_toml_str("indic_strategies = []").unwrap_err();
    assert!(matches!(err, WordfreqError::Config(_)));
}

#[test]
fn test_config_rejects_unknown_strategy() {
    let err = PipelineConfig::from_toml_str(r#"indic_strategies = ["magic"]"#).unwrap_err();
    assert!(matches!(err, WordfreqError::Toml(_)));
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "top_n = 10\nmin_token_chars = 3").unwrap();

    let config = PipelineConfig::load(file.path()).unwrap();
    assert_eq!(config.top_n, 10);

    let pipeline = Pipeline::new(config).unwrap();
    let report = pipeline.analyze("ab abc abcd", LanguageCode::English, 10);
    assert_eq!(report.filtered, vec!["abc", "abcd"]);
}

#[test]
fn test_config_load_missing_file() {
    let err = PipelineConfig::load(std::path::Path::new("/nonexistent/wordfreq.toml"))
        .unwrap_err();
    assert!(matches!(err, WordfreqError::Io(_)));
}

// ==================== Language Tests ====================

#[test]
fn test_language_codes_and_labels() {
    let codes: Vec<&str> = LanguageCode::ALL.iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["english", "hindi", "assamese", "manipuri", "bodo"]);
    assert_eq!(LanguageCode::Manipuri.label(), "Manipuri");
    assert_eq!(LanguageCode::Hindi.to_string(), "hindi");
}

#[test]
fn test_language_parse() {
    assert_eq!("ASSAMESE".parse::<LanguageCode>().unwrap(), LanguageCode::Assamese);
    let err = "klingon".parse::<LanguageCode>().unwrap_err();
    assert!(matches!(err, WordfreqError::UnknownLanguage(code) if code == "klingon"));
}

#[test]
fn test_language_font_lookup() {
    assert_eq!(LanguageCode::English.font_file(), None);
    assert_eq!(LanguageCode::Bodo.font_file(), LanguageCode::Hindi.font_file());
    assert_eq!(
        LanguageCode::Manipuri.font_file(),
        Some("Noto_Sans_Meetei_Mayek/static/NotoSansMeeteiMayek-Regular.ttf")
    );
    assert_eq!(
        LanguageCode::Assamese.font_file(),
        Some("Noto_Sans_Bengali/static/NotoSansBengali-Regular.ttf")
    );
    assert!(LanguageCode::ALL.iter().all(|l| l.is_indic() == l.font_file().is_some()));
}

#[test]
fn test_language_resolve_font() {
    let root = tempfile::tempdir().unwrap();
    assert_eq!(LanguageCode::Hindi.resolve_font(root.path()), None);

    let relative = LanguageCode::Hindi.font_file().unwrap();
    let path = root.path().join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"font").unwrap();

    assert_eq!(LanguageCode::Hindi.resolve_font(root.path()), Some(path.clone()));
    assert_eq!(LanguageCode::Bodo.resolve_font(root.path()), Some(path));
    assert_eq!(LanguageCode::English.resolve_font(root.path()), None);
}
