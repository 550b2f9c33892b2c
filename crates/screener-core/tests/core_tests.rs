use std::fs;
use std::path::Path;
use tempfile::TempDir;

use figment::providers::{Format, Toml};
use figment::Figment;
use screener_core::config::{expand_path, resolve_with_base, Config, EmbeddingBackend};
use screener_core::corpus::ResumeLoader;
use screener_core::types::{Document, DocumentKind, MatchLabel};
use screener_core::Error;

#[test]
fn load_dir_reads_txt_files_in_sorted_order() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("bob.txt"), "Rust developer").unwrap();
    fs::write(dir.join("alice.txt"), "Python engineer").unwrap();
    fs::write(dir.join("notes.md"), "not a resume").unwrap();

    let pool = ResumeLoader::new().load_dir(dir).expect("load");

    let ids: Vec<&str> = pool.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["alice.txt", "bob.txt"]);
    assert_eq!(pool[0].text, "Python engineer");
}

#[test]
fn load_dir_skips_blank_files_and_keeps_nested_ids_distinct() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("team")).unwrap();
    fs::write(dir.join("a.txt"), "   \n\t").unwrap();
    fs::write(dir.join("b.txt"), "Go engineer").unwrap();
    fs::write(dir.join("team").join("b.txt"), "Java engineer").unwrap();

    let pool = ResumeLoader::new().load_dir(dir).expect("load");

    let ids: Vec<&str> = pool.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["b.txt", "team/b.txt"]);
}

#[test]
fn load_dir_limited_two_files_limit_one() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("a.txt"), "alpha bravo").unwrap();
    fs::write(dir.join("b.txt"), "charlie delta").unwrap();

    let pool = ResumeLoader::with_limit(1).load_dir(dir).expect("load limited");

    assert_eq!(pool.len(), 1, "limited to one source document");
    assert_eq!(pool[0].id, "a.txt");
}

#[test]
fn load_dir_on_empty_directory_is_empty_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let pool = ResumeLoader::new().load_dir(tmp.path()).expect("load");
    assert!(pool.is_empty());
}

#[test]
fn load_dir_missing_directory_is_not_found() {
    let err = ResumeLoader::new()
        .load_dir(Path::new("/definitely/not/here"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn config_layers_toml_over_defaults() {
    let figment = Figment::new().merge(Toml::string(
        r#"
        [embedding]
        backend = "hashing"
        dimension = 128

        [ranking]
        top_k = 3
        "#,
    ));
    let settings = Config::from_figment(figment).settings().expect("settings");

    assert_eq!(settings.embedding.backend, EmbeddingBackend::Hashing);
    assert_eq!(settings.embedding.dimension, 128);
    assert_eq!(settings.embedding.max_len, 256, "untouched keys keep defaults");
    assert_eq!(settings.ranking.top_k, 3);
    assert_eq!(settings.ranking.score_threshold, 50.0);
}

#[test]
fn config_rejects_zero_top_k() {
    let figment = Figment::new().merge(Toml::string("[ranking]\ntop_k = 0\n"));
    let err = Config::from_figment(figment).settings().unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn config_get_reads_single_keys() {
    let figment = Figment::new().merge(Toml::string("[data]\nresume_dir = \"pool\"\n"));
    let config = Config::from_figment(figment);
    let dir: String = config.get("data.resume_dir").expect("key");
    assert_eq!(dir, "pool");
    assert!(config.get::<String>("data.nope").is_err());
}

#[test]
fn resolve_with_base_joins_relative_and_keeps_absolute() {
    let base = Path::new("/srv/screener");
    assert_eq!(resolve_with_base(base, "data/resumes"), base.join("data/resumes"));
    assert_eq!(resolve_with_base(base, "/abs/resumes"), Path::new("/abs/resumes"));
}

#[test]
fn expand_path_expands_env_vars() {
    std::env::set_var("SCREENER_TEST_ROOT", "/tmp/screener-root");
    assert_eq!(expand_path("${SCREENER_TEST_ROOT}/models"), Path::new("/tmp/screener-root/models"));
}

#[test]
fn document_constructors_tag_kind() {
    assert_eq!(Document::resume("x").kind, DocumentKind::Resume);
    assert_eq!(Document::job("x").kind, DocumentKind::JobDescription);
    assert!(Document::job(" \n ").is_blank());
}

#[test]
fn match_label_boundaries_are_inclusive_on_the_lower_bound() {
    let cases = [
        (85.0, MatchLabel::Excellent),
        (84.999, MatchLabel::Good),
        (70.0, MatchLabel::Good),
        (69.999, MatchLabel::Moderate),
        (50.0, MatchLabel::Moderate),
        (49.999, MatchLabel::Weak),
        (0.0, MatchLabel::Weak),
        (100.0, MatchLabel::Excellent),
    ];
    for (score, expected) in cases {
        assert_eq!(MatchLabel::from_score(score), expected, "score {score}");
    }
    assert_eq!(MatchLabel::Moderate.to_string(), "Moderate match");
    assert_eq!(serde_json::to_string(&MatchLabel::Weak).unwrap(), "\"Weak match\"");
}
