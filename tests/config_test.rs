use binondo_guide::config::GuideConfig;
use binondo_guide::guide::MatchPolicy;

#[test]
fn missing_file_gives_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = GuideConfig::load_from(tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.port, 8765);
    assert_eq!(config.chat.user_label, "You");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "[matching]\npolicy = \"declaration\"\n\n[chat]\nassistant_label = \"Lola\"\n",
    )
    .unwrap();

    let config = GuideConfig::load_from(&path).unwrap();
    assert_eq!(config.matching.policy, MatchPolicy::Declaration);
    assert_eq!(config.chat.assistant_label, "Lola");
    assert_eq!(config.chat.user_label, "You");
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();
    assert!(GuideConfig::load_from(&path).is_err());
}
