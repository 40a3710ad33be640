use imgpdf_compose::*;

#[test]
fn test_default_rejects_empty_documents() {
    assert!(!ComposeOptions::default().allow_empty_document);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = ComposeOptions {
        allow_empty_document: true,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = ComposeOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_fields_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{}").unwrap();

    let loaded = ComposeOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded, ComposeOptions::default());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match ComposeOptions::load(temp_file.path()).await {
        Err(ComposeError::Config(msg)) => assert!(msg.contains("Failed to parse settings")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
