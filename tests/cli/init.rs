use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join(".intlintrc.json").exists());

    let content = test.read_file(".intlintrc.json")?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(config["module"], "react-intl");
    assert!(config["rules"].as_array().is_some_and(|r| !r.is_empty()));
    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".intlintrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
    Ok(())
}
