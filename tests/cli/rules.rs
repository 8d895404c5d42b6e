use anyhow::Result;

use crate::CliTest;

#[test]
fn test_rules_lists_all_rules() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("rules").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("no-camel-case"));
    assert!(stdout.contains("no-multiple-plurals"));
    assert!(stdout.contains("formatjs"));
    Ok(())
}
