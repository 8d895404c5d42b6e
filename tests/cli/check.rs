use anyhow::Result;

use crate::CliTest;

fn setup_config(test: &CliTest) -> Result<()> {
    test.write_file(
        ".intlintrc.json",
        r#"{
            "includes": ["src"],
            "module": "react-intl"
        }"#,
    )
}

#[test]
fn test_check_reports_camel_case_violation() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/app.tsx",
        r#"import { defineMessage } from 'react-intl';

const msg = defineMessage({
    id: 'greeting',
    defaultMessage: 'Hello {firstName}',
});
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Camel case arguments are not allowed"));
    assert!(stdout.contains("no-camel-case"));
    assert!(stdout.contains("src/app.tsx:5:21"));
    Ok(())
}

#[test]
fn test_check_reports_multiple_plurals() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/app.tsx",
        r#"import { defineMessage } from 'react-intl';

const msg = defineMessage({
    id: 'counts',
    defaultMessage: '{a, plural, other{#}} {b, plural, other{#}}',
});
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Cannot specify more than 1 plural rules"));
    assert!(stdout.contains("no-multiple-plurals"));
    Ok(())
}

#[test]
fn test_check_clean_project_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/app.tsx",
        r#"import { FormattedMessage } from 'react-intl';

const el = <FormattedMessage id="greeting" defaultMessage="Hello {name}" />;
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_rule_selection_on_command_line() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    // Violates no-camel-case but not no-multiple-plurals
    test.write_file(
        "src/app.tsx",
        r#"import { defineMessage } from 'react-intl';

const msg = defineMessage({ id: 'a', defaultMessage: 'Hi {FirstName}' });
"#,
    )?;

    let mut cmd = test.check_command();
    cmd.arg("no-multiple-plurals");
    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_reports_unparseable_icu_message() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/app.tsx",
        r#"import { defineMessage } from 'react-intl';

const msg = defineMessage({ id: 'a', defaultMessage: 'Hello {name' });
"#,
    )?;

    let mut cmd = test.check_command();
    cmd.arg("no-camel-case");
    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("unclosed argument brace"));
    Ok(())
}

#[test]
fn test_check_reports_unparseable_source_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file("src/broken.tsx", "const = = =;\n")?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("broken.tsx"));
    Ok(())
}

#[test]
fn test_check_ignores_untracked_imports() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/app.tsx",
        r#"import { defineMessage } from 'some-other-lib';

const msg = defineMessage({ id: 'a', defaultMessage: 'Hi {FirstName}' });
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_module_override() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/app.tsx",
        r#"import { defineMessage } from '@formatjs/intl';

const msg = defineMessage({ id: 'a', defaultMessage: 'Hi {FirstName}' });
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let mut cmd = test.check_command();
    cmd.args(["--module", "@formatjs/intl"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_check_skips_test_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/app.test.tsx",
        r#"import { defineMessage } from 'react-intl';

const msg = defineMessage({ id: 'a', defaultMessage: 'Hi {FirstName}' });
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
