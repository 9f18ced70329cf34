use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn logscrub(root: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_logscrub"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_strip_reports_and_rewrites() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let file = root.join("route.ts");
    fs::write(&file, "console.log('x');\nconst a = 1;\nconsole.log('y', {\n  z: 1,\n});\n")?;

    let output = logscrub(root, &["strip", "route.ts"])?;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Removed 4 console.log line(s)"), "{}", out);
    assert!(out.contains("Files modified: 1"), "{}", out);
    assert!(out.contains("Total console.log lines removed: 4"), "{}", out);
    assert_eq!(fs::read_to_string(&file)?, "const a = 1;\n");

    Ok(())
}

#[test]
fn test_strip_missing_file_is_not_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = logscrub(temp_dir.path(), &["strip", "nowhere.ts"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("MISSING - File not found"));

    Ok(())
}

#[test]
fn test_dry_run_and_check() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let file = root.join("page.tsx");
    let original = "export default function Page() {\n  console.log('render');\n  return null;\n}\n";
    fs::write(&file, original)?;

    let output = logscrub(root, &["strip", "--dry-run", "page.tsx"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Would remove 1 console.log line(s)"));
    assert_eq!(fs::read_to_string(&file)?, original);

    let output = logscrub(root, &["check", "page.tsx"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(":2 - console.log('render');"));

    logscrub(root, &["strip", "page.tsx"])?;
    let output = logscrub(root, &["check", "page.tsx"])?;
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_preview_resolves_against_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/lib"))?;
    let original = "console.log('sent');\nreturn ok;\n";
    fs::write(root.join("src/lib/email.ts"), original)?;

    let output = logscrub(root, &["preview", "--diff", "src/lib/email.ts"])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let out = stdout(&output);
    assert!(out.contains("console.log('sent');"), "{}", out);
    assert!(out.contains("1 line(s) in 1 span(s) would be removed"), "{}", out);
    assert_eq!(fs::read_to_string(root.join("src/lib/email.ts"))?, original);

    Ok(())
}

#[test]
fn test_summarize_from_stdin() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_logscrub"))
        .arg("--root")
        .arg(temp_dir.path())
        .arg("summarize")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take().unwrap().write_all(
        br#"{"data":{"workspace":{"viewType":"grid","userRole":"admin","hierarchical":[{"name":"G1","divisions":[{"departments":[1,2]}]}]}}}"#,
    )?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("View Type: grid"));
    assert!(out.contains("Total Departments: 2"));
    assert!(out.contains("  - G1 (1 divisions)"));

    Ok(())
}

#[test]
fn test_summarize_malformed_exits_nonzero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_logscrub"))
        .arg("--root")
        .arg(temp_dir.path())
        .arg("summarize")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take().unwrap().write_all(b"{\"data\": []}")?;
    let output = child.wait_with_output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_init_and_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let output = logscrub(root, &["config", "set", "strip.strategy", "brace"])?;
    assert_eq!(output.status.code(), Some(1));

    assert!(logscrub(root, &["init"])?.status.success());
    assert!(root.join(".logscrub/config.toml").exists());

    assert!(logscrub(root, &["config", "set", "strip.strategy", "brace"])?.status.success());
    let output = logscrub(root, &["config", "get", "strip.strategy"])?;
    assert_eq!(stdout(&output).trim(), "brace");

    let output = logscrub(root, &["config", "get", "strip.colour"])?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}
