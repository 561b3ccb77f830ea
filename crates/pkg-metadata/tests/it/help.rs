use crate::common::pkg_metadata_command;

#[test]
fn help_lists_commands() {
    let mut cmd = pkg_metadata_command();
    cmd.arg("help");

    let output = cmd.output().expect("Failed to execute pkg-metadata");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Convert Python package metadata between formats."));
    for command in ["to-json", "from-json", "pyproject"] {
        assert!(stdout.contains(command), "Missing `{command}` in help");
    }
    assert!(stdout.contains("--verbose"));
    assert!(stdout.contains("--quiet"));
}

#[test]
fn help_pyproject() {
    let mut cmd = pkg_metadata_command();
    cmd.args(["help", "pyproject"]);

    let output = cmd.output().expect("Failed to execute pkg-metadata");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("[default: pyproject.toml]"));
}

#[test]
fn unknown_command_fails() {
    let mut cmd = pkg_metadata_command();
    cmd.arg("frobnicate");

    let output = cmd.output().expect("Failed to execute pkg-metadata");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn version() {
    for flag in ["--version", "-V"] {
        let output = pkg_metadata_command()
            .arg(flag)
            .output()
            .expect("Failed to execute pkg-metadata");
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success());
        assert_eq!(
            stdout.trim(),
            format!("pkg-metadata {}", env!("CARGO_PKG_VERSION"))
        );
    }
}
