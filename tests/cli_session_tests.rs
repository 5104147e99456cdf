//! End-to-end tests for the interactive `paleta session` shell.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_session_script() {
    let config_dir = TempDir::new().unwrap();
    let output = run_with_stdin(
        &["session", "--colors", "#FF0000,#00FF00,#0000FF"],
        config_dir.path(),
        "lock 1\nmode triadic\ngen\nset 2 #123456\nsave\nquit\n",
    );
    assert_success(&output);

    let text = stdout(&output);
    assert!(text.contains("Type 'help' for commands."));
    assert!(text.contains(" 1. #FF0000  [locked]"));
    assert!(text.contains(" 2. #123456"));
    assert!(text.contains("Saved as palette 1."));

    let output = run(&["saved", "show", "1", "--json"], config_dir.path());
    let colors: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(colors[0], "#FF0000");
    assert_eq!(colors[1], "#123456");
}

#[test]
fn test_session_survives_errors_and_eof() {
    let config_dir = TempDir::new().unwrap();
    let output = run_with_stdin(
        &["session", "--seed", "9"],
        config_dir.path(),
        "del 99\nimport /nonexistent.json\nopen garbage!\nadd\n",
    );
    assert_success(&output);

    let text = stdout(&output);
    assert!(text.contains("Error: position 99 does not exist (there are 5)"));
    assert!(text.contains("Error: invalid palette file"));
    assert!(text.contains("Error: invalid shared palette"));
    assert!(text.contains(" 6. #"));
}
