//! Integration tests for the xlcmd binary.

use assert_cmd::Command;

fn xlcmd() -> Command {
    Command::cargo_bin("xlcmd").unwrap()
}

#[test]
fn test_list_json_has_all_seven_commands() {
    let output = xlcmd().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let commands: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let commands = commands.as_array().unwrap();
    assert_eq!(commands.len(), 7);

    let mut names: Vec<&str> = commands
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(
        names,
        [
            "context",
            "globalscope",
            "scope",
            "tree",
            "types",
            "unifications",
            "value"
        ]
    );

    for command in commands {
        assert_eq!(command["args"].as_array().unwrap().len(), 1);
    }
}

#[test]
fn test_list_json_entry_mapping() {
    let output = xlcmd().args(["list", "--json"]).output().unwrap();
    let commands: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let entry_of = |name: &str| -> String {
        commands
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == name)
            .unwrap()["entry"]
            .as_str()
            .unwrap()
            .to_string()
    };

    assert_eq!(entry_of("tree"), "debugp");
    assert_eq!(entry_of("unifications"), "debugu");
    assert_eq!(entry_of("globalscope"), "debugg");
}

#[test]
fn test_script_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xlcmds.py");

    xlcmd()
        .args(["script", "--output"])
        .arg(&path)
        .assert()
        .success();

    let script = std::fs::read_to_string(&path).unwrap();
    assert!(script.contains("def __lldb_init_module(debugger, internal_dict):"));
    assert!(script.contains("'p debugc(%s)' % command"));
}

#[test]
fn test_script_stdout_matches_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xlcmds.py");

    let stdout = xlcmd().arg("script").output().unwrap().stdout;
    xlcmd()
        .args(["script", "--output"])
        .arg(&path)
        .assert()
        .success();

    assert_eq!(stdout, std::fs::read(&path).unwrap());
}

#[test]
fn test_console_dispatches_piped_lines() {
    xlcmd()
        .arg("console")
        .write_stdin("tree myTreePtr\nglobalscope ctx\nquit\n")
        .assert()
        .success()
        .stdout("debugp(myTreePtr)\ndebugg(ctx)\n");
}

#[test]
fn test_console_reports_unknown_command_and_continues() {
    xlcmd()
        .arg("console")
        .write_stdin("nosuch x\nscope s\n")
        .assert()
        .success()
        .stdout("debugl(s)\n");
}
