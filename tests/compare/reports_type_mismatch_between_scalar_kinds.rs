use crate::common::command::{run_valdiff_command, workspace_dir};
use crate::common::file::write_json;
use assert_fs::TempDir;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn reports_type_mismatch_between_scalar_kinds(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_json(workspace_dir.path(), "source.json", &json!({"port": 8080}));
    write_json(
        workspace_dir.path(),
        "destination.json",
        &json!({"port": "8080"}),
    );

    let expected_output =
        "|port: TYPE_MISMATCH:\n< integer: 8080\n---\n> string: \"8080\"\n\n".to_string();
    let actual_output =
        run_valdiff_command(workspace_dir.path(), &["source.json", "destination.json"])
            .assert()
            .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
