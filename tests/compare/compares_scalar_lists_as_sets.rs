use crate::common::command::{run_valdiff_command, workspace_dir};
use crate::common::file::write_json;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn reordered_lists_with_duplicates_compare_equal(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_json(
        workspace_dir.path(),
        "source.json",
        &json!({"ports": [3, 1, 2, 1]}),
    );
    write_json(
        workspace_dir.path(),
        "destination.json",
        &json!({"ports": [1, 2, 3]}),
    );

    run_valdiff_command(workspace_dir.path(), &["source.json", "destination.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No diff found."));

    Ok(())
}

#[rstest]
fn one_sided_elements_are_reported_per_element(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_json(
        workspace_dir.path(),
        "source.json",
        &json!({"ports": [1, 2, 3]}),
    );
    write_json(
        workspace_dir.path(),
        "destination.json",
        &json!({"ports": [2, 3, 4]}),
    );

    let expected_output = "|ports|1: MISS_DESTINATION:\n< 1\n\n\
                           |ports|4: MISS_SOURCE:\n> 4\n\n"
        .to_string();
    let actual_output =
        run_valdiff_command(workspace_dir.path(), &["source.json", "destination.json"])
            .assert()
            .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
