use crate::common::command::{run_valdiff_command, workspace_dir};
use crate::common::file::write_json;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn matches_records_by_primary_key_across_reordered_lists(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_json(
        workspace_dir.path(),
        "source.json",
        &json!({"users": [
            {"id": 1, "name": "ada"},
            {"id": 2, "name": "grace"},
        ]}),
    );
    write_json(
        workspace_dir.path(),
        "destination.json",
        &json!({"users": [
            {"id": 2, "name": "grace"},
            {"id": 1, "name": "ada"},
        ]}),
    );
    write_json(
        workspace_dir.path(),
        "config.json",
        &json!({"children": {"users": {"primary_key": "id"}}}),
    );

    run_valdiff_command(
        workspace_dir.path(),
        &["source.json", "destination.json", "--config", "config.json"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("No diff found."));

    Ok(())
}

#[rstest]
fn reports_record_level_changes_under_their_key(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_json(
        workspace_dir.path(),
        "source.json",
        &json!({"users": [
            {"id": 1, "name": "ada"},
            {"id": 2, "name": "grace"},
        ]}),
    );
    write_json(
        workspace_dir.path(),
        "destination.json",
        &json!({"users": [
            {"id": 2, "name": "hopper"},
            {"id": 1, "name": "ada"},
        ]}),
    );
    write_json(
        workspace_dir.path(),
        "config.json",
        &json!({"children": {"users": {"primary_key": "id"}}}),
    );

    let expected_output =
        "|users|2|name: VALUE_MISMATCH:\n< \"grace\"\n---\n> \"hopper\"\n\n".to_string();
    let actual_output = run_valdiff_command(
        workspace_dir.path(),
        &["source.json", "destination.json", "--config", "config.json"],
    )
    .assert()
    .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
