use crate::common::command::{run_valdiff_command, workspace_dir};
use crate::common::file::write_json;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn exits_with_error_for_record_list_without_config(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = json!({"users": [{"id": 1}, {"id": 2}]});
    write_json(workspace_dir.path(), "source.json", &tree);
    write_json(workspace_dir.path(), "destination.json", &tree);

    run_valdiff_command(workspace_dir.path(), &["source.json", "destination.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "primary key configuration missing for list of mappings",
        ))
        .stdout(predicate::str::contains("No diff found.").not());

    Ok(())
}
