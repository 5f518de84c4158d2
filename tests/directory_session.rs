use assert_cmd::Command;
use predicates::prelude::*;

fn staffdir() -> Command {
    let mut cmd = Command::cargo_bin("staffdir").unwrap();
    cmd.arg("--plain");
    cmd
}

#[test]
fn create_edit_delete_roundtrip() {
    staffdir()
        .write_stdin(
            "add E1, Ann, 1 Main St\n\
             edit E1\n\
             save Ann B, 1 Main St\n\
             show E1\n\
             delete E1\n\
             count\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee added: Ann (E1)"))
        .stdout(predicate::str::contains("Editing employee E1: Ann"))
        .stdout(predicate::str::contains("Employee updated: Ann B (E1)"))
        .stdout(predicate::str::contains("address: 1 Main St"))
        .stdout(predicate::str::contains("Employee deleted: Ann B (E1)"))
        .stdout(predicate::str::contains("0 Employees"));
}

#[test]
fn duplicate_id_is_rejected_and_count_unchanged() {
    staffdir()
        .write_stdin(
            "add E1, Ann, 1 Main St\n\
             add E1, Bob, 2 Oak Ave\n\
             count\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee id already exists: E1"))
        .stdout(predicate::str::contains("1 Employee\n"));
}

#[test]
fn listing_preserves_insertion_order() {
    staffdir()
        .write_stdin(
            "add E2, Bob, 2 Oak Ave\n\
             add E1, Ann, 1 Main St\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("2 Employees"))
        // E2 was added first, so it renders first
        .stdout(predicate::str::is_match(r"(?s)E2.*Bob.*E1.*Ann").unwrap());
}

#[test]
fn json_listing_is_machine_readable() {
    staffdir()
        .write_stdin(
            "add E1, Ann, 1 Main St\n\
             json\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"E1\""))
        .stdout(predicate::str::contains("\"address\": \"1 Main St\""));
}

#[test]
fn save_without_edit_and_unknown_commands_keep_the_session_going() {
    staffdir()
        .write_stdin(
            "save Ann, 1 Main St\n\
             frobnicate\n\
             add E1, Ann, 1 Main St\n\
             count\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("No edit in progress"))
        .stdout(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("1 Employee\n"));
}

#[test]
fn cancel_abandons_the_edit() {
    staffdir()
        .write_stdin(
            "add E1, Ann, 1 Main St\n\
             edit E1\n\
             cancel\n\
             add E2, Bob, 2 Oak Ave\n\
             count\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit of E1 cancelled"))
        .stdout(predicate::str::contains("2 Employees"));
}

#[test]
fn demo_flag_seeds_sample_records() {
    staffdir()
        .arg("--demo")
        .write_stdin("count\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 Employees"));
}
