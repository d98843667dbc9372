use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn garage(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("garage").expect("garage binary");
    cmd.arg("--config-dir")
        .arg(dir.path().join("config"))
        .arg("--database")
        .arg(dir.path().join("database.sqlite"))
        .env("NO_COLOR", "1")
        .env_remove("GARAGE_DATABASE")
        .env_remove("GARAGE_PAGE_SIZE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn customers_lists_seeded_records() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .arg("customers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customers"))
        .stdout(predicate::str::contains("Ahmet"))
        .stdout(predicate::str::contains("Total 2 records"));
}

#[test]
fn customers_search_narrows_the_table() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["customers", "--search", "MEHMET"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 1 records"));
}

#[test]
fn services_filter_by_status() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["services", "--status", "waiting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 1 records"));
}

#[test]
fn services_rejects_unknown_status() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["services", "--status", "parked"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown status 'parked'"));
}

#[test]
fn start_service_advances_the_ticket() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["services", "--menu", "2", "--invoke", "Start Service"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start-service 2"))
        .stdout(predicate::str::contains("Updated services 2"));

    garage(&dir)
        .args(["services", "--status", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 2 records"));
}

#[test]
fn view_details_prints_the_detail_panel() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["vehicles", "--menu", "1", "--invoke", "view details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view-details 1"))
        .stdout(predicate::str::contains("Vehicles 1"));
}

#[test]
fn menu_lists_row_actions() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["inventory", "--menu", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Actions for 1"))
        .stdout(predicate::str::contains("Delete Part"));
}

#[test]
fn delete_part_removes_it_from_the_store() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["inventory", "--menu", "2", "--invoke", "Delete Part"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted inventory 2"));

    garage(&dir)
        .arg("inventory")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 2 records"));
}

#[test]
fn inventory_critical_stock_filter() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["inventory", "--stock", "critical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories: Motor, Fren, Ateşleme"))
        .stdout(predicate::str::contains("Total 2 records"));
}

#[test]
fn menu_for_missing_row_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["customers", "--menu", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record '99'"));
}

#[test]
fn invoke_requires_menu() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["customers", "--invoke", "Customer Details"])
        .assert()
        .failure();
}

#[test]
fn unknown_action_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["customers", "--menu", "1", "--invoke", "Fly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action 'Fly'"));
}

#[test]
fn users_list_and_add() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 3 records"));

    garage(&dir)
        .args(["users", "add", "--name", "Ali Usta", "--email", "ali@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("ali@example.com"));

    garage(&dir)
        .args(["users", "list", "--search", "ali@"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 1 records"));
}

#[test]
fn users_add_duplicate_email_fails_without_storing() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["users", "add", "--name", "Ahmet Y.", "--email", "ahmet@example.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stderr(predicate::str::contains("ahmet@example.com"));

    garage(&dir)
        .args(["users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 3 records"));
}

#[test]
fn users_list_honours_page_size() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["users", "list", "--page-size", "2", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mehmet"))
        .stdout(predicate::str::contains("1 [2]"));
}

#[test]
fn verbose_reports_the_visible_range() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["--verbose", "customers"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Showing 1-2 of 2 records (Page 1 of 1)"));
}

#[test]
fn users_add_validates_email() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["users", "add", "--name", "Ali Usta", "--email", "ali.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email"));
}

#[test]
fn config_set_then_show() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["config", "set", "--page-size", "2", "--theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved"));

    garage(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows Per Page: 2"))
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn config_set_keeps_the_run_database_out_of_the_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let run_database = dir.path().join("database.sqlite");

    garage(&dir)
        .args(["config", "set", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rows per page to: 2"))
        .stdout(predicate::str::contains("database to:").not());

    garage(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(run_database.display().to_string()).not());
}

#[test]
fn config_set_database_is_saved() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let stored = dir.path().join("stored.sqlite");

    garage(&dir)
        .args(["config", "set", "--database"])
        .arg(&stored)
        .assert()
        .success();

    garage(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(stored.display().to_string()));
}

#[test]
fn config_set_without_values_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir).args(["config", "set"]).assert().failure();
}

#[test]
fn theme_toggle_persists() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    garage(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn page_beyond_the_end_is_clamped() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    garage(&dir)
        .args(["vehicles", "--page-size", "2", "--page", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 [2]"));
}
