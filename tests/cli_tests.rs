use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{eb, init_db, login, login_admin, setup_test_db, temp_out};

#[test]
fn test_init_and_list_seed_events() {
    let db_path = setup_test_db("init_list");
    init_db(&db_path);

    eb().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Upcoming events"))
        .stdout(contains("Photography Walk"))
        .stdout(contains("Previous events"))
        .stdout(contains("New Year Tech Kickoff"));
}

#[test]
fn test_list_search_filters_events() {
    let db_path = setup_test_db("list_search");
    init_db(&db_path);

    eb().args(["--db", &db_path, "list", "--search", "rust"])
        .assert()
        .success()
        .stdout(contains("Rust Systems Workshop"))
        .stdout(contains("Found 1 upcoming and 0 previous"))
        .stdout(contains("Charity Fun Run").not());
}

#[test]
fn test_show_unknown_event_fails() {
    let db_path = setup_test_db("show_unknown");
    init_db(&db_path);

    eb().args(["--db", &db_path, "show", "424242"])
        .assert()
        .failure()
        .stderr(contains("Event not found: 424242"));
}

#[test]
fn test_book_requires_login() {
    let db_path = setup_test_db("book_requires_login");
    init_db(&db_path);

    eb().args(["--db", &db_path, "book", "5"])
        .assert()
        .failure()
        .stderr(contains("not signed in"));
}

#[test]
fn test_book_then_dashboard_shows_one_booking() {
    let db_path = setup_test_db("book_dashboard");
    init_db(&db_path);
    login(&db_path, "jane@example.com", "secret");

    eb().args(["--db", &db_path, "book", "5", "--seats", "2"])
        .assert()
        .success()
        .stdout(contains("Booked Rust Systems Workshop for 2 seats"));

    eb().args(["--db", &db_path, "book", "5"])
        .assert()
        .failure()
        .stderr(contains("already booked"));

    eb().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Rust Systems Workshop"))
        .stdout(contains("1 booking(s)"));
}

#[test]
fn test_book_sold_out_event_fails() {
    let db_path = setup_test_db("book_sold_out");
    init_db(&db_path);
    login(&db_path, "jane@example.com", "secret");

    eb().args(["--db", &db_path, "book", "7"])
        .assert()
        .failure()
        .stderr(contains("sold out"));
}

#[test]
fn test_book_rejects_too_many_seats() {
    let db_path = setup_test_db("book_seats");
    init_db(&db_path);
    login(&db_path, "jane@example.com", "secret");

    eb().args(["--db", &db_path, "book", "5", "--seats", "5"])
        .assert()
        .failure();
}

#[test]
fn test_logout_clears_session() {
    let db_path = setup_test_db("logout");
    init_db(&db_path);
    login(&db_path, "jane@example.com", "secret");

    eb().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("jane@example.com"))
        .stdout(contains("role     : user"));

    eb().args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Goodbye"));

    eb().args(["--db", &db_path, "dashboard"])
        .assert()
        .failure()
        .stderr(contains("not signed in"));
}

#[test]
fn test_admin_requires_admin_account() {
    let db_path = setup_test_db("admin_required");
    init_db(&db_path);
    login(&db_path, "jane@example.com", "secret");

    eb().args(["--db", &db_path, "admin", "list"])
        .assert()
        .failure()
        .stderr(contains("requires an admin account"));
}

#[test]
fn test_admin_create_edit_delete_flow() {
    let db_path = setup_test_db("admin_flow");
    init_db(&db_path);
    login_admin(&db_path);

    eb().args([
        "--db",
        &db_path,
        "admin",
        "create",
        "--title",
        "Board Game Evening",
        "--date",
        "2030-05-10",
        "--time",
        "07:00 PM – 10:00 PM",
        "--description",
        "Bring your favourite game.",
        "--location",
        "Library Cafe",
        "--capacity",
        "16",
        "--tags",
        "Games, Social",
    ])
    .assert()
    .success()
    .stdout(contains("Event created successfully"));

    eb().args(["--db", &db_path, "list", "--search", "board game"])
        .assert()
        .success()
        .stdout(contains("Board Game Evening"));

    // Edit a seed event: the local copy shadows it.
    eb().args([
        "--db",
        &db_path,
        "admin",
        "edit",
        "4",
        "--title",
        "Sunrise Photography Walk",
    ])
    .assert()
    .success()
    .stdout(contains("Event updated successfully"));

    eb().args(["--db", &db_path, "show", "4"])
        .assert()
        .success()
        .stdout(contains("Sunrise Photography Walk"));

    eb().args(["--db", &db_path, "admin", "list"])
        .assert()
        .success()
        .stdout(contains("seed, edited"))
        .stdout(contains("local"));

    // Delete a seed event: it disappears from every view.
    eb().args(["--db", &db_path, "admin", "delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("seed event hidden"));

    eb().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("New Year Tech Kickoff").not());

    eb().args(["--db", &db_path, "show", "1"])
        .assert()
        .failure()
        .stderr(contains("Event not found: 1"));
}

#[test]
fn test_admin_create_rejects_zero_capacity() {
    let db_path = setup_test_db("admin_zero_capacity");
    init_db(&db_path);
    login_admin(&db_path);

    eb().args([
        "--db",
        &db_path,
        "admin",
        "create",
        "--title",
        "Nope",
        "--date",
        "2030-01-01",
        "--time",
        "10:00",
        "--description",
        "x",
        "--location",
        "y",
        "--capacity",
        "0",
        "--tags",
        "z",
    ])
    .assert()
    .failure();
}

#[test]
fn test_export_events_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db(&db_path);

    eb().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Events export completed (8 rows)"));

    let content = fs::read_to_string(&out).expect("export file written");
    assert!(content.contains("\"spotsLeft\""));
    assert!(content.contains("Charity Fun Run"));
}

#[test]
fn test_export_bookings_csv() {
    let db_path = setup_test_db("export_bookings");
    let out = temp_out("export_bookings", "csv");
    init_db(&db_path);
    login(&db_path, "jane@example.com", "secret");

    eb().args(["--db", &db_path, "book", "6"])
        .assert()
        .success();

    eb().args([
        "--db",
        &db_path,
        "export",
        "--bookings",
        "--format",
        "csv",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("export file written");
    assert!(content.starts_with("event_id,event_title,event_date,event_location,booking_date"));
    assert!(content.contains("6,Winter Food Carnival,2027-01-16"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db(&db_path);
    login_admin(&db_path);

    eb().args(["--db", &db_path, "admin", "delete", "2", "--yes"])
        .assert()
        .success();

    eb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("login"))
        .stdout(contains("delete"))
        .stdout(contains("event 2"));
}
