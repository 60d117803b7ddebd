use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::io::Write;

fn plantrec(api_url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("plantrec"));
    cmd.env_remove("PLANTREC_API_URL")
        .arg("--api-url")
        .arg(api_url);
    cmd
}

#[test]
fn test_plants_list_uses_default_pagination() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/plants/all?skip=0&limit=600")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 1, "name": "Monstera", "image_url": null}]"#)
        .create();

    plantrec(&url)
        .args(["plants", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Monstera\""));

    mock.assert();
}

#[test]
fn test_plants_list_with_explicit_bounds() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/plants/all?skip=30&limit=10")
        .with_status(200)
        .with_body("[]")
        .create();

    plantrec(&url)
        .args(["plants", "list", "--skip", "30", "--limit", "10"])
        .assert()
        .success()
        .stdout("[]\n");

    mock.assert();
}

#[test]
fn test_api_url_from_environment_with_trailing_slash() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/plants/all/likes")
        .with_status(200)
        .with_body(r#"[{"id": 4}]"#)
        .create();

    Command::new(cargo::cargo_bin!("plantrec"))
        .env("PLANTREC_API_URL", format!("{}/", url))
        .args(["plants", "likes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 4"));

    mock.assert();
}

#[test]
fn test_like_and_unlike_plant() {
    let mut server = Server::new();
    let url = server.url();

    let like = server
        .mock("POST", "/plants/8/like")
        .with_status(201)
        .with_body(r#"{"plant_id": 8}"#)
        .create();
    let unlike = server
        .mock("DELETE", "/plants/8/like")
        .with_status(200)
        .with_body(r#"{"plant_id": 8}"#)
        .create();

    plantrec(&url).args(["plants", "like", "8"]).assert().success();
    plantrec(&url).args(["plants", "unlike", "8"]).assert().success();

    like.assert();
    unlike.assert();
}

#[test]
fn test_rate_recommendation() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("POST", "/recommendation/42/submit?rating=5")
        .with_status(200)
        .with_body(r#"{"submission_id": 42, "created_at": "2025-01-01T10:00:00", "rating": 5}"#)
        .create();

    plantrec(&url)
        .args(["recommendations", "rate", "42", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rating\": 5"));

    mock.assert();
}

#[test]
fn test_rate_out_of_range_sends_no_request() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    plantrec(&url)
        .args(["recommendations", "rate", "42", "6"])
        .assert()
        .failure();

    mock.assert();
}

#[test]
fn test_not_found_reports_status_and_detail() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("POST", "/recommendation/999/submit?rating=3")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Incorrect submission ID!"}"#)
        .create();

    plantrec(&url)
        .args(["recommendations", "rate", "999", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"))
        .stderr(predicate::str::contains("Incorrect submission ID!"));
}

#[test]
fn test_server_error_without_body() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/questions/all")
        .with_status(500)
        .expect(1)
        .create();

    plantrec(&url)
        .args(["questions", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error! status: 500"));

    mock.assert();
}

#[test]
fn test_questions_submit_sends_answers_and_default_counts() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock(
            "POST",
            "/questions/?num_perfect_fits=3&num_good_fits=3&num_bad_fits=3",
        )
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "answers": [
                {"question_id": 1, "answer_id": 2},
                {"question_id": 3, "answer_id": 1}
            ],
            "free_text": "north facing"
        })))
        .with_status(201)
        .with_body(r#"{"submission_id": 11}"#)
        .create();

    plantrec(&url)
        .args([
            "questions",
            "submit",
            "-a",
            "1:2",
            "-a",
            "3:1",
            "--free-text",
            "north facing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"submission_id\": 11"));

    mock.assert();
}

#[test]
fn test_free_text_with_custom_counts() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock(
            "POST",
            "/questions/free_text?num_perfect_fits=1&num_good_fits=2&num_bad_fits=3",
        )
        .match_body(Matcher::PartialJson(json!({"free_text": "easy to care for"})))
        .with_status(201)
        .with_body("[]")
        .create();

    plantrec(&url)
        .args([
            "questions",
            "free-text",
            "easy to care for",
            "--perfect",
            "1",
            "--good",
            "2",
        ])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_study_submit_from_file() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("POST", "/user_study/submit")
        .match_body(Matcher::PartialJson(json!({
            "user_name": "tester",
            "created_at": "2025-03-01T09:00:00Z",
            "user_study_answers": [{"section_id": 1, "item_id": 2, "rating": 4}]
        })))
        .with_status(200)
        .with_body(r#"{"detail": "User study submitted successfully!"}"#)
        .create();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({
            "user_name": "tester",
            "created_at": "2025-03-01T09:00:00Z",
            "user_study_answers": [{"section_id": 1, "item_id": 2, "rating": 4}]
        })
    )
    .unwrap();

    plantrec(&url)
        .args(["study", "submit"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("User study submitted successfully!"));

    mock.assert();
}

#[test]
fn test_study_submit_from_stdin() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("POST", "/user_study/submit")
        .match_body(Matcher::PartialJson(json!({"user_name": "stdin-user"})))
        .with_status(200)
        .with_body(r#"{"detail": "ok"}"#)
        .create();

    plantrec(&url)
        .args(["study", "submit", "-"])
        .write_stdin(r#"{"user_name": "stdin-user", "user_study_answers": []}"#)
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_recommendations_list_and_clear() {
    let mut server = Server::new();
    let url = server.url();

    let list = server
        .mock("GET", "/recommendation/all?include_unrated=false")
        .with_status(200)
        .with_body(r#"[{"submission_id": 1, "rating": 5, "recommendations_per_submission": []}]"#)
        .create();
    let clear = server
        .mock("DELETE", "/recommendation/metadata")
        .with_status(200)
        .with_body(r#"{"detail": "All data deleted successfully!"}"#)
        .create();

    plantrec(&url)
        .args(["recommendations", "list", "--rated-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"submission_id\": 1"));
    plantrec(&url)
        .args(["recommendations", "clear"])
        .assert()
        .success();

    list.assert();
    clear.assert();
}

#[test]
fn test_diagnostics() {
    let mut server = Server::new();
    let url = server.url();

    let test = server
        .mock("GET", "/test")
        .with_status(200)
        .with_body(r#"{"title": "Test", "message": "It works", "some_number": 42}"#)
        .create();
    let columns = server
        .mock("GET", "/data/columns")
        .with_status(200)
        .with_body(r#"{"headers": ["name", "growth", "soil"]}"#)
        .create();

    plantrec(&url)
        .args(["diag", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("It works"));
    plantrec(&url)
        .args(["diag", "columns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("growth"));

    test.assert();
    columns.assert();
}

#[test]
fn test_invalid_api_url_fails_before_request() {
    plantrec("not a url")
        .args(["diag", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}
