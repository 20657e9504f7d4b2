//! Scripted end-to-end sessions against temporary log files.

use std::path::Path;

use jiff::civil::date;
use jiff::tz::TimeZone;
use neuroscan_cli::clock::FixedClock;
use neuroscan_cli::config::NeuroScanConfig;
use neuroscan_cli::console::Console;
use neuroscan_cli::session::Session;
use neuroscan_instruments::instruments::neuroscan::NeuroScan;

fn monday_morning() -> jiff::Zoned {
    date(2026, 10, 19)
        .at(9, 30, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
}

fn config_in(dir: &Path) -> NeuroScanConfig {
    NeuroScanConfig {
        results_log: dir.join("NeuroScan_Results.txt"),
        reminders_log: dir.join("NeuroScan_Reminders.txt"),
        ..NeuroScanConfig::default()
    }
}

fn run_session(config: &NeuroScanConfig, script: &str) -> String {
    run_session_bytes(config, script.as_bytes())
}

fn run_session_bytes(config: &NeuroScanConfig, script: &[u8]) -> String {
    let console = Console::new(script, Vec::new());
    let mut session = Session::new(config, &NeuroScan, console, FixedClock(monday_morning()));
    session.run().unwrap();
    String::from_utf8(session.into_console().into_output()).unwrap()
}

fn answers(values: [u8; 10]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}

#[test]
fn moderate_run_is_logged_with_a_one_week_reminder() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let script = format!("Ada\nn\n1\n{}1\n3\n", answers([2, 2, 2, 2, 2, 0, 0, 0, 0, 0]));

    let output = run_session(&config, &script);

    assert!(output.contains("Ada, your total risk score is: 10 out of 20."));
    assert!(output.contains("\u{1F7E0} Moderate Concern"));
    assert!(output.contains("Additional Note: Frequent memory issues"));
    assert!(output.contains("Progress: [ 1/10] completed"));
    assert!(output.contains("Progress: [10/10] completed"));
    assert!(output.contains("Your results have been saved to"));
    assert!(output.contains("Reminder saved!"));
    assert!(output.ends_with("Thank you for using NeuroScan, Ada! Stay healthy \u{1F499}\n"));

    let log = std::fs::read_to_string(&config.results_log).unwrap();
    assert!(log.starts_with(
        "------------------------------------------\n\
         User: Ada\n\
         Date: Mon Oct 19 09:30:00 2026\n\
         Score: 10 / 20\n\
         Risk Level: \u{1F7E0} Moderate Concern\n\
         Recommendation: Some symptoms are present. A screening may be beneficial.\n"
    ));
    assert!(!log.contains("Caregiver Note:"));

    let reminders = std::fs::read_to_string(&config.reminders_log).unwrap();
    assert_eq!(
        reminders,
        "Ada should retake NeuroScan on: Mon Oct 26 09:30:00 2026\n"
    );
}

#[test]
fn no_reminder_writes_nothing_to_the_reminder_log() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let script = format!("Ada\nn\n1\n{}0\n3\n", answers([0; 10]));

    let output = run_session(&config, &script);

    assert!(output.contains("\u{1F7E2} Low Concern"));
    assert!(!output.contains("Additional Note"));
    assert!(config.results_log.exists());
    assert!(!config.reminders_log.exists());
}

#[test]
fn invalid_answers_are_reprompted_without_advancing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let script = format!("Ada\nn\n1\n-1\n3\nabc\n{}2\n3\n", answers([2; 10]));

    let output = run_session(&config, &script);

    assert_eq!(output.matches("Invalid input. Please enter 0, 1, or 2: ").count(), 3);
    assert!(output.contains("your total risk score is: 20 out of 20."));
    assert!(output.contains("\u{1F534} High Concern"));

    let reminders = std::fs::read_to_string(&config.reminders_log).unwrap();
    assert_eq!(
        reminders,
        "Ada should retake NeuroScan on: Mon Nov  2 09:30:00 2026\n"
    );
}

#[test]
fn non_utf8_answer_is_reprompted_like_any_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let mut script = b"Ada\nn\n1\n\xff\n".to_vec();
    script.extend_from_slice(answers([1; 10]).as_bytes());
    script.extend_from_slice(b"0\n3\n");

    let output = run_session_bytes(&config, &script);

    assert_eq!(output.matches("Invalid input. Please enter 0, 1, or 2: ").count(), 1);
    assert!(output.contains("your total risk score is: 10 out of 20."));
    let log = std::fs::read_to_string(&config.results_log).unwrap();
    assert!(log.contains("Score: 10 / 20\n"));
}

#[test]
fn non_utf8_name_does_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let output = run_session_bytes(&config, b"Jos\xe9\nn\n3\n");

    assert!(output.contains("Hello, Jos\u{FFFD}!"));
    assert!(output.contains("Thank you for using NeuroScan"));
}

#[test]
fn caregiver_note_lands_in_the_same_entry() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let script = format!(
        "Grace\ny\n1\n{}0\ny\nForgets the stove is on.\n3\n",
        answers([1; 10])
    );

    run_session(&config, &script);

    let log = std::fs::read_to_string(&config.results_log).unwrap();
    assert_eq!(log.matches("------------------------------------------\n").count(), 1);
    assert!(log.contains("User: Grace (Caregiver)\n"));
    assert!(log.contains("Score: 10 / 20\n"));
    assert!(log.ends_with("Caregiver Note: Forgets the stove is on.\n"));
}

#[test]
fn caregiver_can_decline_the_note() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let script = format!("Grace\ny\n1\n{}0\nn\n3\n", answers([0; 10]));

    run_session(&config, &script);

    let log = std::fs::read_to_string(&config.results_log).unwrap();
    assert!(log.contains("User: Grace (Caregiver)\n"));
    assert!(!log.contains("Caregiver Note:"));
}

#[test]
fn viewing_without_a_log_reports_no_results() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let output = run_session(&config, "Ada\nn\n2\n3\n");

    assert!(output.contains("No previous results found."));
    assert!(!config.results_log.exists());
}

#[test]
fn past_results_are_shown_verbatim_oldest_first() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let script = format!(
        "Ada\nn\n1\n{}0\n1\n{}0\n2\n3\n",
        answers([0; 10]),
        answers([2; 10])
    );

    let output = run_session(&config, &script);

    let log = std::fs::read_to_string(&config.results_log).unwrap();
    let shown = output
        .split("Displaying past results:\n")
        .nth(1)
        .unwrap();
    for line in log.lines() {
        assert!(shown.contains(line), "missing line: {line}");
    }
    let low = shown.find("Score: 0 / 20").unwrap();
    let high = shown.find("Score: 20 / 20").unwrap();
    assert!(low < high);
}

#[test]
fn unwritable_log_is_reported_and_the_session_goes_on() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");
    let config = config_in(&missing);
    let script = format!("Ada\nn\n1\n{}1\n3\n", answers([1; 10]));

    let output = run_session(&config, &script);

    assert!(output.contains("your total risk score is: 10 out of 20."));
    assert!(output.contains("Your results were not saved"));
    assert!(output.contains("Your reminder was not saved"));
    assert!(output.contains("Thank you for using NeuroScan, Ada!"));
}

#[test]
fn input_ending_mid_assessment_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let output = run_session(&config, "Ada\nn\n1\n2\n2\n");

    assert!(output.contains("Progress: [ 2/10] completed"));
    assert!(!config.results_log.exists());
    assert!(!config.reminders_log.exists());
    assert!(output.contains("Thank you for using NeuroScan, Ada!"));
}

#[test]
fn invalid_menu_choice_redisplays_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let output = run_session(&config, "Ada\nn\n9\n3\n");

    assert!(output.contains("Invalid choice. Please enter 1, 2, or 3."));
    assert_eq!(output.matches("What would you like to do?").count(), 2);
}

#[test]
fn blank_name_is_asked_again() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let output = run_session(&config, "\n   \nAda\nn\n3\n");

    assert_eq!(output.matches("Enter your name: ").count(), 3);
    assert!(output.contains("Hello, Ada!"));
}
