//! End-to-end flow over file-backed storage: register an account the way the
//! presentation layer would, restart, log in, and work the task list.

use std::path::Path;

use taskgate::{
    AppConfig, AuthService, FormField, LoginOutcome, RegisterOutcome, RegistrationForm, Screen,
    Session, TaskList,
};

fn config_for(dir: &Path) -> AppConfig {
    AppConfig {
        storage_dir: dir.to_string_lossy().into_owned(),
        storage_key: "loginData".to_string(),
    }
}

/// Drives the registration form through change events the way the UI does.
fn fill_registration_form(username: &str, password: &str) -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.apply_change(FormField::Firstname, "Alice");
    form.apply_change(FormField::Lastname, "Smith");
    form.apply_change(FormField::Username, username);
    form.apply_change(FormField::Phonenumber, "(555) 867-5309");
    form.apply_change(FormField::Password, password);
    form.apply_change(FormField::Confirmpassword, password);
    form.apply_change(FormField::Email, "alice@example.com");
    form.apply_change(FormField::Zip, "90210");
    form.apply_blur(FormField::Zip);
    form
}

#[tokio::test]
async fn test_register_restart_login_and_tasks() {
    taskgate::utils::logging::setup_logging();

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    // Registration screen: fill the form, submit once it reports valid
    let form = fill_registration_form("alice", "Abc123!");
    assert!(form.is_valid());

    let service = AuthService::from_config(&config);
    let outcome = service.register(form.state()).await.unwrap();
    assert_eq!(outcome, RegisterOutcome::Success);
    assert_eq!(outcome.next_screen(), Some(Screen::Login));

    // Restart: a fresh service over the same storage directory
    drop(service);
    let service = AuthService::from_config(&config);

    let login = service.login("alice", "Abc123!").await.unwrap();
    assert_eq!(login, LoginOutcome::Success);
    assert_eq!(login.next_screen(), Some(Screen::Tasks));

    let mut session = Session::new();
    session.grant("alice");
    assert!(session.is_logged_in());

    // Task screen, seeded with the starter tasks
    let mut tasks = TaskList::seeded();
    tasks.add_task("Buy milk");
    assert_eq!(tasks.len(), 3);
    assert!(tasks.toggle_task("3"));
    assert!(tasks.tasks()[2].completed);

    // Session ends: the task list is dropped with it, credentials remain
    session.logout();
    drop(tasks);
    assert_eq!(
        service.login("alice", "Abc123!").await.unwrap(),
        LoginOutcome::Success
    );
}

#[tokio::test]
async fn test_case_varied_login_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let service = AuthService::from_config(&config_for(dir.path()));

    let form = fill_registration_form("alice", "Abc123!");
    service.register(form.state()).await.unwrap();

    let rejected = service.login("ALICE", "Abc123!").await.unwrap();
    assert_eq!(rejected, LoginOutcome::InvalidCredentials);
    assert_eq!(rejected.message(), "Invalid username or password.");
    assert_eq!(rejected.next_screen(), None);

    assert_eq!(
        service.login("alice", "ABC123!").await.unwrap(),
        LoginOutcome::InvalidCredentials
    );
}

#[tokio::test]
async fn test_invalid_submit_reports_field_errors() {
    let dir = tempfile::tempdir().unwrap();
    let service = AuthService::from_config(&config_for(dir.path()));

    let mut form = fill_registration_form("alice", "Abc123!");
    form.apply_change(FormField::Confirmpassword, "different");
    assert!(!form.is_valid());

    let outcome = service.register(form.state()).await.unwrap();
    assert_eq!(outcome.message(), "Please correct the errors in the form.");
    match outcome {
        RegisterOutcome::ValidationFailed(errors) => {
            assert_eq!(
                errors.message(FormField::Confirmpassword),
                "Error: Passwords do not match."
            );
        }
        other => panic!("expected validation failure, got {:?}", other),
    }

    // Nothing was persisted for the rejected submit
    assert!(service.store().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_storage_degrades_to_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("loginData.json"), "{definitely not json").unwrap();

    let service = AuthService::from_config(&config_for(dir.path()));
    assert_eq!(
        service.login("alice", "Abc123!").await.unwrap(),
        LoginOutcome::InvalidCredentials
    );

    // The store still accepts new registrations afterwards
    let form = fill_registration_form("alice", "Abc123!");
    assert_eq!(
        service.register(form.state()).await.unwrap(),
        RegisterOutcome::Success
    );
    assert_eq!(
        service.login("alice", "Abc123!").await.unwrap(),
        LoginOutcome::Success
    );
}

#[tokio::test]
async fn test_stored_format_is_a_json_credential_array() {
    let dir = tempfile::tempdir().unwrap();
    let service = AuthService::from_config(&config_for(dir.path()));

    let form = fill_registration_form("alice", "Abc123!");
    service.register(form.state()).await.unwrap();

    let raw = std::fs::read_to_string(dir.path().join("loginData.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{"username": "alice", "password": "Abc123!"}])
    );
}
