use std::env;

use bitrise_io_plugin::commands::{add_auth_token, apps, builds, BuildsArgs, ListArgs};
use bitrise_io_plugin::config::ProcessConfig;
use bitrise_io_plugin::credentials::{CredentialError, CredentialStore};
use bitrise_io_plugin::pagination::ArgumentError;
use tempfile::TempDir;

fn config_with_data_dir(dir: &TempDir) -> ProcessConfig {
    ProcessConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ci_mode: false,
    }
}

#[test]
fn add_auth_token_persists_the_token_for_later_commands() {
    let dir = TempDir::new().unwrap();
    let config = config_with_data_dir(&dir);

    add_auth_token::run("my-personal-access-token", &config).unwrap();

    let stored = CredentialStore::new(&config).get().unwrap();
    assert_eq!(stored, "my-personal-access-token");
}

#[test]
fn add_auth_token_fails_without_a_data_dir() {
    let config = ProcessConfig {
        data_dir: None,
        ci_mode: false,
    };

    let err = add_auth_token::run("token", &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CredentialError>(),
        Some(CredentialError::DataDirUnset)
    ));
}

#[tokio::test]
async fn builds_requires_an_app_slug_before_touching_the_network() {
    env::remove_var("APP_SLUG");
    let dir = TempDir::new().unwrap();
    let config = config_with_data_dir(&dir);

    let err = builds::run(BuildsArgs::default(), &config)
        .await
        .unwrap_err();

    let arg_err = err
        .downcast_ref::<ArgumentError>()
        .expect("expected an argument error");
    let ArgumentError::MissingParam { flag, env } = arg_err;
    assert_eq!(*flag, "app-slug");
    assert_eq!(*env, "APP_SLUG");
}

#[tokio::test]
async fn apps_reports_a_missing_token_instead_of_calling_the_api() {
    let dir = TempDir::new().unwrap();
    let config = config_with_data_dir(&dir);

    let err = apps::run(ListArgs::default(), &config).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CredentialError>(),
        Some(CredentialError::NotFound)
    ));
}
