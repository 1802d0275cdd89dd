//! Config file lookup and warnings

mod common;

use common::*;

#[test]
fn unknown_keys_warn_but_do_not_fail() {
    let env = TestEnv::with_project_config("[templates]\nparalel = true\n");

    let result = env.run(&["check"]);

    assert_success!(result);
    assert_output_contains!(result, "Unknown config key 'paralel'");
    assert_output_contains!(result, "localx-assets.toml:2");
    assert_output_contains!(result, "Did you mean 'parallel'?");
}

#[test]
fn user_config_applies_without_project_file() {
    let env = TestEnv::new();
    env.write_user_config("[templates]\noutput_dir = \"user-out\"\n");

    assert_success!(env.run(&["templates", "--only", "php"]));

    assert!(env.project_path("user-out/php.zip").is_file());
}

#[test]
fn project_file_replaces_user_file() {
    let env = TestEnv::with_project_config("[templates]\nonly = [\"node\"]\n");
    env.write_user_config("[templates]\noutput_dir = \"user-out\"\n");

    assert_success!(env.run(&["templates"]));

    // the user file is not merged underneath the project file
    assert!(env.project_path("assets/templates/node.zip").is_file());
    assert_eq!(zip_files_in(&env.project_path("assets/templates")), vec!["node.zip"]);
    assert!(!env.project_path("user-out").exists());
}

#[test]
fn explicit_config_flag_is_used_and_must_exist() {
    let env = TestEnv::new();
    env.write_project_file("ci/assets.toml", "[templates]\noutput_dir = \"ci-out\"\n");

    assert_success!(env.run(&["templates", "--only", "php", "--config", "ci/assets.toml"]));
    assert!(env.project_path("ci-out/php.zip").is_file());

    let missing = env.run(&["templates", "--config", "ci/missing.toml"]);
    assert_eq!(missing.exit_code, 1);
    assert_output_contains!(missing, "error: failed to read config");
}
