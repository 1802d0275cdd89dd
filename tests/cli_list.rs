mod common;

use common::*;

#[test]
fn list_prints_catalog_in_order() {
    let env = TestEnv::new();

    let result = env.run(&["list"]);

    assert_success!(result);
    let names: Vec<&str> = result
        .stdout
        .lines()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "php", "laravel", "node", "react", "vue", "next", "svelte", "nuxt", "angular",
            "fastapi", "django", "wordpress"
        ]
    );
}

#[test]
fn verbose_list_shows_files() {
    let env = TestEnv::new();

    let result = env.run(&["list", "-v"]);

    assert_success!(result);
    assert_output_contains!(result, "    package.json (");
    assert_output_contains!(result, "    wp-config-sample.php (");
}

#[test]
fn list_json_has_one_event_per_template() {
    let env = TestEnv::new();

    let result = env.run(&["list", "--json"]);

    assert_success!(result);
    let events = result.json_events();
    assert_eq!(events.len(), 12);
    let wordpress = &events[11];
    assert_eq!(wordpress["name"], "wordpress");
    assert_eq!(wordpress["archive"], "wordpress.zip");
}
