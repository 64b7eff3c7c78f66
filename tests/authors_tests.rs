//! End-to-end tests for `blogshift authors`

mod common;

use predicates::prelude::*;

#[test]
fn test_authors_registry_format() {
    let workspace = common::TestWorkspace::with_jekyll_fixture();

    common::blogshift_cmd(&workspace)
        .arg("authors")
        .assert()
        .success()
        .stdout(predicate::str::contains("kenneth-kilty"))
        .stdout(predicate::str::contains("jane-doe"))
        .stdout(predicate::str::contains("Wrote 2 authors"));

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&workspace.read_file("docusaurus/blog/authors.yml")).unwrap();

    let kk = &yaml["kenneth-kilty"];
    assert_eq!(kk["name"], "Kenneth Kilty");
    assert_eq!(kk["title"], "Cloud engineer");
    assert_eq!(kk["url"], "https://github.com/kkilty");
    assert_eq!(kk["image_url"], "https://avatars.example.com/kk.png");
    assert_eq!(kk["socials"]["x"], "kkilty");
    assert_eq!(kk["socials"]["github"], "kkilty");
    assert_eq!(kk["socials"]["email"], "kk@example.com");

    let jd = &yaml["jane-doe"];
    assert_eq!(jd["name"], "Jane Doe");
    assert_eq!(jd["url"], "https://www.linkedin.com/in/janedoe/");
    assert_eq!(jd["socials"]["linkedin"], "janedoe");
    assert_eq!(jd["socials"]["website"], "https://jane.example.com/");
    assert!(jd.get("image_url").is_none());
}

#[test]
fn test_authors_registry_keeps_listing_order() {
    let workspace = common::TestWorkspace::with_jekyll_fixture();
    common::blogshift_cmd(&workspace).arg("authors").assert().success();

    let text = workspace.read_file("docusaurus/blog/authors.yml");
    let kk = text.find("kenneth-kilty:").unwrap();
    let jd = text.find("jane-doe:").unwrap();
    assert!(kk < jd);
}

#[test]
fn test_authors_files_format() {
    let workspace = common::TestWorkspace::with_jekyll_fixture();

    common::blogshift_cmd(&workspace)
        .args(["authors", "--format", "files"])
        .assert()
        .success();

    assert_eq!(
        workspace.list_dir("docusaurus/blog/authors"),
        ["index.js", "jane-doe.json", "kenneth-kilty.json"]
    );

    let record: serde_json::Value =
        serde_json::from_str(&workspace.read_file("docusaurus/blog/authors/kenneth-kilty.json"))
            .unwrap();
    assert_eq!(record["name"], "Kenneth Kilty");
    assert_eq!(record["url"], "https://github.com/kkilty");
    assert!(record.get("socials").is_none());

    let index_js = workspace.read_file("docusaurus/blog/authors/index.js");
    assert!(index_js.contains("import jane_doe from './jane-doe.json';"));
    assert!(index_js.contains("'kenneth-kilty': kenneth_kilty,"));
}

#[test]
fn test_authors_missing_listing_fails() {
    let workspace = common::TestWorkspace::new();
    common::blogshift_cmd(&workspace)
        .arg("authors")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_authors_malformed_listing_fails() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("jekyll/_data/authors.yml", "- just\n- a list\n");
    common::blogshift_cmd(&workspace)
        .arg("authors")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse author listing"));
}
