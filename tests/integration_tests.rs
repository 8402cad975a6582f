//! Integration tests for appfeed
//!
//! These tests verify:
//! - Descriptor loading → release fetching → assembly → writing
//! - Per-application failure isolation across a whole run
//! - Document round-trip through the written file

use appfeed::assembler::{Assembler, SkipReason};
use appfeed::config::{load_app_configs, load_repository_config};
use appfeed::domain::RepositoryDocument;
use appfeed::error::ForgeError;
use appfeed::forge::{Release, ReleaseAsset, ReleaseFetcher, ReleaseSource};
use appfeed::output::write_document;
use appfeed::scaffold::{Scaffold, TemplateKind};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Release source answering from a fixed table; missing repos fail
struct FixtureSource {
    releases: HashMap<String, Vec<Release>>,
}

#[async_trait]
impl ReleaseSource for FixtureSource {
    fn service_name(&self) -> &'static str {
        "fixture"
    }

    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        _per_page: u32,
    ) -> Result<Vec<Release>, ForgeError> {
        let slug = format!("{}/{}", owner, repo);
        self.releases
            .get(&slug)
            .cloned()
            .ok_or_else(|| ForgeError::network_error(slug, "connection reset"))
    }
}

fn release(tag: &str, day: u32, assets: &[(&str, u64)], draft: bool, prerelease: bool) -> Release {
    Release {
        tag_name: tag.to_string(),
        draft,
        prerelease,
        created_at: Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap(),
        published_at: Some(Utc.with_ymd_and_hms(2024, 5, day, 8, 0, 0).unwrap()),
        assets: assets
            .iter()
            .map(|(name, size)| ReleaseAsset {
                name: name.to_string(),
                size: *size,
                browser_download_url: format!("https://github.com/dl/{}/{}", tag, name),
            })
            .collect(),
    }
}

fn write_app(dir: &TempDir, file: &str, name: &str, owner: &str, extra: &str) {
    let yaml = format!(
        r#"name: {name}
bundleIdentifier: com.example.{owner}
developerName: {owner}
iconURL: https://example.com/{owner}.png
localizedDescription: "{name} description"
subtitle: Subtitle
tintColor: "848ef9"
screenshotURLs:
  - https://example.com/{owner}/1.png
github:
  owner: {owner}
  repo: app
{extra}"#
    );
    fs::write(dir.path().join("apps").join(file), yaml).unwrap();
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::create_dir(dir.path().join("apps")).unwrap();
    fs::write(
        dir.path().join("repo-config.yaml"),
        "name: Source\nidentifier: com.example.source\niconURL: https://example.com/i.png\nwebsite: https://example.com\n",
    )
    .unwrap();
    dir
}

async fn run(
    dir: &TempDir,
    releases: HashMap<String, Vec<Release>>,
) -> (RepositoryDocument, Vec<SkipReason>) {
    let repo_config = load_repository_config(&dir.path().join("repo-config.yaml")).unwrap();
    let apps = load_app_configs(&dir.path().join("apps")).unwrap();

    let assembler = Assembler::new(ReleaseFetcher::new(Box::new(FixtureSource { releases })));
    let outcome = assembler.assemble(repo_config, apps).await;

    let output = dir.path().join("output").join("app-repo.json");
    write_document(&outcome.document, &output).unwrap();

    let written: RepositoryDocument =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, outcome.document, "written document should round-trip");

    let reasons = outcome.skipped.into_iter().map(|s| s.reason).collect();
    (written, reasons)
}

#[tokio::test]
async fn test_failed_app_does_not_block_later_app() {
    let dir = workspace();
    write_app(&dir, "a-broken.yaml", "Broken", "broken", "");
    write_app(&dir, "b-working.yaml", "Working", "working", "");

    let mut releases = HashMap::new();
    releases.insert(
        "working/app".to_string(),
        vec![release("v1.0.0", 1, &[("Working.ipa", 100)], false, false)],
    );

    let (doc, skipped) = run(&dir, releases).await;

    assert_eq!(doc.apps.len(), 1);
    assert_eq!(doc.apps[0].name, "Working");
    assert_eq!(skipped.len(), 1);
    assert!(matches!(&skipped[0], SkipReason::FetchFailed(msg) if msg.contains("broken/app")));
}

#[tokio::test]
async fn test_freshly_scaffolded_app_is_skipped_not_fatal() {
    let dir = workspace();
    let templates = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
    Scaffold::new(dir.path().join("apps"), templates)
        .create(Some("New App"), TemplateKind::Basic)
        .unwrap();
    write_app(&dir, "working.yaml", "Working", "working", "");

    let mut releases = HashMap::new();
    releases.insert(
        "working/app".to_string(),
        vec![release("v1.0.0", 1, &[("Working.ipa", 100)], false, false)],
    );

    let (doc, skipped) = run(&dir, releases).await;

    assert_eq!(doc.apps.len(), 1);
    assert_eq!(doc.apps[0].name, "Working");
    assert_eq!(skipped.len(), 1);
    assert!(matches!(&skipped[0], SkipReason::FetchFailed(msg) if msg.contains("must be set")));
}

#[tokio::test]
async fn test_apps_without_usable_releases_are_absent() {
    let dir = workspace();
    write_app(&dir, "only-pre.yaml", "OnlyPre", "pre", "");
    write_app(&dir, "no-match.yaml", "NoMatch", "nomatch", "");

    let mut releases = HashMap::new();
    releases.insert(
        "pre/app".to_string(),
        vec![
            release("v2.0.0", 2, &[("App.ipa", 1)], true, false),
            release("v1.9.0", 1, &[("App.ipa", 1)], false, true),
        ],
    );
    releases.insert(
        "nomatch/app".to_string(),
        vec![release("v1.0.0", 1, &[("App.zip", 1)], false, false)],
    );

    let (doc, skipped) = run(&dir, releases).await;

    assert!(doc.apps.is_empty());
    assert_eq!(skipped, vec![SkipReason::NoVersions, SkipReason::NoVersions]);
}

#[tokio::test]
async fn test_custom_pattern_and_version_limit() {
    let dir = workspace();
    write_app(
        &dir,
        "signed.yaml",
        "Signed",
        "signed",
        "  assetPattern: \"*-signed.ipa\"\n  maxVersions: 2\n",
    );

    let mut releases = HashMap::new();
    releases.insert(
        "signed/app".to_string(),
        vec![
            release("v3.0.0", 3, &[("App.ipa", 30), ("App-signed.ipa", 31)], false, false),
            release("2.0.0", 2, &[("App-signed.ipa", 21)], false, false),
            release("v1.0.0", 1, &[("App-signed.ipa", 11)], false, false),
        ],
    );

    let (doc, _) = run(&dir, releases).await;
    let app = &doc.apps[0];

    let versions: Vec<_> = app.versions.iter().map(|v| v.version.as_str()).collect();
    assert_eq!(versions, vec!["3.0.0", "2.0.0"]);
    assert_eq!(app.size, 31);
    assert_eq!(app.download_url, "https://github.com/dl/v3.0.0/App-signed.ipa");
    assert_eq!(app.version_date, app.versions[0].date);
}

#[tokio::test]
async fn test_permissions_survive_the_pipeline() {
    let dir = workspace();
    write_app(&dir, "perm.yaml", "Perm", "perm", "");
    let path = dir.path().join("apps").join("perm.yaml");
    let mut yaml = fs::read_to_string(&path).unwrap();
    yaml.push_str("appPermissions:\n  entitlements:\n    - com.apple.developer.healthkit\n  privacy:\n    NSCameraUsageDescription: Scanning\n");
    fs::write(&path, yaml).unwrap();

    let mut releases = HashMap::new();
    releases.insert(
        "perm/app".to_string(),
        vec![release("v1.0.0", 1, &[("Perm.ipa", 5)], false, false)],
    );

    let (doc, _) = run(&dir, releases).await;
    let permissions = &doc.apps[0].app_permissions;
    assert_eq!(
        permissions["entitlements"],
        serde_json::json!(["com.apple.developer.healthkit"])
    );
    assert_eq!(permissions["privacy"]["NSCameraUsageDescription"], "Scanning");
}
