//! Command line behavior of the packager binary.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;

fn packager() -> Command {
    let mut cmd = Command::cargo_bin("native-windivert-packager").unwrap();
    for var in [
        "WINDIVERT_URL",
        "PACKAGER_BASE_DIR",
        "PACKAGER_PACKAGE_ID",
        "PACKAGER_GIT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_overrides() {
    packager()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-dir"))
        .stdout(predicate::str::contains("--url"));
}

#[test]
fn invalid_url_is_rejected_by_parser() {
    packager()
        .args(["--url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn reserved_package_id_exits_with_error() {
    let base = support::base_dir();
    packager()
        .args(["--package-id", "Publish", "--base-dir"])
        .arg(base.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn missing_git_exits_with_error_and_writes_nothing() {
    let base = support::base_dir();
    packager()
        .args(["--git", "definitely-not-a-git-binary", "--url", "http://127.0.0.1:9/a.zip"])
        .arg("--base-dir")
        .arg(base.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));

    assert!(!base.path().join("Publish").exists());
}

#[cfg(unix)]
#[test]
fn full_run_with_fake_git() {
    use std::os::unix::fs::PermissionsExt;

    let base = support::base_dir();
    let git = base.path().join("fake-git");
    std::fs::write(
        &git,
        "#!/bin/sh\n\
         case \"$1 $2\" in\n\
         \"config user.name\") echo alice ;;\n\
         \"remote \") echo origin ;;\n\
         \"remote get-url\") echo https://example.com/repo.git ;;\n\
         *) echo origin ;;\n\
         esac\n",
    )
    .unwrap();
    std::fs::set_permissions(&git, std::fs::Permissions::from_mode(0o755)).unwrap();

    let url = support::serve_once(support::ReleaseZip::complete("2.2.2").bytes());

    packager()
        .env("NO_PROXY", "127.0.0.1")
        .arg("--git")
        .arg(&git)
        .arg("--base-dir")
        .arg(base.path())
        .args(["--url", url.as_str(), "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SHA256:"))
        .stdout(predicate::str::contains("Done."));

    let package = base.path().join("Publish").join("Native.WinDivert.2.2.2.nupkg");
    let nuspec = support::read_entry(&package, "Native.WinDivert.nuspec");
    assert!(nuspec.contains("<authors>alice</authors>"));
    assert!(nuspec.contains("https://example.com/repo.git"));
}
