//! Integration tests for plugin discovery and concurrent dispatch, driving
//! real subprocess notifiers.

use std::{os::unix::fs::PermissionsExt, path::PathBuf, sync::Arc};

use checker::{
    dispatcher::{FAILURE_SENTINEL, NotifierDispatcher, discover_scripts},
    models::{CheckEvent, NotifierOutcome},
    notifiers::{Notifier, ScriptNotifier},
};

fn write_script(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn event() -> CheckEvent {
    CheckEvent {
        hostname: "web01".to_string(),
        check_id: "disk".to_string(),
        exit_code: "2".to_string(),
        output: "disk full\nExit-Code: 2\n".to_string(),
    }
}

fn script_registry(paths: Vec<PathBuf>) -> Vec<Arc<dyn Notifier>> {
    paths.into_iter().map(|p| Arc::new(ScriptNotifier::new(p)) as Arc<dyn Notifier>).collect()
}

#[tokio::test]
async fn discovered_plugins_receive_args_and_the_record_on_stdin() {
    let plugin_dir = tempfile::tempdir().unwrap();
    let seen_args = plugin_dir.path().join("args");
    let seen_stdin = plugin_dir.path().join("stdin");
    write_script(
        &plugin_dir,
        "notify-spy.sh",
        &format!("echo \"$1 $2 $3\" > {}\ncat > {}", seen_args.display(), seen_stdin.display()),
    );

    let scripts = discover_scripts(plugin_dir.path(), ".sh").unwrap();
    assert_eq!(scripts.len(), 1);

    let dispatcher = NotifierDispatcher::new(script_registry(scripts));
    let summary = dispatcher.dispatch(event(), |_| {}).await;

    assert_eq!(summary.exit_code(), 0);
    assert_eq!(std::fs::read_to_string(&seen_args).unwrap(), "web01 disk 2\n");
    assert_eq!(std::fs::read_to_string(&seen_stdin).unwrap(), "disk full\nExit-Code: 2\n");
}

#[tokio::test]
async fn zero_discovered_plugins_is_success() {
    let plugin_dir = tempfile::tempdir().unwrap();
    let scripts = discover_scripts(plugin_dir.path(), ".sh").unwrap();
    assert!(scripts.is_empty());

    let dispatcher = NotifierDispatcher::new(script_registry(scripts));
    let summary = dispatcher.dispatch(event(), |_| {}).await;
    assert_eq!(summary.exit_code(), 0);
}

#[tokio::test]
async fn one_failing_plugin_yields_the_sentinel_and_every_plugin_runs() {
    let plugin_dir = tempfile::tempdir().unwrap();
    let ok_marker = plugin_dir.path().join("ok-ran");
    let late_marker = plugin_dir.path().join("late-ran");
    write_script(&plugin_dir, "notify-ok.sh", &format!("touch {}", ok_marker.display()));
    write_script(&plugin_dir, "notify-bad.sh", "echo broken >&2\nexit 5");
    write_script(
        &plugin_dir,
        "notify-slow.sh",
        &format!("sleep 1\ntouch {}", late_marker.display()),
    );

    let scripts = discover_scripts(plugin_dir.path(), ".sh").unwrap();
    let dispatcher = NotifierDispatcher::new(script_registry(scripts));
    let summary = dispatcher.dispatch(event(), |_| {}).await;

    assert_eq!(summary.exit_code(), FAILURE_SENTINEL);
    assert!(ok_marker.exists());
    assert!(late_marker.exists(), "a failing plugin must not abort the slow one");

    let failed: Vec<_> = summary.invocations.iter().filter(|i| !i.succeeded()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].outcome, NotifierOutcome::Failure(5));
    assert_eq!(failed[0].stderr, "broken\n");
}

#[tokio::test]
async fn non_executable_and_foreign_files_are_not_plugins() {
    let plugin_dir = tempfile::tempdir().unwrap();
    write_script(&plugin_dir, "notify-real.sh", "exit 0");

    let ignored = plugin_dir.path().join("notify-noexec.sh");
    std::fs::write(&ignored, "#!/bin/sh\nexit 1\n").unwrap();
    std::fs::set_permissions(&ignored, std::fs::Permissions::from_mode(0o644)).unwrap();
    std::fs::write(plugin_dir.path().join("README.md"), "not a plugin\n").unwrap();

    let scripts = discover_scripts(plugin_dir.path(), ".sh").unwrap();
    assert_eq!(scripts, vec![plugin_dir.path().join("notify-real.sh")]);
}
