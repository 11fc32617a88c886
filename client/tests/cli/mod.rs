// standard crates
use std::process::{Command as Process, ExitCode};

// internal crates
use crate::http::mock::{run_server, Server};
use deviceconnect_client::cli::{run, Args, Command, USAGE_ERROR};

fn args(list: &[&str]) -> Args {
    Args::parse(list.iter().map(|arg| arg.to_string()))
}

fn host_flag(server: &Server) -> String {
    format!("--host={}", server.base_url)
}

pub mod parse {
    use super::*;

    #[test]
    fn command_and_flags() {
        let parsed = args(&[
            "check-update",
            "--host=http://localhost:8080",
            "--tenant-id=tnt_1",
            "--device-id=dvc=1",
            "--version",
            "ignored",
        ]);
        assert_eq!(parsed.command.as_deref(), Some("check-update"));
        assert_eq!(parsed.flag("host"), Some("http://localhost:8080"));
        assert_eq!(parsed.flag("tenant-id"), Some("tnt_1"));
        assert_eq!(parsed.flag("device-id"), Some("dvc=1"));
        assert_eq!(parsed.flag("version"), Some("true"));
        assert_eq!(parsed.flag("config"), None);
    }

    #[test]
    fn no_arguments() {
        assert_eq!(args(&[]), Args::default());
    }

    #[test]
    fn commands() {
        let cases = [
            ("alive", Some(Command::Alive)),
            ("health", Some(Command::Health)),
            ("provision-tenant", Some(Command::ProvisionTenant)),
            ("provision-device", Some(Command::ProvisionDevice)),
            ("delete-device", Some(Command::DeleteDevice)),
            ("check-update", Some(Command::CheckUpdate)),
            ("send-inventory", Some(Command::SendInventory)),
            ("check_update", None),
            ("", None),
        ];
        for (name, expected) in cases {
            assert_eq!(Command::parse(name), expected, "name: {name:?}");
        }
    }
}

pub mod exit_status {
    use super::*;

    #[tokio::test]
    async fn missing_command_is_usage_error() {
        assert_eq!(run(args(&[])).await, ExitCode::from(USAGE_ERROR));
    }

    #[tokio::test]
    async fn unknown_command_is_usage_error() {
        assert_eq!(
            run(args(&["reboot", "--device-id=dvc_1"])).await,
            ExitCode::from(USAGE_ERROR)
        );
    }

    #[tokio::test]
    async fn version_needs_no_command() {
        assert_eq!(run(args(&["--version"])).await, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn unreadable_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = format!("--config={}", dir.path().join("missing.json").display());
        assert_eq!(run(args(&["alive", &config])).await, ExitCode::FAILURE);
    }
}

pub mod commands {
    use super::*;

    #[tokio::test]
    #[serial_test::serial(global_subscriber)]
    async fn provision_then_trigger() {
        let server = run_server().await;
        let host = host_flag(&server);

        let code = run(args(&["provision-tenant", &host, "--tenant-id=tnt_1"])).await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(*server.backend.tenants.lock().unwrap(), vec!["tnt_1".to_string()]);

        let code = run(args(&[
            "provision-device",
            &host,
            "--tenant-id=tnt_1",
            "--device-id=dvc_1",
        ]))
        .await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(server.backend.has_device("tnt_1", "dvc_1"));

        // provisioned devices start out disconnected
        let code = run(args(&[
            "check-update",
            &host,
            "--tenant-id=tnt_1",
            "--device-id=dvc_1",
        ]))
        .await;
        assert_eq!(code, ExitCode::FAILURE);

        server.backend.connect("tnt_1", "dvc_1");
        let code = run(args(&[
            "send-inventory",
            &host,
            "--tenant-id=tnt_1",
            "--device-id=dvc_1",
        ]))
        .await;
        assert_eq!(code, ExitCode::SUCCESS);

        let code = run(args(&[
            "delete-device",
            &host,
            "--tenant-id=tnt_1",
            "--device-id=dvc_1",
        ]))
        .await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(!server.backend.has_device("tnt_1", "dvc_1"));
    }

    #[tokio::test]
    #[serial_test::serial(global_subscriber)]
    async fn missing_device_id_fails_without_request() {
        let server = run_server().await;
        let code = run(args(&["check-update", &host_flag(&server), "--tenant-id=tnt_1"])).await;
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            server
                .backend
                .hits
                .load(std::sync::atomic::Ordering::SeqCst),
            0
        );
    }

    #[tokio::test]
    #[serial_test::serial(global_subscriber)]
    async fn host_from_config_file_is_overridden() {
        let server = run_server().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, r#"{"host": "http://127.0.0.1:1", "log_level": "debug"}"#)
            .await
            .unwrap();
        let config = format!("--config={}", path.display());

        let code = run(args(&["alive", &config, &host_flag(&server)])).await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(
            server
                .backend
                .hits
                .load(std::sync::atomic::Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    #[serial_test::serial(global_subscriber)]
    async fn unhealthy_service_fails() {
        let server = run_server().await;
        server
            .backend
            .unhealthy
            .store(true, std::sync::atomic::Ordering::SeqCst);
        let code = run(args(&["health", &host_flag(&server)])).await;
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    #[serial_test::serial(global_subscriber)]
    async fn log_dir_is_accepted() {
        let server = run_server().await;
        let dir = tempfile::tempdir().unwrap();
        let log_dir = format!("--log-dir={}", dir.path().display());
        let code = run(args(&["alive", &host_flag(&server), &log_dir])).await;
        assert_eq!(code, ExitCode::SUCCESS);
    }
}

pub mod binary {
    use super::*;

    const BIN: &str = env!("CARGO_BIN_EXE_deviceconnect-client");

    #[test]
    fn no_command_exits_with_usage_error() {
        let output = Process::new(BIN).output().unwrap();
        assert_eq!(output.status.code(), Some(i32::from(USAGE_ERROR)));
        assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));
    }

    #[test]
    fn unknown_command_exits_with_usage_error() {
        let output = Process::new(BIN).arg("reboot").output().unwrap();
        assert_eq!(output.status.code(), Some(i32::from(USAGE_ERROR)));
    }

    #[test]
    fn version() {
        let output = Process::new(BIN).arg("--version").output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stdout).contains("BuildInfo"));
    }

    #[tokio::test]
    async fn operation_against_server() {
        let server = run_server().await;
        server.backend.connect("tnt_1", "dvc_1");
        let host = host_flag(&server);

        let output = tokio::task::spawn_blocking(move || {
            Process::new(BIN)
                .args([
                    "check-update",
                    host.as_str(),
                    "--tenant-id=tnt_1",
                    "--device-id=dvc_1",
                ])
                .output()
                .unwrap()
        })
        .await
        .unwrap();
        assert_eq!(output.status.code(), Some(0));

        let host = host_flag(&server);
        let output = tokio::task::spawn_blocking(move || {
            Process::new(BIN)
                .args(["check-update", host.as_str(), "--device-id=dvc_404"])
                .output()
                .unwrap()
        })
        .await
        .unwrap();
        assert_eq!(output.status.code(), Some(1));
    }
}
