//! Test driver for argdump integration tests.
//!
//! Spawns `argdump` with:
//! - stdin: closed (`/dev/null`)
//! - stdout and stderr: pipes, captured for assertions

use std::process::{Child, Command, Stdio};

/// A running argdump process.
pub struct TestSession {
    child: Child,
}

impl TestSession {
    /// Spawn `binary` with the given arguments.
    ///
    /// `env` are additional environment variables to set.
    pub fn spawn(
        binary: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> std::io::Result<TestSession> {
        Self::spawn_in(binary, args, env, None)
    }

    /// Like `spawn`, but with an optional working directory.
    pub fn spawn_in(
        binary: &str,
        args: &[&str],
        env: &[(&str, &str)],
        cwd: Option<&str>,
    ) -> std::io::Result<TestSession> {
        let mut cmd = Command::new(binary);
        cmd.args(args);
        // Keep library debug output out of captured stderr unless a test
        // asks for it.
        cmd.env_remove("RUST_LOG");
        for (k, v) in env {
            cmd.env(k, v);
        }
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let child = cmd.spawn()?;
        Ok(TestSession { child })
    }

    /// Wait for the child to exit and assert the exit code.
    pub fn wait_exit(self, expected_code: i32) -> SessionOutput {
        let output = self
            .child
            .wait_with_output()
            .expect("failed to wait for child");
        let code = output.status.code().unwrap_or(-1);

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert_eq!(
            code, expected_code,
            "expected exit code {expected_code}, got {code}\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );

        SessionOutput { stdout, stderr }
    }
}

/// Output captured from a completed session.
pub struct SessionOutput {
    pub stdout: String,
    pub stderr: String,
}
