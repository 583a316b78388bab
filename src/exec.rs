//! Process execution used by both tool wrappers.
//!
//! [`CommandRunner`] is the seam between the wrappers and the operating
//! system: [`SystemCommandRunner`] spawns real processes, tests swap in the
//! generated `MockCommandRunner`.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{NexusError, NexusResult};

/// Captured result of one finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status, used when stderr is not reported
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs an external program to completion and captures its output.
///
/// Implementations must fail with [`NexusError::ToolNotFound`] when the
/// program cannot be located and [`NexusError::Execution`] when it cannot be
/// started. A non-zero exit is not an error at this level; callers decide.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: Vec<String>) -> NexusResult<CommandOutput>;
}

/// Spawns processes with [`std::process::Command`], no shell involved
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: Vec<String>) -> NexusResult<CommandOutput> {
        let path =
            find_program(program).ok_or_else(|| NexusError::ToolNotFound(program.to_string()))?;

        debug!(program = %path.display(), argc = args.len(), "spawning");

        let output = Command::new(&path)
            .args(&args)
            .output()
            .map_err(|e| NexusError::execution(program, e.to_string()))?;

        let output = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(program, status = %output.status_text(), "process exited");

        Ok(output)
    }
}

/// Locate `program` the way a shell would.
///
/// Names containing a path separator are checked as-is; bare names are
/// searched in every `PATH` entry. Looked up on every call, never cached.
pub fn find_program(program: &str) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_tool_not_found() {
        let missing = "nexus-nmcli-definitely-not-installed";
        let err = SystemCommandRunner.run(missing, vec![]).unwrap_err();
        assert!(matches!(err, NexusError::ToolNotFound(ref name) if name == missing));
    }

    #[test]
    fn empty_program_is_not_found() {
        assert!(find_program("").is_none());
    }

    #[test]
    fn missing_absolute_path_is_not_found() {
        assert!(find_program("/nonexistent/dir/nmcli").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_stderr_and_exit_code() {
        let output = SystemCommandRunner
            .run(
                "sh",
                vec![
                    "-c".to_string(),
                    "echo out; echo err >&2; exit 3".to_string(),
                ],
            )
            .unwrap();

        assert_eq!(output.code, Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert_eq!(output.status_text(), "exit status 3");
    }

    #[cfg(unix)]
    #[test]
    fn program_that_cannot_start_is_execution_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nmcli");
        std::fs::write(&path, "#!/nonexistent/interpreter\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let program = path.to_str().unwrap();
        assert_eq!(find_program(program), Some(path.clone()));
        match SystemCommandRunner.run(program, vec![]) {
            Err(NexusError::Execution { program: name, .. }) => assert_eq!(name, program),
            other => panic!("expected execution error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_not_shell_interpolated() {
        let output = SystemCommandRunner
            .run(
                "sh",
                vec![
                    "-c".to_string(),
                    "printf '%s' \"$1\"".to_string(),
                    "sh".to_string(),
                    "$HOME; echo pwned".to_string(),
                ],
            )
            .unwrap();

        assert!(output.success());
        assert_eq!(output.stdout, "$HOME; echo pwned");
    }
}
