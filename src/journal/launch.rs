use std::io;
use std::path::Path;
#[cfg(not(target_os = "windows"))]
use std::process::{Command, Stdio};

/// Hands a file to whatever the desktop has registered for it
pub trait Launcher {
    fn launch(&self, path: &Path) -> io::Result<()>;
}

/// Uses the platform's "open with default application" facility
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

#[cfg(target_os = "windows")]
impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> io::Result<()> {
        // ShellExecuteW; going through cmd.exe would parse `&`, `^`, `%` in the path
        tracing::debug!("Opening {} via ShellExecute", path.display());
        open::that(path)
    }
}

#[cfg(not(target_os = "windows"))]
impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> io::Result<()> {
        let mut cmd = open_command(path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let program = cmd.get_program().to_string_lossy().into_owned();
        tracing::debug!("Launching {} {}", program, path.display());

        let status = cmd.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{} exited with {}", program, status)))
        }
    }
}

/// The path is passed as a single argument, never through a shell
#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
