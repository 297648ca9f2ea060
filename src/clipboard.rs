/*!
 * Clipboard delivery for file-copier
 *
 * Pipes the generated document into whichever clipboard tool the host
 * provides.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Host platform, as far as clipboard tooling is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Wsl,
    Linux,
    Android,
    Unknown,
}

/// A clipboard tool reading the text to copy from stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    /// tmux paste buffer
    Tmux,
    /// Wayland
    WlCopy,
    /// X11 via xsel
    Xsel,
    /// X11 via xclip
    Xclip,
    /// macOS
    Pbcopy,
    /// Windows and WSL
    ClipExe,
    /// Termux on Android
    Termux,
}

impl ClipboardProvider {
    /// Program to run
    fn program(self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::WlCopy => "wl-copy",
            Self::Xsel => "xsel",
            Self::Xclip => "xclip",
            Self::Pbcopy => "pbcopy",
            Self::ClipExe => "clip.exe",
            Self::Termux => "termux-clipboard-set",
        }
    }

    /// Arguments making the program read from stdin
    fn args(self) -> &'static [&'static str] {
        match self {
            Self::Tmux => &["load-buffer", "-w", "-"],
            Self::Xsel => &["-b", "-i"],
            Self::Xclip => &["-selection", "clipboard", "-in"],
            Self::WlCopy | Self::Pbcopy | Self::ClipExe | Self::Termux => &[],
        }
    }

    /// Candidate providers for a platform, in order of preference
    pub fn candidates(platform: Platform) -> &'static [ClipboardProvider] {
        match platform {
            Platform::MacOS => &[Self::Pbcopy],
            Platform::Windows | Platform::Wsl => &[Self::ClipExe],
            Platform::Linux => &[Self::WlCopy, Self::Xsel, Self::Xclip],
            Platform::Android => &[Self::Termux],
            Platform::Unknown => &[],
        }
    }

    /// Pipe `text` into the provider's command
    pub fn copy(self, text: &str) -> Result<()> {
        let cmd = self.program();

        let mut child = Command::new(cmd)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::CommandFailed(format!("failed to spawn {}: {}", cmd, e)))?;

        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                ClipboardError::CommandFailed(format!("failed to open stdin for {}", cmd))
            })?;
            stdin.write_all(text.as_bytes()).map_err(|e| {
                ClipboardError::CommandFailed(format!("failed to write to {}: {}", cmd, e))
            })?;
        }
        // Close stdin so the tool sees EOF
        drop(child.stdin.take());

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(format!(
                "{} exited with status: {}",
                cmd, status
            )))
        }
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// Copy text to the clipboard using the first available provider
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = detect_provider().ok_or(ClipboardError::NoClipboardFound)?;
    log::debug!("Using clipboard provider {:?}", provider);
    provider.copy(text)
}

/// Check if a command is available on the PATH
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(command).is_file()))
        .unwrap_or(false)
}

/// Determine the platform (cached)
pub fn platform() -> Platform {
    static PLATFORM: OnceLock<Platform> = OnceLock::new();

    *PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "linux") {
            if env::var_os("WSL_DISTRO_NAME").is_some() {
                Platform::Wsl
            } else {
                Platform::Linux
            }
        } else {
            Platform::Unknown
        }
    })
}

//--------------------------------------------------------------------
// Internal Implementation
//--------------------------------------------------------------------

/// Pick the provider to use, preferring tmux inside a tmux session
fn detect_provider() -> Option<ClipboardProvider> {
    if env::var_os("TMUX").is_some() && command_exists("tmux") {
        return Some(ClipboardProvider::Tmux);
    }

    ClipboardProvider::candidates(platform())
        .iter()
        .copied()
        .find(|provider| command_exists(provider.program()))
}
