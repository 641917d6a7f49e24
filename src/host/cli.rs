//! External command execution.
//!
//! Runs platform commands (netsh, networksetup, nmcli) and returns their stdout.

use crate::config::MAX_COMMAND_OUTPUT;
use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// Blocks until the process exits.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command cannot start, exits non-zero, or produces too much output
pub fn run(cmd: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds
        .split_first()
        .ok_or_else(|| format!("Empty command: '{cmd}'"))?;

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::debug!("Command execution failed: {}", e);
        format!("Failed to execute {program}: {e}")
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running {cmd}: {status}", status = output.status).into());
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());

    if output.stdout.len() > MAX_COMMAND_OUTPUT {
        return Err(format!(
            "Response too large: {} bytes for command: {:?}",
            output.stdout.len(),
            cmds
        )
        .into());
    }

    // netsh may print in a legacy code page; a lossy decode keeps ASCII keys readable.
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_netsh() {
        let expected = vec!["netsh", "wlan", "show", "interfaces"];
        assert_eq!(split_and_strip("netsh wlan show interfaces"), expected);
    }

    #[test]
    fn test_split_and_strip_quoted() {
        let input = "networksetup -getairportnetwork 'Wi-Fi Port'";
        let expected = vec!["networksetup", "-getairportnetwork", "Wi-Fi Port"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_nospaces() {
        assert_eq!(split_and_strip("iwgetid"), vec!["iwgetid"]);
    }

    #[test]
    fn test_run_empty_command() {
        assert!(run("").is_err());
    }

    #[test]
    fn test_run_missing_program() {
        assert!(run("definitely-not-a-real-program-4f1c --version").is_err());
    }
}
