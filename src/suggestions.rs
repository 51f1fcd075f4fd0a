//! # Error Suggestions
//!
//! Hint text attached to errors. Errors should tell users what went wrong
//! AND how to fix it; the wording for each fix lives here so it stays
//! consistent across the places that raise the same problem.

use crate::options::GitProtocol;

/// Install instructions for a missing git executable.
pub fn install_git() -> String {
    "Install Git from https://git-scm.com/downloads and make sure `git` is on your PATH".to_string()
}

/// Remediation for a failed auxiliary repository clone.
///
/// The advice depends on which protocol was used, since SSH failures are
/// almost always key problems and HTTPS failures are usually credentials.
pub fn repository_clone_failed(protocol: GitProtocol, output: &str) -> String {
    let auth_failure = output.contains("Authentication failed")
        || output.contains("Permission denied")
        || output.contains("Could not read from remote repository");

    match (protocol, auth_failure) {
        (GitProtocol::Ssh, true) => {
            "Make sure your SSH key is added to ssh-agent, or re-run with --gitProtocol https"
                .to_string()
        }
        (GitProtocol::Https, true) => {
            "Check your Git credentials, or re-run with --gitProtocol ssh".to_string()
        }
        _ => "Check the repository URL in your repositories file and your network connection"
            .to_string(),
    }
}
