//! Supported package managers and the commands used to drive them.

use std::fmt;

use clap::ValueEnum;

/// Command lines for one package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManagerCommands {
    /// Installs the dependencies the template's manifest declares
    pub init: &'static str,
    /// Adds a development dependency; the package spec is appended
    pub dev_install: &'static str,
    pub build: &'static str,
}

/// A package manager the scaffolder knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

const NPM: PackageManagerCommands = PackageManagerCommands {
    init: "npm install",
    dev_install: "npm install --save-dev",
    build: "npm run build",
};

const PNPM: PackageManagerCommands = PackageManagerCommands {
    init: "pnpm install",
    dev_install: "pnpm add --save-dev",
    build: "pnpm run build",
};

const YARN: PackageManagerCommands = PackageManagerCommands {
    init: "yarn install",
    dev_install: "yarn add --dev",
    build: "yarn run build",
};

impl PackageManager {
    /// All managers, in the order they are offered to the user.
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
    ];

    /// The manager used when nothing else decides.
    pub const DEFAULT: PackageManager = PackageManager::Npm;

    pub fn commands(self) -> &'static PackageManagerCommands {
        match self {
            PackageManager::Npm => &NPM,
            PackageManager::Pnpm => &PNPM,
            PackageManager::Yarn => &YARN,
        }
    }

    /// Executable name, also used for the availability probe.
    pub fn executable(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn lockfile(self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
        }
    }

    /// Command line that adds `package` as a development dependency.
    pub fn dev_install_command(self, package: &str) -> String {
        format!("{} {}", self.commands().dev_install, package)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_use_own_executable() {
        for manager in PackageManager::ALL {
            let commands = manager.commands();
            let exe = manager.executable();
            assert!(commands.init.starts_with(exe));
            assert!(commands.dev_install.starts_with(exe));
            assert!(commands.build.starts_with(exe));
        }
    }

    #[test]
    fn test_dev_install_command() {
        assert_eq!(
            PackageManager::Yarn.dev_install_command("roblox-ts@3.0.0"),
            "yarn add --dev roblox-ts@3.0.0"
        );
    }

    #[test]
    fn test_lockfiles_are_distinct() {
        assert_eq!(PackageManager::Npm.lockfile(), "package-lock.json");
        assert_eq!(PackageManager::Pnpm.lockfile(), "pnpm-lock.yaml");
        assert_eq!(PackageManager::Yarn.lockfile(), "yarn.lock");
    }

    #[test]
    fn test_value_enum_parses_cli_names() {
        assert_eq!(
            PackageManager::from_str("pnpm", false).unwrap(),
            PackageManager::Pnpm
        );
        assert!(PackageManager::from_str("bun", false).is_err());
    }
}
