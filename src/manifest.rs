//! # Generated Configuration Patching
//!
//! After the template is copied, two JSON files are rewritten in place so the
//! project carries its own identity instead of the template's:
//!
//! - **`package.json`**: `name` becomes `<scope>/<project name>` and any
//!   GitHub `owner/repo` segment in `repository` points at the new project.
//! - **`default.project.json`** (Rojo project descriptor, optional): `name`
//!   follows the manifest, and for the package template the placeholder
//!   package entry in the project tree is renamed to the real package name.
//!
//! Files are written back tab-indented with their original key order.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, warn};
use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::defaults::{PACKAGE_SCOPE, REPOSITORY_OWNER};
use crate::error::{Error, Result};
use crate::template::TemplateMode;

pub const MANIFEST_FILE: &str = "package.json";
pub const PROJECT_DESCRIPTOR_FILE: &str = "default.project.json";

/// Location of the scoped package folder inside the descriptor's `tree`.
pub const SCOPED_PACKAGES_PATH: [&str; 4] =
    ["ReplicatedStorage", "rbxts_include", "node_modules", "@rbxts"];

/// What happened to the placeholder package key in the project descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageNodeRename {
    /// Not a package run, or the descriptor has no scoped packages node
    NotApplicable,
    /// The node exists but holds no placeholder key
    NoCandidate,
    Renamed { from: String, to: String },
    /// More than one placeholder key; none was renamed
    Ambiguous { candidates: Vec<String> },
}

/// Rewrite `name` and `repository` in `<dir>/package.json`.
///
/// Returns the new package name.
pub fn patch_manifest(dir: &Path, project_name: &str) -> Result<String> {
    let path = dir.join(MANIFEST_FILE);
    let mut manifest = read_json(&path)?;
    let object = as_object_mut(&mut manifest, &path)?;

    let package_name = format!("{}/{}", PACKAGE_SCOPE, project_name);
    object.insert("name".to_string(), Value::String(package_name.clone()));

    match object.get_mut("repository") {
        Some(Value::String(url)) => *url = rewrite_repository_url(url, project_name),
        Some(Value::Object(repository)) => {
            if let Some(Value::String(url)) = repository.get_mut("url") {
                *url = rewrite_repository_url(url, project_name);
            }
        }
        _ => {}
    }

    write_json(&path, &manifest)?;
    debug!("Patched {} with name {}", path.display(), package_name);
    Ok(package_name)
}

/// Point every `github.com/<owner>/<repo>` segment at the new project.
///
/// A trailing `.git` on the repository segment is kept.
pub fn rewrite_repository_url(url: &str, project_name: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"(github\.com[/:])[\w.-]+/([\w.-]+)").expect("repository pattern is valid")
    });

    pattern
        .replace_all(url, |caps: &Captures| {
            let suffix = if caps[2].ends_with(".git") { ".git" } else { "" };
            format!("{}{}/{}{}", &caps[1], REPOSITORY_OWNER, project_name, suffix)
        })
        .into_owned()
}

/// Patch `<dir>/default.project.json` if the template shipped one.
///
/// Returns `None` when there is no descriptor.
pub fn patch_project_descriptor(
    dir: &Path,
    package_name: &str,
    mode: TemplateMode,
) -> Result<Option<PackageNodeRename>> {
    let path = dir.join(PROJECT_DESCRIPTOR_FILE);
    if !path.is_file() {
        debug!("No {} to patch", PROJECT_DESCRIPTOR_FILE);
        return Ok(None);
    }

    let mut descriptor = read_json(&path)?;
    let object = as_object_mut(&mut descriptor, &path)?;
    object.insert("name".to_string(), Value::String(package_name.to_string()));

    let rename = if mode == TemplateMode::Package {
        let unscoped = package_name.rsplit('/').next().unwrap_or(package_name);
        rename_package_node(object, unscoped)
    } else {
        PackageNodeRename::NotApplicable
    };

    if let PackageNodeRename::Ambiguous { candidates } = &rename {
        warn!(
            "{} has several package entries ({}); leaving them unchanged",
            path.display(),
            candidates.join(", ")
        );
    }

    write_json(&path, &descriptor)?;
    Ok(Some(rename))
}

fn rename_package_node(descriptor: &mut Map<String, Value>, new_key: &str) -> PackageNodeRename {
    let mut node = match descriptor.get_mut("tree") {
        Some(tree) => tree,
        None => return PackageNodeRename::NotApplicable,
    };
    for segment in SCOPED_PACKAGES_PATH {
        node = match node.get_mut(segment) {
            Some(child) => child,
            None => return PackageNodeRename::NotApplicable,
        };
    }
    let packages = match node.as_object_mut() {
        Some(packages) => packages,
        None => return PackageNodeRename::NotApplicable,
    };

    let candidates: Vec<String> = packages
        .keys()
        .filter(|key| !key.starts_with('$'))
        .cloned()
        .collect();

    match candidates.len() {
        0 => PackageNodeRename::NoCandidate,
        1 => {
            let from = candidates[0].clone();
            rename_key(packages, &from, new_key);
            PackageNodeRename::Renamed {
                from,
                to: new_key.to_string(),
            }
        }
        _ => PackageNodeRename::Ambiguous { candidates },
    }
}

/// Rename `from` to `to` keeping the entry at the same position.
fn rename_key(map: &mut Map<String, Value>, from: &str, to: &str) {
    let entries = std::mem::take(map);
    for (key, value) in entries {
        if key == from {
            map.insert(to.to_string(), value);
        } else {
            map.insert(key, value);
        }
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn as_object_mut<'a>(value: &'a mut Value, path: &Path) -> Result<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| Error::Manifest {
        path: path.to_path_buf(),
        message: "expected a JSON object at the top level".to_string(),
    })
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    fs::write(path, buffer)?;
    Ok(())
}
