//! `buildlens package` command.

use crate::context::ServiceContext;
use crate::snapshot::Package;

/// Execute the `package` command.
///
/// Looks up a package by its composite `name@version` key. An unknown key is
/// a valid "not found" outcome.
///
/// # Errors
///
/// Returns an error string if the data source cannot be loaded.
pub fn run(ctx: &ServiceContext, source: &str, id: &str) -> Result<(), String> {
    let store = super::load_store(ctx, source)?;
    match store.resolver().and_then(|resolver| resolver.package_detail(id)) {
        Some(package) => print!("{}", format_package(package)),
        None => println!("Package not found: {id}"),
    }
    Ok(())
}

/// Formats a package as a human-readable report.
#[must_use]
pub fn format_package(package: &Package) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Package: {}", package.name));
    lines.push(format!("Version: {}", package.version));
    if let Some(path) = &package.path {
        lines.push(format!("Path: {path}"));
    }
    lines.push(String::new());
    lines.join("\n")
}
