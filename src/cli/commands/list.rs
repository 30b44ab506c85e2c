//! List command - show cache contents

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::PackratResult;
use crate::store::{CacheEntry, CacheStore};
use std::path::PathBuf;

/// Execute the list command
pub async fn execute(args: ListArgs, cache_root: PathBuf) -> PackratResult<()> {
    let store = CacheStore::new(cache_root);
    let entries = store.list().await?;

    if entries.is_empty() {
        println!("No cached packages.");
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

fn print_table(entries: &[CacheEntry]) {
    println!("{:<30} {:<15} {}", "PACKAGE", "VERSION", "PATH");
    println!("{}", "-".repeat(70));

    for entry in entries {
        println!(
            "{:<30} {:<15} {}",
            entry.name,
            entry.version,
            entry.path.display()
        );
    }

    println!();
    println!("Total: {} cached version(s)", entries.len());
}

fn print_json(entries: &[CacheEntry]) -> PackratResult<()> {
    #[derive(serde::Serialize)]
    struct EntryJson<'a> {
        name: &'a str,
        version: &'a str,
        path: String,
    }

    let json_entries: Vec<EntryJson> = entries
        .iter()
        .map(|e| EntryJson {
            name: &e.name,
            version: &e.version,
            path: e.path.display().to_string(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json_entries)?);
    Ok(())
}

fn print_plain(entries: &[CacheEntry]) {
    for entry in entries {
        println!("{}@{}", entry.name, entry.version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn list_empty_root_succeeds() {
        let temp = TempDir::new().unwrap();
        let args = ListArgs {
            format: OutputFormat::Plain,
        };
        execute(args, temp.path().join("npm-cache")).await.unwrap();
    }

    #[test]
    fn print_formats_do_not_panic() {
        let entries = vec![CacheEntry {
            name: "a".to_string(),
            version: "1.0.0".to_string(),
            path: PathBuf::from("/cache/a/1.0.0"),
        }];
        print_table(&entries);
        print_plain(&entries);
        print_json(&entries).unwrap();
    }
}
