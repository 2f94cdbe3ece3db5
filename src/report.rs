use crate::catalog::{self, Listing};
use crate::config::LabConfig;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

pub const TITLE: &str = "=== Rust Lab ===";
pub const TAGLINE: &str = "A hands-on collection of Rust examples and recipes";
pub const RUN_HINT: &str = "To run an example:\n  cargo run --bin <example file name without .rs>";
pub const EXPLORE_HINT: &str =
    "To explore a recipe, navigate to its directory and follow its README instructions";

/// Both listings of the lab, each scanned on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub examples: Listing,
    pub recipes: Listing,
}

impl Index {
    pub fn scan(config: &LabConfig) -> Self {
        log::debug!(
            "scanning examples in {} and recipes in {}",
            config.examples_dir.display(),
            config.recipes_dir.display()
        );
        Self {
            examples: catalog::list_examples(&config.examples_dir, &config.example_suffix),
            recipes: catalog::list_recipes(&config.recipes_dir),
        }
    }
}

/// Colour only for an interactive stdout, and never when `NO_COLOR` is set.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

fn write_section(out: &mut impl Write, listing: &Listing, heading: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}", heading.bold())?;
    } else {
        writeln!(out, "{heading}")?;
    }
    match listing {
        Listing::Entries(entries) => {
            for entry in entries {
                if color {
                    writeln!(out, "- {}", entry.name.green())?;
                } else {
                    writeln!(out, "- {}", entry.name)?;
                }
            }
        }
        Listing::Unavailable(kind) => {
            let message = kind.fallback_message();
            if color {
                writeln!(out, "{}", message.yellow())?;
            } else {
                writeln!(out, "{message}")?;
            }
        }
    }
    Ok(())
}

pub fn render(out: &mut impl Write, index: &Index, color: bool) -> io::Result<()> {
    writeln!(out)?;
    if color {
        writeln!(out, "{}", TITLE.bold().cyan())?;
    } else {
        writeln!(out, "{TITLE}")?;
    }
    writeln!(out)?;
    writeln!(out, "{TAGLINE}")?;
    writeln!(out)?;

    write_section(out, &index.examples, catalog::EntryKind::Example.heading(), color)?;
    writeln!(out)?;
    write_section(out, &index.recipes, catalog::EntryKind::Recipe.heading(), color)?;

    writeln!(out)?;
    writeln!(out, "{RUN_HINT}")?;
    writeln!(out)?;
    writeln!(out, "{EXPLORE_HINT}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, EntryKind, EXAMPLES_FALLBACK, RECIPES_FALLBACK};
    use std::fs;
    use tempfile::TempDir;

    fn render_plain(index: &Index) -> String {
        let mut buf = Vec::new();
        render(&mut buf, index, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn example(name: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            kind: EntryKind::Example,
        }
    }

    #[test]
    fn test_render_layout() {
        let index = Index {
            examples: Listing::Entries(vec![example("p01_basic_types.rs"), example("p02_functions.rs")]),
            recipes: Listing::Entries(vec![CatalogEntry {
                name: "typed-config-loading".to_string(),
                kind: EntryKind::Recipe,
            }]),
        };

        let expected = "\n=== Rust Lab ===\n\n\
            A hands-on collection of Rust examples and recipes\n\n\
            Available Examples:\n\
            - p01_basic_types.rs\n\
            - p02_functions.rs\n\n\
            Available Recipes:\n\
            - typed-config-loading\n\n\
            To run an example:\n  cargo run --bin <example file name without .rs>\n\n\
            To explore a recipe, navigate to its directory and follow its README instructions\n";
        assert_eq!(render_plain(&index), expected);
    }

    #[test]
    fn test_render_fallbacks() {
        let index = Index {
            examples: Listing::Unavailable(EntryKind::Example),
            recipes: Listing::Unavailable(EntryKind::Recipe),
        };
        let text = render_plain(&index);
        assert!(text.contains(&format!("Available Examples:\n{EXAMPLES_FALLBACK}\n")));
        assert!(text.contains(&format!("Available Recipes:\n{RECIPES_FALLBACK}\n")));
        assert!(text.ends_with(&format!("{EXPLORE_HINT}\n")));
    }

    #[test]
    fn test_plain_render_has_no_escape_codes() {
        let index = Index {
            examples: Listing::Entries(vec![example("p01_basic_types.rs")]),
            recipes: Listing::Unavailable(EntryKind::Recipe),
        };
        assert!(!render_plain(&index).contains('\x1b'));
    }

    #[test]
    fn test_scan_uses_config_dirs() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("lessons")).unwrap();
        fs::write(root.path().join("lessons").join("p01_basic_types.rs"), "").unwrap();
        fs::write(root.path().join("lessons").join("notes.md"), "").unwrap();

        let config = LabConfig::default().resolve(root.path());
        let index = Index::scan(&config);

        assert_eq!(index.examples.names(), vec!["p01_basic_types.rs"]);
        assert_eq!(index.recipes, Listing::Unavailable(EntryKind::Recipe));
    }
}
