use colored::Colorize;
use std::fmt;

/// A single differing line position
///
/// `line` is 1-based. A pure removal has no `added` text and a pure addition
/// has no `removed` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub line: usize,
    pub removed: Option<String>,
    pub added: Option<String>,
}

impl LineChange {
    pub fn new(line: usize, removed: Option<&str>, added: Option<&str>) -> Self {
        LineChange {
            line,
            removed: removed.map(str::to_string),
            added: added.map(str::to_string),
        }
    }
}

impl fmt::Display for LineChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("Line {}", self.line).cyan())?;
        if let Some(removed) = &self.removed {
            write!(f, "\n{}", format!("- {removed}").red())?;
        }
        if let Some(added) = &self.added {
            write!(f, "\n{}", format!("+ {added}").green())?;
        }

        Ok(())
    }
}

/// Compare two texts line by line at equal positions
///
/// Lines present in both texts are reported when they differ; the trailing
/// lines of the longer text are reported as pure additions or removals.
pub fn diff_lines(old: &str, new: &str) -> Vec<LineChange> {
    let old_lines = old.lines().collect::<Vec<_>>();
    let new_lines = new.lines().collect::<Vec<_>>();
    let line_count = old_lines.len().max(new_lines.len());

    (0..line_count)
        .filter_map(|i| {
            let removed = old_lines.get(i).copied();
            let added = new_lines.get(i).copied();

            match (removed, added) {
                (Some(old_line), Some(new_line)) if old_line == new_line => None,
                _ => Some(LineChange::new(i + 1, removed, added)),
            }
        })
        .collect()
}
