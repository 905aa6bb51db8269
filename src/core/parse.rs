//! Parser for the folder notation.
//!
//! Each non-blank line names one entry. The characters before the first ASCII
//! letter form the depth marker, and its length (in characters) is the depth.
//! Lines are attached to the nearest preceding directory with a smaller depth.
//!
//! ```text
//! src/
//!   index.js
//!   utils/
//!     helper.js
//! README.md   # comments run to end of line
//! ```

use log::{debug, trace};

use crate::error::NotationError;
use crate::models::{DepthLine, Entry, Forest};

/// How the parser treats input that does not describe a consistent tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ParseMode {
    /// Never fail. Letterless lines become empty names and badly indented
    /// lines attach to whatever ancestor the depth comparison picks.
    #[default]
    Lenient,
    /// Reject letterless lines and indentation that disagrees with siblings.
    Strict,
}

#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    pub mode: ParseMode,
}

/// Parse notation text into a forest of entries.
pub fn parse_notation(text: &str, options: &ParseOptions) -> Result<Forest, NotationError> {
    let lines = depth_lines(text, options.mode)?;
    let forest = build_forest(&lines, options.mode)?;
    debug!(
        "parsed {} notation lines into {} top-level entries",
        lines.len(),
        forest.len()
    );
    Ok(forest)
}

/// Strip comments and blank lines and split the rest into depth and name.
pub fn depth_lines(text: &str, mode: ParseMode) -> Result<Vec<DepthLine>, NotationError> {
    let mut lines = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let content = strip_comment(raw).trim_end();
        if content.trim_start().is_empty() {
            continue;
        }

        let line = index + 1;
        let (depth, name) = match split_at_first_letter(content) {
            Some(split) => split,
            None if mode == ParseMode::Strict => {
                return Err(NotationError::MissingName {
                    line,
                    text: content.trim().to_owned(),
                });
            }
            None => (0, ""),
        };

        trace!("line {line}: depth {depth} name {name:?}");
        lines.push(DepthLine {
            line,
            depth,
            name: name.to_owned(),
        });
    }

    Ok(lines)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

/// Split at the first ASCII letter, returning the marker length in chars and the name.
fn split_at_first_letter(line: &str) -> Option<(usize, &str)> {
    line.char_indices()
        .enumerate()
        .find(|(_, (_, c))| c.is_ascii_alphabetic())
        .map(|(depth, (byte, _))| (depth, &line[byte..]))
}

struct Frame {
    depth: usize,
    name: String,
    children: Vec<Entry>,
    /// Depth of the first child attached here.
    child_depth: Option<usize>,
}

/// Directory frames still open for children, above a root that sits below every depth.
struct Stack {
    root: Frame,
    open: Vec<Frame>,
}

impl Stack {
    fn top(&mut self) -> &mut Frame {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    /// Close open directories that cannot be ancestors of a line at `depth`.
    fn unwind_to(&mut self, depth: usize) {
        while self.open.last().is_some_and(|frame| frame.depth >= depth) {
            self.close();
        }
    }

    fn close(&mut self) {
        if let Some(frame) = self.open.pop() {
            self.top()
                .children
                .push(Entry::dir(frame.name, frame.children));
        }
    }

    fn finish(mut self) -> Forest {
        while !self.open.is_empty() {
            self.close();
        }
        self.root.children
    }
}

fn build_forest(lines: &[DepthLine], mode: ParseMode) -> Result<Forest, NotationError> {
    let mut stack = Stack {
        root: Frame {
            depth: 0,
            name: String::new(),
            children: Vec::new(),
            child_depth: None,
        },
        open: Vec::new(),
    };

    for line in lines {
        stack.unwind_to(line.depth);

        let parent = stack.top();
        match parent.child_depth {
            Some(expected) if expected != line.depth && mode == ParseMode::Strict => {
                return Err(NotationError::InconsistentIndent {
                    line: line.line,
                    name: line.name.clone(),
                    expected,
                    found: line.depth,
                });
            }
            Some(_) => {}
            None => parent.child_depth = Some(line.depth),
        }

        if line.name.ends_with('/') {
            stack.open.push(Frame {
                depth: line.depth,
                name: line.name.clone(),
                children: Vec::new(),
                child_depth: None,
            });
        } else {
            parent.children.push(Entry::file(line.name.clone()));
        }
    }

    Ok(stack.finish())
}
