//! Cross-reference target resolution.

use std::sync::LazyLock;

use regex::Regex;

/// Segment naming a structural block or part: `block3`, a bare `part`, or
/// the `someblock` placeholder.
static STRUCTURAL_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:some)?(block|part)(\d*)$").unwrap());

/// Block and part used when a cross-reference target omits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDefaults {
    pub block: String,
    pub part: String,
}

impl ReferenceDefaults {
    #[must_use]
    pub fn new(block: impl Into<String>, part: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            part: part.into(),
        }
    }

    /// Defaults `block{block}` and `part{part}`.
    #[must_use]
    pub fn numbered(block: u32, part: u32) -> Self {
        Self::new(format!("block{block}"), format!("part{part}"))
    }
}

/// Resolve a comma-separated `targetdoc` into a slash-separated document path.
///
/// Segments are lowercased with all whitespace removed. Only the leading
/// segments decide the structural prefix:
/// - a numbered block is used as is and nothing is inserted;
/// - a part gets the default block in front of it;
/// - anything else gets both defaults in front of it.
///
/// Unnumbered block and part segments are replaced by their defaults. All
/// other segments keep their place.
///
/// Returns `None` when the target names nothing.
#[must_use]
pub fn resolve_target(target: &str, defaults: &ReferenceDefaults) -> Option<String> {
    let mut segments = target
        .split(',')
        .map(|segment| {
            segment
                .to_lowercase()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect::<String>()
        })
        .filter(|segment| !segment.is_empty())
        .peekable();

    let first = segments.next()?;
    let mut path = Vec::new();
    match structural(&first) {
        Some((Structure::Block, true)) => path.push(first),
        Some((Structure::Block, false)) => {
            path.push(defaults.block.clone());
            match segments.peek().and_then(|next| structural(next)) {
                Some((Structure::Part, true)) => path.extend(segments.next()),
                Some((Structure::Part, false)) => {
                    segments.next();
                    path.push(defaults.part.clone());
                }
                _ => path.push(defaults.part.clone()),
            }
        }
        Some((Structure::Part, numbered)) => {
            path.push(defaults.block.clone());
            path.push(if numbered {
                first
            } else {
                defaults.part.clone()
            });
        }
        None => {
            path.push(defaults.block.clone());
            path.push(defaults.part.clone());
            path.push(first);
        }
    }
    path.extend(segments);
    Some(path.join("/"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Structure {
    Block,
    Part,
}

/// Structural kind of a normalized segment and whether it carries a number.
fn structural(segment: &str) -> Option<(Structure, bool)> {
    let caps = STRUCTURAL_SEGMENT.captures(segment)?;
    let kind = if &caps[1] == "block" {
        Structure::Block
    } else {
        Structure::Part
    };
    Some((kind, !caps[2].is_empty()))
}
