//! Presentation-MathML to LaTeX translator.

use ourst_tree::ContentNode;

use crate::MathTranslator;
use crate::symbols::{function_name, is_large_operator, map_symbols, push_command};

/// Built-in MathML to LaTeX translator.
///
/// Display math (`display="block"`) is wrapped in `\[ \]`, inline math in `$ $`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexTranslator;

impl LatexTranslator {
    /// Create a new translator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MathTranslator for LatexTranslator {
    fn translate(&self, mathml: &ContentNode) -> Option<String> {
        let Some(math) = find_math(mathml) else {
            tracing::debug!(tag = mathml.kind.tag(), "No math element found");
            return None;
        };

        let body = row(&math.children);
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        let display = math.attr("display") == Some("block") || math.attr("mode") == Some("display");
        Some(if display {
            format!(r"\[{body}\]")
        } else {
            format!("${body}$")
        })
    }
}

/// Tag name without a namespace prefix.
fn local_name(node: &ContentNode) -> &str {
    let tag = node.kind.tag();
    tag.rsplit(':').next().unwrap_or(tag)
}

/// The `math` element itself or its first descendant.
fn find_math(node: &ContentNode) -> Option<&ContentNode> {
    if local_name(node) == "math" {
        return Some(node);
    }
    node.children.iter().find_map(find_math)
}

fn row(children: &[ContentNode]) -> String {
    let mut out = String::new();
    for child in children {
        push_command(&mut out, &render(child));
    }
    out
}

fn nth(node: &ContentNode, index: usize) -> String {
    node.children.get(index).map(render).unwrap_or_default()
}

fn render(node: &ContentNode) -> String {
    match local_name(node) {
        "math" | "mrow" | "mstyle" | "mpadded" | "mphantom" | "merror" | "menclose" | "mtd" => {
            row(&node.children)
        }
        "semantics" => node
            .children
            .iter()
            .find(|child| !local_name(child).starts_with("annotation"))
            .map(render)
            .unwrap_or_default(),
        "annotation" | "annotation-xml" | "none" | "mprescripts" => String::new(),
        "mi" => identifier(node.text.trim()),
        "mn" => node.text.trim().to_owned(),
        "mo" => map_symbols(node.text.trim()),
        "mtext" | "ms" => {
            let text = node.text.trim();
            if text.is_empty() {
                String::new()
            } else {
                format!(r"\text{{{}}}", escape_text(text))
            }
        }
        "mspace" => r"\ ".to_owned(),
        "mfrac" => format!(r"\frac{{{}}}{{{}}}", nth(node, 0), nth(node, 1)),
        "msqrt" => format!(r"\sqrt{{{}}}", row(&node.children)),
        "mroot" => format!(r"\sqrt[{}]{{{}}}", nth(node, 1), nth(node, 0)),
        "msup" => format!("{}^{}", group(&nth(node, 0)), group(&nth(node, 1))),
        "msub" => format!("{}_{}", group(&nth(node, 0)), group(&nth(node, 1))),
        "msubsup" => format!(
            "{}_{}^{}",
            group(&nth(node, 0)),
            group(&nth(node, 1)),
            group(&nth(node, 2))
        ),
        "mover" => over(node),
        "munder" => under(node),
        "munderover" => {
            let base = nth(node, 0);
            let (below, above) = (nth(node, 1), nth(node, 2));
            if is_large_operator(&base) {
                format!("{base}_{}^{}", group(&below), group(&above))
            } else {
                format!(r"\overset{{{above}}}{{\underset{{{below}}}{{{base}}}}}")
            }
        }
        "mfenced" => fenced(node),
        "mtable" => table(node),
        "mtr" | "mlabeledtr" => node
            .children
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(" & "),
        other => {
            tracing::debug!(tag = other, "Unsupported MathML element, rendering children");
            row(&node.children)
        }
    }
}

fn identifier(text: &str) -> String {
    if let Some(name) = function_name(text) {
        return name.to_owned();
    }
    if text.chars().count() > 1 {
        return format!(r"\mathrm{{{}}}", escape_text(text));
    }
    map_symbols(text)
}

/// Wrap a script or base in braces unless it is a single token.
fn group(latex: &str) -> String {
    let single_char = latex.chars().count() == 1;
    let single_command = latex.len() > 1
        && latex.starts_with('\\')
        && latex[1..].chars().all(|ch| ch.is_ascii_alphabetic());
    if single_char || single_command {
        latex.to_owned()
    } else {
        format!("{{{latex}}}")
    }
}

fn accent_text(node: &ContentNode, index: usize) -> String {
    node.children
        .get(index)
        .map(|child| child.plain_text().trim().to_owned())
        .unwrap_or_default()
}

fn over(node: &ContentNode) -> String {
    let base = nth(node, 0);
    let command = match accent_text(node, 1).as_str() {
        "\u{af}" | "\u{203e}" | "\u{2015}" | "_" => "overline",
        "^" | "\u{2c6}" => "hat",
        "\u{2192}" | "\u{20d7}" => "vec",
        "~" | "\u{2dc}" => "tilde",
        "\u{2d9}" | "." => "dot",
        "\u{a8}" | ".." => "ddot",
        "\u{23de}" | "\u{fe37}" => "overbrace",
        _ => {
            let above = nth(node, 1);
            return if is_large_operator(&base) {
                format!("{base}^{}", group(&above))
            } else {
                format!(r"\overset{{{above}}}{{{base}}}")
            };
        }
    };
    format!(r"\{command}{{{base}}}")
}

fn under(node: &ContentNode) -> String {
    let base = nth(node, 0);
    let command = match accent_text(node, 1).as_str() {
        "_" | "\u{332}" | "\u{203e}" => "underline",
        "\u{23df}" | "\u{fe38}" => "underbrace",
        _ => {
            let below = nth(node, 1);
            return if is_large_operator(&base) {
                format!("{base}_{}", group(&below))
            } else {
                format!(r"\underset{{{below}}}{{{base}}}")
            };
        }
    };
    format!(r"\{command}{{{base}}}")
}

fn fenced(node: &ContentNode) -> String {
    let open = node.attr("open").unwrap_or("(");
    let close = node.attr("close").unwrap_or(")");
    let separators: Vec<char> = node
        .attr("separators")
        .unwrap_or(",")
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();

    let mut out = String::from(r"\left");
    out.push_str(&delimiter(open));
    for (index, child) in node.children.iter().enumerate() {
        if index > 0 {
            if let Some(sep) = separators.get((index - 1).min(separators.len().saturating_sub(1))) {
                out.push_str(&map_symbols(&sep.to_string()));
            }
        }
        push_command(&mut out, &render(child));
    }
    push_command(&mut out, r"\right");
    out.push_str(&delimiter(close));
    out
}

fn delimiter(text: &str) -> String {
    if text.is_empty() {
        ".".to_owned()
    } else {
        map_symbols(text)
    }
}

fn table(node: &ContentNode) -> String {
    let rows: Vec<&ContentNode> = node
        .children
        .iter()
        .filter(|child| matches!(local_name(child), "mtr" | "mlabeledtr"))
        .collect();
    let columns = rows.iter().map(|row| row.children.len()).max().unwrap_or(1);
    let body = rows
        .iter()
        .map(|row| render(row))
        .collect::<Vec<_>>()
        .join(r" \\ ");
    format!(r"\begin{{array}}{{{}}}{body}\end{{array}}", "c".repeat(columns.max(1)))
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str(r"\textbackslash{}"),
            '{' | '}' | '%' | '$' | '&' | '#' | '_' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
