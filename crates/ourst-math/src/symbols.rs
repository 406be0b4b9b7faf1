//! Unicode symbol to LaTeX command tables.

/// LaTeX for a single operator or identifier character.
pub(crate) fn symbol(ch: char) -> Option<&'static str> {
    Some(match ch {
        // Greek lowercase
        'α' => r"\alpha",
        'β' => r"\beta",
        'γ' => r"\gamma",
        'δ' => r"\delta",
        'ε' | 'ϵ' => r"\epsilon",
        'ζ' => r"\zeta",
        'η' => r"\eta",
        'θ' => r"\theta",
        'ι' => r"\iota",
        'κ' => r"\kappa",
        'λ' => r"\lambda",
        'μ' => r"\mu",
        'ν' => r"\nu",
        'ξ' => r"\xi",
        'π' => r"\pi",
        'ρ' => r"\rho",
        'σ' => r"\sigma",
        'τ' => r"\tau",
        'υ' => r"\upsilon",
        'φ' | 'ϕ' => r"\phi",
        'χ' => r"\chi",
        'ψ' => r"\psi",
        'ω' => r"\omega",
        // Greek uppercase without a Latin lookalike
        'Γ' => r"\Gamma",
        'Δ' => r"\Delta",
        'Θ' => r"\Theta",
        'Λ' => r"\Lambda",
        'Ξ' => r"\Xi",
        'Π' => r"\Pi",
        'Σ' => r"\Sigma",
        'Φ' => r"\Phi",
        'Ψ' => r"\Psi",
        'Ω' => r"\Omega",
        // Operators and relations
        '×' => r"\times",
        '÷' => r"\div",
        '±' => r"\pm",
        '∓' => r"\mp",
        '·' | '⋅' => r"\cdot",
        '−' => "-",
        '≤' => r"\leq",
        '≥' => r"\geq",
        '≠' => r"\neq",
        '≈' => r"\approx",
        '≡' => r"\equiv",
        '∝' => r"\propto",
        '∼' => r"\sim",
        '→' => r"\rightarrow",
        '←' => r"\leftarrow",
        '↔' => r"\leftrightarrow",
        '⇒' => r"\Rightarrow",
        '⇔' => r"\Leftrightarrow",
        '∞' => r"\infty",
        '∂' => r"\partial",
        '∇' => r"\nabla",
        '∑' => r"\sum",
        '∏' => r"\prod",
        '∫' => r"\int",
        '∮' => r"\oint",
        '√' => r"\surd",
        '∈' => r"\in",
        '∉' => r"\notin",
        '⊂' => r"\subset",
        '⊆' => r"\subseteq",
        '∪' => r"\cup",
        '∩' => r"\cap",
        '∅' => r"\emptyset",
        '∀' => r"\forall",
        '∃' => r"\exists",
        '¬' => r"\neg",
        '∧' => r"\wedge",
        '∨' => r"\vee",
        '°' => r"^\circ",
        '′' => "'",
        '″' => "''",
        '…' => r"\ldots",
        '⋯' => r"\cdots",
        '⟨' => r"\langle",
        '⟩' => r"\rangle",
        '‖' => r"\|",
        '{' => r"\{",
        '}' => r"\}",
        '%' => r"\%",
        '#' => r"\#",
        '&' => r"\&",
        '\u{2061}' | '\u{2062}' | '\u{2063}' => "",
        _ => return None,
    })
}

/// Multi-letter identifiers that LaTeX typesets as upright function names.
pub(crate) fn function_name(name: &str) -> Option<&'static str> {
    Some(match name {
        "sin" => r"\sin",
        "cos" => r"\cos",
        "tan" => r"\tan",
        "cot" => r"\cot",
        "sec" => r"\sec",
        "csc" => r"\csc",
        "arcsin" => r"\arcsin",
        "arccos" => r"\arccos",
        "arctan" => r"\arctan",
        "sinh" => r"\sinh",
        "cosh" => r"\cosh",
        "tanh" => r"\tanh",
        "log" => r"\log",
        "ln" => r"\ln",
        "exp" => r"\exp",
        "lim" => r"\lim",
        "max" => r"\max",
        "min" => r"\min",
        "det" => r"\det",
        "gcd" => r"\gcd",
        _ => return None,
    })
}

/// Operators whose limits are written as scripts rather than stacked.
pub(crate) fn is_large_operator(latex: &str) -> bool {
    matches!(
        latex,
        r"\sum" | r"\prod" | r"\int" | r"\oint" | r"\lim" | r"\max" | r"\min" | r"\cup" | r"\cap"
    )
}

/// Map every character of `text` through [`symbol`], keeping unmapped ones.
pub(crate) fn map_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        match symbol(ch) {
            Some(latex) => push_command(&mut out, latex),
            None => push_command(&mut out, ch.encode_utf8(&mut buf)),
        }
    }
    out
}

/// Append `piece`, separating it from a preceding command name when needed.
pub(crate) fn push_command(out: &mut String, piece: &str) {
    if ends_with_command(out) && piece.starts_with(char::is_alphabetic) {
        out.push(' ');
    }
    out.push_str(piece);
}

/// Whether `text` ends in a control word such as `\alpha`.
pub(crate) fn ends_with_command(text: &str) -> bool {
    let letters = text
        .chars()
        .rev()
        .take_while(char::is_ascii_alphabetic)
        .count();
    letters > 0 && text[..text.len() - letters].ends_with('\\')
}
