//! # Regex syntax trees
//!
//! This module defines [RegexTree], the algebraic data structure used
//! throughout the crate to represent regular expressions, and [Language],
//! a thin wrapper that additionally represents the empty language `∅`
//! without needing a seventh `RegexTree` tag for it (see the "Empty
//! language" design note in the specification this crate implements).
//!
//! [simplify] is the fixed-point algebraic rewriter; [crate::synth] is the
//! DFA→regex dynamic program that builds these trees in the first place.

pub mod simplify;

use std::fmt;

/// A regular expression syntax tree over a single-character alphabet.
///
/// Every node but [RegexTree::Str] carries an ordered list of children.
/// Equality is structural, not semantic: `a*` and `a*a*` are unequal trees
/// even though they accept the same language. [simplify::simplify] closes
/// much, but not all, of that gap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegexTree {
    /// A literal: either a single alphabet symbol, or the distinguished
    /// epsilon token [EPSILON].
    Str(char),
    /// Alternation of `children`, at least one.
    Alt(Vec<RegexTree>),
    /// Concatenation of `children`, at least one.
    Concat(Vec<RegexTree>),
    /// Kleene star of the boxed child.
    Star(Box<RegexTree>),
    /// Kleene plus of the boxed child.
    Plus(Box<RegexTree>),
    /// Optional (maybe) of the boxed child.
    Opt(Box<RegexTree>),
}

/// The literal used for the empty word (not to be confused with [Language::Empty],
/// the empty language).
pub const EPSILON: char = 'ε';

impl RegexTree {
    /// A convenience constructor for a single alphabet symbol or epsilon literal.
    pub fn str(c: char) -> Self {
        RegexTree::Str(c)
    }

    pub fn epsilon() -> Self {
        RegexTree::Str(EPSILON)
    }

    fn is_epsilon(&self) -> bool {
        matches!(self, RegexTree::Str(c) if *c == EPSILON)
    }

    /// Whether this node, if made the operand of a postfix operator, needs
    /// parenthesizing (an `ALT` or `CONCAT` with more than one child, or a
    /// literal of more than one character — see the printing rules).
    fn needs_parens_as_operand(&self) -> bool {
        match self {
            RegexTree::Alt(c) | RegexTree::Concat(c) => c.len() > 1,
            RegexTree::Str(_) | RegexTree::Star(_) | RegexTree::Plus(_) | RegexTree::Opt(_) => false,
        }
    }

    fn fmt_inner(&self, f: &mut fmt::Formatter<'_>, top: bool) -> fmt::Result {
        match self {
            RegexTree::Str(c) => write!(f, "{c}"),
            RegexTree::Concat(children) => {
                let all_strings = children.iter().all(|c| matches!(c, RegexTree::Str(_)));
                if all_strings {
                    for child in children {
                        child.fmt_inner(f, false)?;
                    }
                    Ok(())
                } else {
                    let needs_parens = children.len() > 1 && !top;
                    if needs_parens {
                        write!(f, "(")?;
                    }
                    for child in children {
                        child.fmt_inner(f, false)?;
                    }
                    if needs_parens {
                        write!(f, ")")?;
                    }
                    Ok(())
                }
            }
            RegexTree::Alt(children) => {
                let needs_parens = children.len() > 1 && !top;
                if needs_parens {
                    write!(f, "(")?;
                }
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "|")?;
                    }
                    child.fmt_inner(f, false)?;
                }
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
            RegexTree::Star(inner) => fmt_postfix(f, inner, '*'),
            RegexTree::Plus(inner) => fmt_postfix(f, inner, '+'),
            RegexTree::Opt(inner) => fmt_postfix(f, inner, '?'),
        }
    }
}

fn fmt_postfix(f: &mut fmt::Formatter<'_>, inner: &RegexTree, suffix: char) -> fmt::Result {
    let needs_parens = inner.needs_parens_as_operand();
    if needs_parens {
        write!(f, "(")?;
    }
    // `top: true` here because the parens above (if any) already account
    // for `inner`'s own precedence — letting it also gate on `top` would
    // double-wrap (e.g. `(a|b)` printed as `((a|b))`).
    inner.fmt_inner(f, true)?;
    if needs_parens {
        write!(f, ")")?;
    }
    write!(f, "{suffix}")
}

impl fmt::Display for RegexTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_inner(f, true)
    }
}

/// The language produced by a DP cell or by synthesis as a whole: either
/// some [RegexTree], or the distinguished empty-language sentinel `∅`.
///
/// Keeping this outside of [RegexTree] avoids every operation having to
/// special-case a seventh "empty" tag inside the tree itself — see the
/// "Empty language" design note.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Empty,
    Tree(RegexTree),
}

impl Language {
    pub fn is_empty(&self) -> bool {
        matches!(self, Language::Empty)
    }

    pub fn as_tree(&self) -> Option<&RegexTree> {
        match self {
            Language::Empty => None,
            Language::Tree(t) => Some(t),
        }
    }

    pub fn into_tree(self) -> Option<RegexTree> {
        match self {
            Language::Empty => None,
            Language::Tree(t) => Some(t),
        }
    }

    /// The printed form used by a UI layer, which displays `Ø` rather than
    /// the empty string for the empty language (see §3.2).
    pub fn to_ui_string(&self) -> String {
        match self {
            Language::Empty => "Ø".to_string(),
            Language::Tree(t) => t.to_string(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Empty => Ok(()),
            Language::Tree(t) => write!(f, "{t}"),
        }
    }
}

impl From<RegexTree> for Language {
    fn from(value: RegexTree) -> Self {
        Language::Tree(value)
    }
}
