//! # Browsable step tree
//!
//! [StepView] derives a finite labeled tree mirroring how a UI collaborator
//! would let a user click into the `a(k,i,j)` recurrence one step at a
//! time, and inverts the `"a(k, i, j)"` label grammar back to `(k, i, j)`
//! so a click can be resolved to a DP cell.

use thiserror::Error;

/// A node in the browsable step tree: either the root, a top-layer cell
/// `a(N, i, j)`, the literal `"OR"` separator, or a recursed cell/star
/// child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNode {
    pub label: String,
    /// Set on the N² top-layer children whose `(i, j)` is `(initial, accept)` —
    /// the cells that make up the final regex.
    pub highlighted: bool,
    pub children: Vec<StepNode>,
}

impl StepNode {
    fn leaf(label: impl Into<String>, highlighted: bool) -> Self {
        StepNode {
            label: label.into(),
            highlighted,
            children: Vec::new(),
        }
    }
}

/// Derives and holds the step tree for a synthesis over `N` states.
pub struct StepView {
    pub root: StepNode,
}

impl StepView {
    /// Builds the tree described in the specification: a root labeled
    /// `"DFA Graph"`, `N²` children `a(N, i, j)`, each recursively expanded
    /// down through `a(k-1, ...)` until `k` reaches `0`.
    pub fn build_tree(n: usize, initial: usize, accept: &[usize]) -> StepView {
        let mut top_children = Vec::with_capacity(n * n);
        for i in 1..=n {
            for j in 1..=n {
                let highlighted = i == initial && accept.contains(&j);
                top_children.push(expand(n, i, j, highlighted));
            }
        }
        StepView {
            root: StepNode {
                label: "DFA Graph".to_string(),
                highlighted: false,
                children: top_children,
            },
        }
    }

    /// Inverts the `"a(k, i, j)"` (optionally `"a(k, i, j)*"`) label
    /// grammar back into its `(k, i, j)` triple.
    pub fn parse_label(label: &str) -> Result<(usize, usize, usize), LabelParseError> {
        parse_label(label)
    }
}

fn expand(k: usize, i: usize, j: usize, highlighted: bool) -> StepNode {
    let label = format!("a({k}, {i}, {j})");
    if k == 0 {
        return StepNode::leaf(label, highlighted);
    }
    let children = vec![
        expand(k - 1, i, j, false),
        StepNode::leaf("OR", false),
        expand(k - 1, i, k, false),
        star_child(k - 1, k, k),
        expand(k - 1, k, j, false),
    ];
    StepNode {
        label,
        highlighted,
        children,
    }
}

fn star_child(k: usize, i: usize, j: usize) -> StepNode {
    let mut node = expand(k, i, j, false);
    node.label.push('*');
    node
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelParseError {
    #[error("label '{0}' does not match the 'a(k, i, j)' grammar")]
    Malformed(String),
    #[error("label '{0}' has a non-integer component")]
    NotAnInteger(String),
}

fn parse_label(label: &str) -> Result<(usize, usize, usize), LabelParseError> {
    let trimmed = label.strip_suffix('*').unwrap_or(label);
    let inner = trimmed
        .strip_prefix("a(")
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| LabelParseError::Malformed(label.to_string()))?;

    let mut parts = inner.split(", ");
    let (Some(k), Some(i), Some(j), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(LabelParseError::Malformed(label.to_string()));
    };

    let parse = |s: &str| s.parse::<usize>().map_err(|_| LabelParseError::NotAnInteger(label.to_string()));
    Ok((parse(k)?, parse(i)?, parse(j)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_layer_has_n_squared_children() {
        let view = StepView::build_tree(2, 1, &[2]);
        assert_eq!(view.root.label, "DFA Graph");
        assert_eq!(view.root.children.len(), 4);
        assert_eq!(view.root.children[0].label, "a(2, 1, 1)");
    }

    #[test]
    fn highlights_initial_to_accept_cells() {
        let view = StepView::build_tree(2, 1, &[2]);
        let highlighted: Vec<_> = view
            .root
            .children
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.label.clone())
            .collect();
        assert_eq!(highlighted, vec!["a(2, 1, 2)"]);
    }

    #[test]
    fn recursion_has_five_children_with_or_and_star() {
        let view = StepView::build_tree(2, 1, &[2]);
        let cell = &view.root.children[0];
        assert_eq!(cell.children.len(), 5);
        assert_eq!(cell.children[1].label, "OR");
        assert_eq!(cell.children[3].label, "a(1, 2, 2)*");
    }

    #[test]
    fn leaves_at_k_zero() {
        let view = StepView::build_tree(1, 1, &[1]);
        let cell = &view.root.children[0].children[0];
        assert_eq!(cell.label, "a(0, 1, 1)");
        assert!(cell.children.is_empty());
    }

    #[test]
    fn parse_label_round_trips() {
        assert_eq!(StepView::parse_label("a(3, 1, 2)").unwrap(), (3, 1, 2));
        assert_eq!(StepView::parse_label("a(0, 5, 5)*").unwrap(), (0, 5, 5));
    }

    #[test]
    fn parse_label_rejects_malformed() {
        assert!(StepView::parse_label("a(1, 2)").is_err());
        assert!(StepView::parse_label("garbage").is_err());
        assert!(matches!(
            StepView::parse_label("a(x, 1, 2)"),
            Err(LabelParseError::NotAnInteger(_))
        ));
    }
}
