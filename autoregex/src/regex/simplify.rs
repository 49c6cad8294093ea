//! # Fixed-point algebraic rewriter
//!
//! [simplify] runs [step] to a fixed point (structural equality with the
//! previous iteration) to reduce a [RegexTree] using roughly twenty
//! Kleene-algebra identities. The rewrite system is *not* confluent and
//! does not define a unique normal form — reordering the rules below can
//! change the output on some inputs. Preserve the order; test with
//! idempotence (`simplify(simplify(r)) == simplify(r)`), not canonicality.

use crate::regex::RegexTree;

/// Simplifies `tree` by repeatedly applying [step] until the result stops
/// changing. Each step either strictly shrinks the tree or leaves it
/// alone, so this always terminates.
pub fn simplify(tree: RegexTree) -> RegexTree {
    let mut current = tree;
    loop {
        let next = step(current.clone());
        if next == current {
            return next;
        }
        current = next;
    }
}

/// One bottom-up simplification pass: simplify all children first, then
/// apply the rules for this node's own tag.
fn step(tree: RegexTree) -> RegexTree {
    match tree {
        RegexTree::Str(c) => RegexTree::Str(c),
        RegexTree::Alt(children) => step_alt(children.into_iter().map(step).collect()),
        RegexTree::Concat(children) => step_concat(children.into_iter().map(step).collect()),
        RegexTree::Star(inner) => step_star(step(*inner)),
        RegexTree::Plus(inner) => step_plus(step(*inner)),
        RegexTree::Opt(inner) => step_opt(step(*inner)),
    }
}

/// Constructs an `ALT` node, flattening nested `ALT` children into the
/// parent (associativity) and collapsing a singleton child list into that
/// child directly.
fn mk_alt(children: Vec<RegexTree>) -> RegexTree {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            RegexTree::Alt(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    if flat.len() == 1 {
        flat.into_iter().next().unwrap()
    } else {
        RegexTree::Alt(flat)
    }
}

/// Constructs a `CONCAT` node with the same flatten/collapse treatment as
/// [mk_alt].
fn mk_concat(children: Vec<RegexTree>) -> RegexTree {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            RegexTree::Concat(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    if flat.len() == 1 {
        flat.into_iter().next().unwrap()
    } else {
        RegexTree::Concat(flat)
    }
}

fn dedup_stable(children: &mut Vec<RegexTree>) {
    let mut seen: Vec<RegexTree> = Vec::with_capacity(children.len());
    children.retain(|c| {
        if seen.contains(c) {
            false
        } else {
            seen.push(c.clone());
            true
        }
    });
}

fn step_alt(mut children: Vec<RegexTree>) -> RegexTree {
    // Rule 1: drop duplicates, stable, preserving first occurrence.
    dedup_stable(&mut children);

    // Rule 2: for every child x, if some sibling is x*, x+ or x?, remove x.
    let wrapped: Vec<RegexTree> = children
        .iter()
        .filter_map(|c| match c {
            RegexTree::Star(inner) | RegexTree::Plus(inner) | RegexTree::Opt(inner) => {
                Some((**inner).clone())
            }
            _ => None,
        })
        .collect();
    if !wrapped.is_empty() {
        children.retain(|c| !wrapped.contains(c));
    }

    // Rule 3: ε|X = X? — remove the ε child and retag to OPT wrapping ALT(rest).
    if children.len() > 1 {
        if let Some(pos) = children.iter().position(RegexTree::is_epsilon) {
            children.remove(pos);
            return RegexTree::Opt(Box::new(mk_alt(children)));
        }
    }

    // Rule 4: X?|Y = (X|Y)? — splice the OPT's inner node up, retag to OPT.
    if children.len() > 1 {
        if let Some(pos) = children.iter().position(|c| matches!(c, RegexTree::Opt(_))) {
            let inner = match children.remove(pos) {
                RegexTree::Opt(inner) => *inner,
                _ => unreachable!(),
            };
            children.insert(pos, inner);
            return RegexTree::Opt(Box::new(mk_alt(children)));
        }
    }

    // Rule 5: single remaining child collapses (handled by mk_alt).
    mk_alt(children)
}

fn step_concat(children: Vec<RegexTree>) -> RegexTree {
    // Rule 1: single child collapses immediately.
    if children.len() == 1 {
        return children.into_iter().next().unwrap();
    }

    let children = concat_star_plus_merge(children);
    let children = concat_opt_star_absorb(children);
    let children = concat_epsilon_and_star_merge(children);
    let children = concat_drop_epsilon(children);
    let children = concat_distribute(children);

    // Rule 7: collapse to single child if the above reduced it that far
    // (handled by mk_concat, which also flattens nested CONCATs).
    mk_concat(children)
}

/// Rule 2: right-to-left pairwise scan, `x·x* -> x+`, `x*·x -> x+`.
/// Right-to-left so `x·x*·x` canonicalises to `x·x+`, not `x+·x`.
fn concat_star_plus_merge(mut children: Vec<RegexTree>) -> Vec<RegexTree> {
    if children.len() < 2 {
        return children;
    }
    let mut i = children.len() - 1;
    while i >= 1 {
        let left_idx = i - 1;
        let right_is_star_of_left = match &children[i] {
            RegexTree::Star(inner) => **inner == children[left_idx],
            _ => false,
        };
        if right_is_star_of_left {
            let inner = match &children[i] {
                RegexTree::Star(inner) => inner.clone(),
                _ => unreachable!(),
            };
            children.remove(left_idx);
            children[left_idx] = RegexTree::Plus(inner);
            if i >= 1 {
                i -= 1;
            }
            continue;
        }
        let left_is_star_of_right = match &children[left_idx] {
            RegexTree::Star(inner) => **inner == children[i],
            _ => false,
        };
        if left_is_star_of_right {
            let inner = match &children[left_idx] {
                RegexTree::Star(inner) => inner.clone(),
                _ => unreachable!(),
            };
            children.remove(i);
            children[left_idx] = RegexTree::Plus(inner);
            if i >= 1 {
                i -= 1;
            }
            continue;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }
    children
}

/// Rule 3: left-to-right pairwise scan, `x?·x* -> x*`, `x*·x? -> x*`.
fn concat_opt_star_absorb(mut children: Vec<RegexTree>) -> Vec<RegexTree> {
    let mut i = 0;
    while i + 1 < children.len() {
        let (left, right) = (&children[i], &children[i + 1]);
        let drop_left = matches!((left, right), (RegexTree::Opt(a), RegexTree::Star(b)) if a == b);
        if drop_left {
            children.remove(i);
            continue;
        }
        let drop_right = matches!((left, right), (RegexTree::Star(a), RegexTree::Opt(b)) if a == b);
        if drop_right {
            children.remove(i + 1);
            continue;
        }
        i += 1;
    }
    children
}

/// Rule 4: left-to-right pairwise scan, collapses `εε -> ε` and
/// `x*·x* -> x*` into the left element.
fn concat_epsilon_and_star_merge(mut children: Vec<RegexTree>) -> Vec<RegexTree> {
    let mut i = 0;
    while i + 1 < children.len() {
        let (left, right) = (&children[i], &children[i + 1]);
        let epsilon_case = left.is_epsilon() && right.is_epsilon();
        let star_case = matches!((left, right), (RegexTree::Star(a), RegexTree::Star(b)) if a == b);
        if epsilon_case || star_case {
            children.remove(i + 1);
            continue;
        }
        i += 1;
    }
    children
}

/// Rule 5: left-to-right pairwise scan, drops any `ε` element (identity).
fn concat_drop_epsilon(mut children: Vec<RegexTree>) -> Vec<RegexTree> {
    let mut i = 0;
    while i + 1 < children.len() {
        if children[i].is_epsilon() {
            children.remove(i);
            continue;
        }
        if children[i + 1].is_epsilon() {
            children.remove(i + 1);
            continue;
        }
        i += 1;
    }
    children
}

/// Rule 6: left-to-right pairwise scan, distributes concatenation over an
/// adjacent alternation: `x·(y|z) -> xy|xz`, `(x|y)·z -> xz|yz`. Skipped
/// when the non-ALT side is starred/plussed/optional, since distributing
/// there would grow the tree without reducing it.
fn concat_distribute(mut children: Vec<RegexTree>) -> Vec<RegexTree> {
    fn is_quantified(t: &RegexTree) -> bool {
        matches!(t, RegexTree::Star(_) | RegexTree::Plus(_) | RegexTree::Opt(_))
    }

    let mut i = 0;
    while i + 1 < children.len() {
        let right_is_alt = matches!(&children[i + 1], RegexTree::Alt(_));
        if right_is_alt && !is_quantified(&children[i]) {
            let left = children[i].clone();
            let alt = match children.remove(i + 1) {
                RegexTree::Alt(items) => items,
                _ => unreachable!(),
            };
            children.remove(i);
            let new_alt = mk_alt(
                alt.into_iter()
                    .map(|e| mk_concat(vec![left.clone(), e]))
                    .collect(),
            );
            children.insert(i, new_alt);
            continue;
        }
        let left_is_alt = matches!(&children[i], RegexTree::Alt(_));
        if left_is_alt && !is_quantified(&children[i + 1]) {
            let right = children[i + 1].clone();
            children.remove(i + 1);
            let alt = match children.remove(i) {
                RegexTree::Alt(items) => items,
                _ => unreachable!(),
            };
            let new_alt = mk_alt(
                alt.into_iter()
                    .map(|e| mk_concat(vec![e, right.clone()]))
                    .collect(),
            );
            children.insert(i, new_alt);
            continue;
        }
        i += 1;
    }
    children
}

fn step_star(inner: RegexTree) -> RegexTree {
    if inner.is_epsilon() {
        return RegexTree::Str(crate::regex::EPSILON);
    }
    match inner {
        RegexTree::Alt(mut items) if items.iter().any(RegexTree::is_epsilon) => {
            items.retain(|c| !c.is_epsilon());
            RegexTree::Star(Box::new(mk_alt(items)))
        }
        RegexTree::Star(inner) | RegexTree::Plus(inner) | RegexTree::Opt(inner) => {
            RegexTree::Star(inner)
        }
        other => RegexTree::Star(Box::new(other)),
    }
}

fn step_plus(inner: RegexTree) -> RegexTree {
    if inner.is_epsilon() {
        return RegexTree::Str(crate::regex::EPSILON);
    }
    match inner {
        RegexTree::Star(inner) | RegexTree::Opt(inner) => RegexTree::Star(inner),
        RegexTree::Plus(inner) => RegexTree::Plus(inner),
        other => RegexTree::Plus(Box::new(other)),
    }
}

fn step_opt(inner: RegexTree) -> RegexTree {
    if inner.is_epsilon() {
        return RegexTree::Str(crate::regex::EPSILON);
    }
    match inner {
        RegexTree::Star(inner) => RegexTree::Star(inner),
        RegexTree::Opt(inner) => RegexTree::Opt(inner),
        other => RegexTree::Opt(Box::new(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::RegexTree::*;

    fn s(c: char) -> RegexTree {
        Str(c)
    }

    #[test]
    fn alt_dedup() {
        let tree = Alt(vec![s('a'), s('a'), s('b')]);
        assert_eq!(simplify(tree), Alt(vec![s('a'), s('b')]));
    }

    #[test]
    fn alt_absorbs_into_star() {
        // a | a* = a*
        let tree = Alt(vec![s('a'), Star(Box::new(s('a')))]);
        assert_eq!(simplify(tree), Star(Box::new(s('a'))));
    }

    #[test]
    fn alt_epsilon_becomes_opt() {
        // ε|a = a?
        let tree = Alt(vec![s(crate::regex::EPSILON), s('a')]);
        assert_eq!(simplify(tree), Opt(Box::new(s('a'))));
    }

    #[test]
    fn alt_opt_splices() {
        // a?|b = (a|b)?
        let tree = Alt(vec![Opt(Box::new(s('a'))), s('b')]);
        assert_eq!(
            simplify(tree),
            Opt(Box::new(Alt(vec![s('a'), s('b')])))
        );
    }

    #[test]
    fn concat_star_merge_right_to_left() {
        // a a* a -> a a+ (not a+ a)
        let tree = Concat(vec![s('a'), Star(Box::new(s('a'))), s('a')]);
        assert_eq!(
            simplify(tree),
            Concat(vec![s('a'), Plus(Box::new(s('a')))])
        );
    }

    #[test]
    fn concat_opt_star() {
        let tree = Concat(vec![Opt(Box::new(s('a'))), Star(Box::new(s('a')))]);
        assert_eq!(simplify(tree), Star(Box::new(s('a'))));
    }

    #[test]
    fn concat_drops_epsilon() {
        let tree = Concat(vec![s(crate::regex::EPSILON), s('a')]);
        assert_eq!(simplify(tree), s('a'));
    }

    #[test]
    fn concat_distributes_over_alt() {
        // a(b|c) = ab|ac
        let tree = Concat(vec![s('a'), Alt(vec![s('b'), s('c')])]);
        assert_eq!(
            simplify(tree),
            Alt(vec![
                Concat(vec![s('a'), s('b')]),
                Concat(vec![s('a'), s('c')])
            ])
        );
    }

    #[test]
    fn concat_distribute_skips_quantified() {
        // a*(b|c) stays as-is (distributing would grow, not shrink)
        let tree = Concat(vec![Star(Box::new(s('a'))), Alt(vec![s('b'), s('c')])]);
        assert_eq!(simplify(tree.clone()), tree);
    }

    #[test]
    fn star_of_epsilon() {
        assert_eq!(simplify(Star(Box::new(s(crate::regex::EPSILON)))), s(crate::regex::EPSILON));
    }

    #[test]
    fn star_of_alt_with_epsilon() {
        // (ε|a)* = a*
        let tree = Star(Box::new(Alt(vec![s(crate::regex::EPSILON), s('a')])));
        assert_eq!(simplify(tree), Star(Box::new(s('a'))));
    }

    #[test]
    fn nested_quantifiers_collapse() {
        assert_eq!(
            simplify(Star(Box::new(Star(Box::new(s('a')))))),
            Star(Box::new(s('a')))
        );
        assert_eq!(
            simplify(Plus(Box::new(Plus(Box::new(s('a')))))),
            Plus(Box::new(s('a')))
        );
        assert_eq!(
            simplify(Opt(Box::new(Opt(Box::new(s('a')))))),
            Opt(Box::new(s('a')))
        );
        assert_eq!(
            simplify(Plus(Box::new(Star(Box::new(s('a')))))),
            Star(Box::new(s('a')))
        );
        assert_eq!(
            simplify(Opt(Box::new(Star(Box::new(s('a')))))),
            Star(Box::new(s('a')))
        );
    }

    #[test]
    fn idempotent_on_random_shapes() {
        let trees = vec![
            Alt(vec![s('a'), s('b'), Star(Box::new(s('a')))]),
            Concat(vec![s('a'), Star(Box::new(s('a'))), s('b'), s('b')]),
            Star(Box::new(Concat(vec![s('a'), s('b')]))),
        ];
        for tree in trees {
            let once = simplify(tree);
            let twice = simplify(once.clone());
            assert_eq!(once, twice);
        }
    }
}
