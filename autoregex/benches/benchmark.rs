use autoregex::dfa::{build_dfa, Dfa};
use autoregex::regex::simplify::simplify;
use autoregex::regex::RegexTree;
use autoregex::synth::synthesize;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A ring of `n` states over `{a, b}`: state `i` advances to `i+1` on `a`
/// and loops on `b`, with only the last state accepting. Exercises the
/// `a(k,i,j)` dynamic program across a range of sizes without needing
/// fixture files on disk.
fn ring_dfa(n: usize) -> Dfa {
    let mut transitions = Vec::with_capacity(n * 2);
    for state in 1..=n {
        let next = if state == n { n } else { state + 1 };
        transitions.push((state, 'a', next));
        transitions.push((state, 'b', state));
    }
    build_dfa(n, vec!['a', 'b'], 1, vec![n], transitions).unwrap()
}

fn synthesize_small(c: &mut Criterion) {
    let dfa = ring_dfa(4);
    c.bench_function("synthesize 4-state ring", |b| {
        b.iter(|| synthesize(black_box(&dfa)))
    });
}

fn synthesize_medium(c: &mut Criterion) {
    let dfa = ring_dfa(10);
    c.bench_function("synthesize 10-state ring", |b| {
        b.iter(|| synthesize(black_box(&dfa)))
    });
}

fn synthesize_large(c: &mut Criterion) {
    let dfa = ring_dfa(20);
    c.bench_function("synthesize 20-state ring", |b| {
        b.iter(|| synthesize(black_box(&dfa)))
    });
}

fn simplify_nested_tree(c: &mut Criterion) {
    // ((a|b)*(a|ε))+? — deliberately unsimplified, to exercise several
    // rewrite rules per fixed-point iteration.
    let tree = RegexTree::Opt(Box::new(RegexTree::Plus(Box::new(RegexTree::Concat(vec![
        RegexTree::Star(Box::new(RegexTree::Alt(vec![
            RegexTree::str('a'),
            RegexTree::str('b'),
        ]))),
        RegexTree::Alt(vec![RegexTree::str('a'), RegexTree::epsilon()]),
    ])))));

    c.bench_function("simplify nested tree", |b| {
        b.iter(|| simplify(black_box(tree.clone())))
    });
}

criterion_group!(
    benches,
    synthesize_small,
    synthesize_medium,
    synthesize_large,
    simplify_nested_tree
);
criterion_main!(benches);
