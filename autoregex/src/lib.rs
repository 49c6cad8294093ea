//! # autoregex
//!
//! `autoregex` converts a deterministic finite automaton over a finite
//! single-character alphabet into an equivalent regular expression, using
//! the classical state-elimination / Kleene algebra construction (the
//! Floyd–Warshall-style `a(k,i,j)` recurrence), paired with an algebraic
//! rewriter that reduces the produced expression to a compact form.
//!
//! ## Usage
//!
//! ```
//! use autoregex::dfa::build_dfa;
//! use autoregex::synth::synthesize;
//!
//! // Accepts any number (including zero) of 'a's.
//! let dfa = build_dfa(1, vec!['a'], 1, vec![1], vec![(1, 'a', 1)]).unwrap();
//!
//! assert!(dfa.is_accepted("aaa").unwrap());
//!
//! let result = synthesize(&dfa);
//! assert_eq!(result.regex.to_string(), "a*");
//! ```
//!
//! ## Operations
//!
//! * [Building](dfa::build_dfa) and validating a [Dfa](dfa::Dfa)
//! * [Checking word acceptance](dfa::Dfa::is_accepted)
//! * [Synthesizing a regex](synth::synthesize) from a DFA, along with the
//!   full `a(k,i,j)` dynamic-programming table and a provenance table
//!   recording which DFA edges contributed to each step
//! * [Simplifying](regex::simplify::simplify) a [RegexTree](regex::RegexTree)
//!   to a compact form via ~20 Kleene-algebra identities, run to a fixed
//!   point
//! * [Deriving a browsable step tree](stepview::StepView) for interactive
//!   visualization of the synthesis, and resolving clicks back to `(k,i,j)`

pub mod dfa;
pub mod parser;
pub mod regex;
pub mod stepview;
pub mod synth;
