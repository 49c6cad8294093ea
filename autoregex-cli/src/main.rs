mod dfa_json;
mod error;

use autoregex::dfa::Dfa;
use autoregex::stepview::{StepNode, StepView};
use autoregex::synth::synthesize;
use clap::{Parser, Subcommand};
use dfa_json::DfaJson;
use error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exercises the `autoregex` library against the JSON DFA encoding a
/// front-end would send it: synthesize a regex, check acceptance, dump a
/// DFA, or browse the `a(k,i,j)` step tree.
#[derive(Parser)]
#[command(name = "autoregex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize and print the regex equivalent to a DFA.
    Synthesize { dfa: PathBuf },
    /// Check whether a DFA accepts a word.
    Accepts { dfa: PathBuf, word: String },
    /// Print a human-readable dump of a DFA's states and transitions.
    Table { dfa: PathBuf },
    /// Print the browsable step tree of the `a(k,i,j)` recurrence, or,
    /// given `--label`, resolve a single step to its DP cell's regex.
    Steps {
        dfa: PathBuf,
        #[arg(long)]
        label: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Synthesize { dfa } => {
            let dfa = load_dfa(&dfa)?;
            let result = synthesize(&dfa);
            info!(states = dfa.state_count(), "synthesized regex");
            println!("{}", result.regex.to_ui_string());
        }
        Command::Accepts { dfa, word } => {
            let dfa = load_dfa(&dfa)?;
            println!("{}", dfa.is_accepted(&word)?);
        }
        Command::Table { dfa } => {
            let dfa = load_dfa(&dfa)?;
            print!("{dfa}");
        }
        Command::Steps { dfa, label } => {
            let dfa = load_dfa(&dfa)?;
            match label {
                None => {
                    let view = StepView::build_tree(dfa.state_count(), dfa.initial(), dfa.accept());
                    print_step_node(&view.root, 0);
                }
                Some(label) => {
                    let (k, i, j) = StepView::parse_label(&label)?;
                    info!(k, i, j, "resolved step label");
                    let result = synthesize(&dfa);
                    println!("{}", result.r[k][i][j].to_ui_string());
                }
            }
        }
    }
    Ok(())
}

fn load_dfa(path: &PathBuf) -> Result<Dfa, Error> {
    let json = fs::read_to_string(path).map_err(|e| Error::File(path.clone(), e))?;
    DfaJson::parse(&json)
}

fn print_step_node(node: &StepNode, depth: usize) {
    let marker = if node.highlighted { " *" } else { "" };
    println!("{}{}{}", "  ".repeat(depth), node.label, marker);
    for child in &node.children {
        print_step_node(child, depth + 1);
    }
}
