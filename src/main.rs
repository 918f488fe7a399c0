//! debtnet CLI
//!
//! Inspect and reduce debt networks from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show counts and per-vertex balances
//! debtnet summary --input debts.json
//!
//! # Cancel circular debt through one vertex
//! debtnet reduce --input debts.json --start alice
//!
//! # Cancel the external circular debt of a group
//! debtnet reduce --input debts.json --group alice,bob
//!
//! # Generate a random debt network for testing
//! debtnet generate --vertices 10 --debts 30
//! ```

use debtnet::graph::ledger::DebtGraph;
use debtnet::input::{parse_debts, to_debt_file};
use debtnet::netting::{reduce, reduce_group};
use debtnet::simulation::{generate_random_network, NetworkConfig};
use std::collections::BTreeSet;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"debtnet — debt network modeling and circular debt cancellation

USAGE:
    debtnet <COMMAND> [OPTIONS]

COMMANDS:
    summary     Show counts and per-vertex balances of a debt network
    reduce      Cancel circular debt (single vertex or group)
    generate    Generate a random debt network (for testing)
    help        Show this message

OPTIONS (summary, reduce):
    --input <FILE>      Path to JSON debts file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (reduce):
    --start <VERTEX>    Cancel cycles through this vertex
    --group <LIST>      Comma-separated group members (frontier netting)

OPTIONS (generate):
    --vertices <N>      Number of vertices (default: 10)
    --debts <N>         Number of debts (default: 30)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    debtnet summary --input debts.json
    debtnet reduce --input debts.json --start alice --format json
    debtnet reduce --input debts.json --group alice,bob
    debtnet generate --vertices 20 --debts 60 --output test.json"#
    );
}

#[derive(serde::Serialize)]
struct BalanceOutput {
    vertex: String,
    debt: String,
    credit: String,
    net: String,
}

#[derive(serde::Serialize)]
struct SummaryOutput {
    vertex_count: usize,
    edge_count: usize,
    total_outstanding: String,
    balances: Vec<BalanceOutput>,
}

#[derive(serde::Serialize)]
struct ReduceOutput {
    before_total: String,
    after_total: String,
    savings: String,
    debts: Vec<debtnet::input::DebtRecord>,
}

fn load_graph(path: &str) -> DebtGraph<String> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    parse_debts(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing debts: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "debts": [
    {{ "creditor": "alice", "debtor": "bob", "amount": "40" }}
  ]
}}"#
        );
        process::exit(1);
    })
}

fn balances(graph: &DebtGraph<String>) -> Vec<BalanceOutput> {
    graph
        .iter_vertices()
        .map(|v| BalanceOutput {
            vertex: v.clone(),
            debt: graph.debt_of(v).to_string(),
            credit: graph.credit_of(v).to_string(),
            net: graph.net_of(v).to_string(),
        })
        .collect()
}

fn cmd_summary(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let graph = load_graph(&path);
    let output = SummaryOutput {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        total_outstanding: graph.total_outstanding().to_string(),
        balances: balances(&graph),
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("Vertices:          {}", output.vertex_count);
        println!("Debts:             {}", output.edge_count);
        println!("Total outstanding: {}", output.total_outstanding);
        println!();
        println!("{:<20} {:>12} {:>12} {:>12}", "VERTEX", "OWES", "OWED", "NET");
        for b in &output.balances {
            println!(
                "{:<20} {:>12} {:>12} {:>12}",
                b.vertex, b.debt, b.credit, b.net
            );
        }
    }
}

fn cmd_reduce(args: &[String]) {
    let mut input_path = None;
    let mut start: Option<String> = None;
    let mut group_list: Option<String> = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--start" => {
                i += 1;
                start = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--start requires a vertex name");
                    process::exit(1);
                }));
            }
            "--group" => {
                i += 1;
                group_list = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--group requires a comma-separated list");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });
    if start.is_some() == group_list.is_some() {
        eprintln!("Error: exactly one of --start or --group is required");
        process::exit(1);
    }

    let mut graph = load_graph(&path);
    let before_total = graph.total_outstanding();

    if let Some(start) = start {
        if !graph.has_vertex(&start) {
            eprintln!("Error: '{}' is not a vertex of the network", start);
            process::exit(1);
        }
        reduce(&mut graph, &start);
    } else if let Some(list) = group_list {
        let members: BTreeSet<String> = list.split(',').map(|s| s.trim().to_string()).collect();
        for member in &members {
            if !graph.has_vertex(member) {
                eprintln!("Error: '{}' is not a vertex of the network", member);
                process::exit(1);
            }
        }
        let group = graph.induced_subgraph(&members);
        reduce_group(&mut graph, &group);
    }

    let after_total = graph.total_outstanding();
    let output = ReduceOutput {
        before_total: before_total.to_string(),
        after_total: after_total.to_string(),
        savings: (before_total - after_total).to_string(),
        debts: to_debt_file(&graph).debts,
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("Outstanding before: {}", output.before_total);
        println!("Outstanding after:  {}", output.after_total);
        println!("Cancelled:          {}", output.savings);
        println!();
        if output.debts.is_empty() {
            println!("No debts remain.");
        } else {
            println!("Remaining debts:");
            for d in &output.debts {
                println!("  {} owes {} {}", d.debtor, d.creditor, d.amount);
            }
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut vertices = 10usize;
    let mut debts = 30usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--vertices" => {
                i += 1;
                vertices = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--vertices requires a number");
                    process::exit(1);
                });
            }
            "--debts" => {
                i += 1;
                debts = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--debts requires a number");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = NetworkConfig {
        vertex_count: vertices,
        avg_debts_per_vertex: debts / vertices.max(1),
        ..Default::default()
    };
    let graph = generate_random_network(&config);
    let json = serde_json::to_string_pretty(&to_debt_file(&graph)).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} debts across {} vertices → {}",
            graph.edge_count(),
            vertices,
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "summary" => cmd_summary(rest),
        "reduce" => cmd_reduce(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
