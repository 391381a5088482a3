//! Builds a tree from a handful of sequencing-run paths and prints it
//!
//! Usage:
//!   cargo run --example print_tree [path ...]
//!
//! Without arguments a small built-in run layout is used.

use file_tree::prelude::*;
use std::env;

fn main() {
    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths = vec![
            "run1/lane1/S1_L001_R1_001.fastq.gz".into(),
            "run1/lane1/S1_L001_R2_001.fastq.gz".into(),
            "run1/lane2/S2_L002_R1_001.fastq.gz".into(),
            "reference/GRCh38.fa".into(),
        ];
    }

    let tree = match build_tree(
        paths,
        |p| {
            p.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        },
        |p| p.clone(),
    ) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error building tree: {}", e);
            std::process::exit(1);
        }
    };

    println!("Total nodes: {}", tree.node_count());
    println!("Files: {}", tree.files().len());
    println!("Directories: {}", tree.directories().len() - 1);
    println!();

    for id in tree.walk(TraversalOrder::PreOrder).skip(1) {
        let Some(node) = tree.get(id) else { continue };
        let indent = "  ".repeat(tree.depth(id) - 1);
        let icon = match node.kind {
            NodeKind::Directory => "📁",
            NodeKind::File => "📄",
        };
        println!("{}{} {}", indent, icon, node.name);
    }

    println!();
    println!("Level order:");
    for id in tree.flatten_all() {
        let key = tree.key(id).map(|k| k.to_string()).unwrap_or_default();
        println!("  [{}] {}", key, tree.path(id));
    }
}
