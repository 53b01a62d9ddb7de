// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::Result;

use tritone::{
    all_chords, find_chords_containing, notes, substitute, substitute_with_notes, ChordRegistry,
    LookupOptions,
};

fn print_usage() {
    println!("TRITONE - Chord naming and substitution");
    println!();
    println!("Usage: tritone [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --notes <CHORD>              Print the notes of a chord (e.g. \"G7\", \"Bb min\")");
    println!("  --find <PITCHES> [--exact]   Find chords containing the pitches (e.g. \"C E G\")");
    println!("  --sub <CHORD>                Tritone-substitute a dominant chord");
    println!("  --sub-notes <CHORD>          Substitute and print the resulting notes");
    println!("  --list                       List every chord the dictionary can name");
    println!("  --build <FILE> <ROOT> <NAME> Build a chord from a YAML definition file");
    println!("  --help                       Show this help message");
}

fn render_notes(chord: &str) -> Result<()> {
    let realized = notes(chord)?;
    let names: Vec<&str> = realized.iter().map(|n| n.name()).collect();
    println!("{}: {}", chord, names.join(" "));
    Ok(())
}

fn render_lookup(pitches: &str, exact: bool) -> Result<()> {
    let options = LookupOptions { match_exact: exact };
    let matches = find_chords_containing(pitches, &options)?;
    if matches.is_empty() {
        println!("No chords contain: {}", pitches);
        return Ok(());
    }
    for name in matches {
        println!("{}", name);
    }
    Ok(())
}

fn render_substitution(chord: &str, with_notes: bool) -> Result<()> {
    if with_notes {
        let (name, realized) = substitute_with_notes(chord)?;
        let names: Vec<&str> = realized.iter().map(|n| n.name()).collect();
        println!("{} -> {}: {}", chord, name, names.join(" "));
    } else {
        println!("{} -> {}", chord, substitute(chord)?);
    }
    Ok(())
}

fn render_custom_build(path: &str, root: &str, name: &str) -> Result<()> {
    let registry = ChordRegistry::load(path)?;
    let chord = registry.build(root, name)?;
    let names: Vec<&str> = chord.notes.iter().map(|n| n.name()).collect();
    println!("{}: {}", chord, names.join(" "));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("TRITONE - Chord naming and substitution");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--notes" => {
            if args.len() < 3 {
                eprintln!("Error: --notes requires a chord name");
                std::process::exit(1);
            }
            render_notes(&args[2])?;
        }
        "--find" => {
            if args.len() < 3 {
                eprintln!("Error: --find requires a pitch list");
                std::process::exit(1);
            }
            let exact = args.iter().any(|a| a == "--exact");
            render_lookup(&args[2], exact)?;
        }
        "--sub" => {
            if args.len() < 3 {
                eprintln!("Error: --sub requires a chord name");
                std::process::exit(1);
            }
            render_substitution(&args[2], false)?;
        }
        "--sub-notes" => {
            if args.len() < 3 {
                eprintln!("Error: --sub-notes requires a chord name");
                std::process::exit(1);
            }
            render_substitution(&args[2], true)?;
        }
        "--list" => {
            for (name, realized) in all_chords() {
                let names: Vec<&str> = realized.iter().map(|n| n.name()).collect();
                println!("{}: {}", name, names.join(" "));
            }
        }
        "--build" => {
            if args.len() < 5 {
                eprintln!("Error: --build requires a file, a root, and a quality name");
                std::process::exit(1);
            }
            render_custom_build(&args[2], &args[3], &args[4])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
