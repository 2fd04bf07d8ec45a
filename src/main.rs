use std::{io::BufRead, process::exit, time::Instant};

use clap::Parser as ClapParser;

use propdnf::{ast::counterexample, parse_with, Error, Normalizer, Options};

/// Converts propositional formulas into disjunctive normal form
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Args {
    /// Always read `T` and `F` at the start of a token as constants.
    /// Without this flag, `TFA` is the variable `TFA`; with it, `TFA` is rejected.
    #[arg(long)]
    strict: bool,

    /// Drop `F` from disjunctions and `T` from conjunctions during normalization
    #[arg(long)]
    fold_identities: bool,

    /// Print the parsed tree before its normal form
    #[arg(long)]
    ast: bool,

    /// Verify by truth table that the normal form is equivalent to the input.
    /// Takes time exponential in the number of variables.
    #[arg(long)]
    check: bool,

    /// The formulas to convert. If none are given, one formula is read from every non-empty line of stdin.
    formulas: Vec<String>,
}

/// The main function of the converter. Parses the command line arguments and converts every formula.
fn main() {
    env_logger::init();
    let ts = Instant::now();
    let cli = Args::parse();
    let opts = convert_options(&cli);

    let formulas = if cli.formulas.is_empty() {
        match read_stdin() {
            Ok(lines) => lines,
            Err(err) => {
                log::error!("Error: failed to read stdin: {}", err);
                exit(1);
            }
        }
    } else {
        cli.formulas.clone()
    };

    let mut code = 0;
    for formula in &formulas {
        match run(formula, &cli, &opts) {
            Ok(true) => {}
            Ok(false) => code = 2,
            Err(err) => {
                log::error!("Error in {:?}: {}", formula, err);
                code = code.max(1);
            }
        }
    }

    log::info!("Done ({}ms).", ts.elapsed().as_millis());
    if code != 0 {
        exit(code);
    }
}

/// Converts and prints a single formula.
/// Returns `false` if `--check` found an assignment under which the normal form differs from the input.
fn run(formula: &str, cli: &Args, opts: &Options) -> Result<bool, Error> {
    let tree = parse_with(formula, opts)?;
    if cli.ast {
        println!("{:#?}", tree);
    }

    let t = Instant::now();
    let dnf = Normalizer::new(opts).normalize(&tree);
    log::debug!(
        "Normalized {} nodes into {} nodes ({:?})",
        tree.size(),
        dnf.size(),
        t.elapsed()
    );
    println!("{}", dnf);

    if cli.check {
        match counterexample(&tree, &dnf) {
            None => log::info!("Normal form verified over {} variables", tree.variables().len()),
            Some(assignment) => {
                log::error!("Normal form differs from input under {}", assignment);
                return Ok(false);
            }
        }
    }
    Ok(true)
}

fn read_stdin() -> std::io::Result<Vec<String>> {
    let mut formulas = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            formulas.push(line);
        }
    }
    Ok(formulas)
}

fn convert_options(options: &Args) -> Options {
    let mut opts = Options::default();
    if options.strict {
        opts.strict_constants = true;
    }
    if options.fold_identities {
        opts.fold_identities = true;
    }
    opts
}
