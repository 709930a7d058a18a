use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use kselect::binomial::{binomial_multiplicative, binomial_rolling, binomial_table};
use kselect::bit_game::count_moves;
use kselect::k_subset::KSubsets;
use kselect::reader;
use kselect::spiral::{spiral_iterative, spiral_recursive};
use kselect::summation::{self, SummationAlgorithm};

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Config {
    data_dir: String,
    summation_algo: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: ".".to_string(),
            summation_algo: "heap".to_string(),
        }
    }
}

fn load_config(path: &str) -> Config {
    if Path::new(path).exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from {}", path);
                    return config;
                }
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path, e);
                    eprintln!("Using default configuration");
                }
            },
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                eprintln!("Using default configuration");
            }
        }
    } else {
        println!("{} not found, using default configuration", path);
    }

    Config::default()
}

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn resolve_path(config: &Config, arg: &str) -> PathBuf {
    let direct = PathBuf::from(arg);
    if direct.exists() {
        direct
    } else {
        Path::new(&config.data_dir).join(arg)
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[&str], index: usize, what: &str) -> io::Result<T> {
    let token = args.get(index).ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput, format!("missing argument: {}", what))
    })?;
    token.parse().map_err(|_| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("invalid {}: {:?}", what, token),
        )
    })
}

fn run_solve(config: &Config, args: &[&str]) -> io::Result<()> {
    let file = args.first().copied().ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput, "missing argument: batch file path")
    })?;
    let results = reader::run_batch(&resolve_path(config, file))?;
    println!("Number of test cases: {}", results.len());
    for result in results {
        println!(
            "TC{}: n = {}, k = {}, cnt = {}",
            result.index, result.n, result.k, result.count
        );
    }
    Ok(())
}

fn run_binom(args: &[&str]) -> io::Result<()> {
    let n: u64 = parse_arg(args, 0, "n")?;
    let k: u64 = parse_arg(args, 1, "k")?;
    println!("n = {}; k = {}", n, k);
    println!("binomial_table(n, k)          = {}", binomial_table(n, k));
    println!("binomial_rolling(n, k)        = {}", binomial_rolling(n, k));
    println!(
        "binomial_multiplicative(n, k) = {}",
        binomial_multiplicative(n, k)
    );
    Ok(())
}

fn run_game(args: &[&str]) -> io::Result<()> {
    let token = args
        .first()
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "missing argument: n"))?;
    let n = match token.strip_prefix("0b") {
        Some(bits) => u32::from_str_radix(bits, 2),
        None => token.parse(),
    }
    .map_err(|_| Error::new(ErrorKind::InvalidInput, format!("invalid n: {:?}", token)))?;
    println!("n = {:#b}", n);
    println!("moves = {}", count_moves(n));
    Ok(())
}

fn run_subsets(args: &[&str]) -> io::Result<()> {
    let k: u32 = parse_arg(args, 0, "k")?;
    let n: u32 = parse_arg(args, 1, "n")?;
    if n >= 32 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "n must be at most 31 for mask enumeration",
        ));
    }
    let mut total = 0;
    for mask in KSubsets::new(k, n) {
        println!("{:0width$b}", mask, width = n as usize);
        total += 1;
    }
    println!("{} subsets of size {} out of {}", total, k, n);
    Ok(())
}

fn run_spiral(config: &Config, args: &[&str]) -> io::Result<()> {
    let file = args.first().copied().ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput, "missing argument: grid file path")
    })?;
    let contents = fs::read_to_string(resolve_path(config, file))?;
    let grid = parse_grid(&contents)?;

    println!("n = {}; m = {}", grid.len(), grid[0].len());
    for row in &grid {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("{}", cells.join(" "));
    }

    print!("spiral_iterative ");
    spiral_iterative(&grid, |_, _, value| print!("{} ", value));
    println!();
    print!("spiral_recursive ");
    spiral_recursive(&grid, |_, _, value| print!("{} ", value));
    println!();
    Ok(())
}

fn parse_grid(input: &str) -> io::Result<Vec<Vec<i32>>> {
    let mut tokens = input.split_whitespace();
    let mut next = |what: &str| -> io::Result<i32> {
        let token = tokens.next().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("unexpected end of input while reading {}", what),
            )
        })?;
        token.parse().map_err(|_| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("invalid {}: {:?}", what, token),
            )
        })
    };

    let rows = next("row count")?;
    let cols = next("column count")?;
    if rows <= 0 || cols <= 0 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "grid dimensions must be positive",
        ));
    }
    let mut grid = Vec::with_capacity(rows as usize);
    for _ in 0..rows {
        let mut row = Vec::with_capacity(cols as usize);
        for _ in 0..cols {
            row.push(next("grid value")?);
        }
        grid.push(row);
    }
    Ok(grid)
}

fn run_sum(config: &Config, args: &[&str]) -> io::Result<()> {
    let count: usize = parse_arg(args, 0, "count")?;
    let algorithms = match args.get(1).copied() {
        Some(name) => vec![SummationAlgorithm::from_name(name).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("unknown summation algorithm: {:?}", name),
            )
        })?],
        None => vec![
            SummationAlgorithm::Naive,
            SummationAlgorithm::Sorted,
            SummationAlgorithm::Partial,
            SummationAlgorithm::Tree,
            SummationAlgorithm::Heap,
        ],
    };

    println!("Generating {} random values...", count);
    let mut rng = rand::thread_rng();
    let values = summation::generate_values(count, &mut rng);

    for algorithm in algorithms {
        let start_time = SystemTime::now();
        let sum = summation::sum_with(algorithm, &values);
        let elapsed = SystemTime::now()
            .duration_since(start_time)
            .unwrap_or_default();
        let marker = if algorithm.name() == config.summation_algo {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<8} sum = {:.6e} in {} ms{}",
            algorithm.name(),
            sum,
            elapsed.as_millis(),
            marker
        );
    }
    Ok(())
}

fn print_help() {
    println!("The valid commands are->");
    println!("solve <file>: runs every k-smallest test case in the batch file");
    println!("binom <n> <k>: binomial coefficient, all three variants");
    println!("game <n>: moves in the bit rearrangement game (accepts 0b literals)");
    println!("subsets <k> <n>: all k-element subset masks of n bits");
    println!("spiral <file>: spiral traversal of the grid in the file");
    println!("sum <count> [naive|sorted|partial|tree|heap]: summation accuracy comparison");
    println!("exit | quit: leave");
}

fn main() {
    let mut rl = DefaultEditor::new().unwrap();

    let config_path = "config.json";
    let config = load_config(config_path);

    println!("\nCurrent Configuration:");
    println!("  Data Directory:      {}", config.data_dir);
    println!("  Summation Algorithm: {}", config.summation_algo);
    println!("\nType 'help' for commands or 'exit' to quit.\n");

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let parts: Vec<&str> = line.split_whitespace().collect();
                let command = parts[0];
                let args = &parts[1..];

                let outcome = match command {
                    "help" => {
                        print_help();
                        Ok(())
                    }
                    "solve" => run_solve(&config, args),
                    "binom" => run_binom(args),
                    "game" => run_game(args),
                    "subsets" => run_subsets(args),
                    "spiral" => run_spiral(&config, args),
                    "sum" => run_sum(&config, args),
                    "quit" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        println!(
                            "Invalid command. Type help if you want to see the valid commands"
                        );
                        Ok(())
                    }
                };

                if let Err(e) = outcome {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}
