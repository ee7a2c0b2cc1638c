use log::{info, warn, LevelFilter};
use search_trees::{Traversal, TreeKind};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::error::Error;
use std::process;
use std::str::FromStr;

const SAMPLE_KEYS: [u32; 7] = [50, 30, 70, 20, 40, 60, 80];
const DEFAULT_COUNT: u32 = 100;
const USAGE: &str = "usage: search-trees [count] [log-level]";

fn parse_args() -> Result<(u32, LevelFilter), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let count = match args.next() {
        Some(arg) => arg.parse::<u32>()?,
        None => DEFAULT_COUNT,
    };
    let level = match args.next() {
        Some(arg) => LevelFilter::from_str(&arg)?,
        None => LevelFilter::Info,
    };
    Ok((count, level))
}

fn basic_operations(kind: TreeKind) {
    let mut tree = kind.build();
    for key in SAMPLE_KEYS.iter() {
        tree.insert(*key);
    }

    println!("{}", kind);
    for order in Traversal::ALL.iter() {
        println!("  {:<10} {:?}", order, tree.traverse(*order));
    }
    println!("  height     {}", tree.height());
    for key in &[40, 90] {
        println!("  search {:<3} {}", key, tree.search(key));
    }
    match tree.delete(&40) {
        Ok(removed) => println!("  delete 40  {} -> {:?}", removed, tree.inorder()),
        Err(err) => warn!("{}", err),
    }
}

fn worst_case(count: u32) {
    println!("ascending keys 1..={}", count);
    let mut heights = Vec::new();
    for kind in TreeKind::ALL.iter() {
        let mut tree = kind.build();
        for key in 1..=count {
            tree.insert(key);
        }
        let height = tree.height();
        println!("  {:<16} height {}", kind, height);
        heights.push(height);
    }

    let bound = 2.0 * (f64::from(count) + 1.0).log2();
    info!("Red black height bound for {} keys is {:.2}.", count, bound);
    if let [unbalanced, red_black] = heights[..] {
        if red_black > 0 {
            println!("  improvement      {:.2}x", unbalanced as f64 / red_black as f64);
        }
    }
}

fn main() {
    let (count, level) = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}\n{}", err, USAGE);
            process::exit(1);
        },
    };

    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to install logger: {}", err);
    }

    for kind in TreeKind::ALL.iter() {
        basic_operations(*kind);
    }
    worst_case(count);
}
