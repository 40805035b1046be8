use std::error::Error;
use std::io::BufRead;

use log::{debug, LevelFilter};

use grove_mixer::{apply_decryption_key, mix, read_ints, Int};

const HELP: &str = "\
day20 <opts> part1|part2

Reads one integer per line from stdin and prints the sum of the grove
coordinates after mixing.

-h|--help
    show help
-v|--verbose
    log each mixing pass (RUST_LOG overrides)
";

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut args: Vec<&str> = args.iter().map(String::as_str).collect();
    if args.iter().any(|&a| a == "-h" || a == "--help") {
        print!("{}", HELP);
        return Ok(());
    }
    let verbose = args.iter().any(|&a| a == "-v" || a == "--verbose");
    args.retain(|&a| a != "-v" && a != "--verbose");

    env_logger::builder()
        .format_timestamp(None)
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    match args[..] {
        ["part1"] => println!("{}", part1(std::io::stdin().lock())?),
        ["part2"] => println!("{}", part2(std::io::stdin().lock())?),
        _ => {
            eprint!("{}", HELP);
            return Err("must specify part1|part2".into());
        },
    }
    Ok(())
}

fn part1(r: impl BufRead) -> Result<Int, Box<dyn Error>> {
    let a = read_ints(r)?;
    debug!("read {} values", a.len());
    Ok(mix(&a, 1)?)
}

fn part2(r: impl BufRead) -> Result<Int, Box<dyn Error>> {
    let mut a = read_ints(r)?;
    debug!("read {} values", a.len());
    apply_decryption_key(&mut a)?;
    Ok(mix(&a, 10)?)
}
