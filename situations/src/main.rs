extern crate getopts;
use getopts::Options;
use onn::{BuildParams, OnnResult};
use situations::{layered, report, single_rates, sweep};
use std::{env, f64::consts::FRAC_PI_2, process};
use tracing::error;

const SCENARIOS: [&str; 4] = ["quarter-wave", "two-rates", "layered", "sweep"];

pub fn quarter_wave() -> OnnResult<()> {
    let network = single_rates(&[FRAC_PI_2 * FRAC_PI_2], &BuildParams::default())?;
    report("quarter-wave", &network);
    Ok(())
}

pub fn two_rates() -> OnnResult<()> {
    let network = single_rates(&[1., 4.], &BuildParams::new(1., 1.))?;
    report("two-rates", &network);
    Ok(())
}

fn run(scenario: &str) -> OnnResult<()> {
    match scenario {
        "quarter-wave" => quarter_wave(),
        "two-rates" => two_rates(),
        "layered" => layered().map(|_| ()),
        "sweep" => sweep(&[0.5, 2., 9.], &[0.05, 0.1, 0.2], &[1., 5., 20.]),
        _ => unreachable!(),
    }
}

fn parse_args() -> Vec<String> {
    fn print_usage(program: &str, opts: Options) {
        let brief = format!("Usage: {} [options]", program);
        print!("{}", opts.usage(&brief));
    }

    let args = env::args().collect::<Vec<String>>();
    let program = args[0].clone();
    let mut opts = Options::new();

    opts.optopt(
        "s",
        "scenario",
        "Scenario to run, all of them when omitted",
        &SCENARIOS.join("|"),
    );

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            print_usage(&program, opts);
            process::exit(1);
        }
    };

    match matches.opt_str("s") {
        Some(s) if SCENARIOS.contains(&s.as_str()) => vec![s],
        Some(s) => {
            eprintln!("unknown scenario: {}", s);
            print_usage(&program, opts);
            process::exit(1);
        }
        None => SCENARIOS.iter().map(|s| s.to_string()).collect(),
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    for scenario in parse_args() {
        if let Err(e) = run(&scenario) {
            error!("(situations) {} failed: {}", scenario, e);
            process::exit(1);
        }
    }
}
