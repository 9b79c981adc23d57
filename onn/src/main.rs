extern crate getopts;
use getopts::Options;
use std::{env, process};
use tracing::{error, info};

use onn::{BuildParams, Config};

struct Opts {
    config_path: String,
    t_step_param: Option<f64>,
    num_evals_param: Option<f64>,
}

fn parse_float(matches: &getopts::Matches, name: &str) -> Option<f64> {
    let raw = matches.opt_str(name)?;
    match raw.parse::<f64>() {
        Ok(v) => Some(v),
        Err(e) => {
            error!("(onn) invalid value for --{}: {} ({})", name, raw, e);
            process::exit(1)
        }
    }
}

fn parse_args() -> Opts {
    fn print_usage(program: &str, opts: Options) {
        let brief = format!("Usage: {} FILE [options]", program);
        print!("{}", opts.usage(&brief));
    }

    let args = env::args().collect::<Vec<String>>();
    let program = args[0].clone();
    let mut opts = Options::new();

    opts.optopt("f", "file", "Network configuration file", "/path/to/onn.cfg.json");
    opts.optopt(
        "t",
        "t-step-param",
        "Fraction of the fastest quarter period used as the step size",
        "0.2",
    );
    opts.optopt(
        "n",
        "num-evals-param",
        "Slowest-node periods covered by the horizon",
        "1",
    );
    opts.optflag(
        "g",
        "generate-config",
        "Generate a config at your current path.",
    );

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            print_usage(&program, opts);
            process::exit(1);
        }
    };

    if matches.opt_present("g") {
        let config = Config::new();
        if let Err(e) = config.dump("./onn.cfg.json") {
            error!("(onn) failed to write config: {}", e);
            process::exit(1)
        }

        info!("(onn) wrote ./onn.cfg.json");
        process::exit(0);
    }

    let t_step_param = parse_float(&matches, "t-step-param");
    let num_evals_param = parse_float(&matches, "num-evals-param");

    match matches.opt_str("f") {
        Some(config_path) => Opts {
            config_path,
            t_step_param,
            num_evals_param,
        },
        None => {
            print_usage(&program, opts);
            process::exit(0)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args();

    let mut config = match Config::load(&opts.config_path) {
        Ok(c) => c,
        Err(e) => {
            error!("(onn) failed to load config: {}", e);
            process::exit(1)
        }
    };

    let BuildParams {
        t_step_param,
        num_evals_param,
    } = config.params;
    config.params = BuildParams::new(
        opts.t_step_param.unwrap_or(t_step_param),
        opts.num_evals_param.unwrap_or(num_evals_param),
    );

    let network = match config.build() {
        Ok(n) => n,
        Err(e) => {
            error!("(onn) failed to build network: {}", e);
            process::exit(1)
        }
    };

    match serde_json::to_string_pretty(&network.summary()) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            error!("(onn) failed to serialize summary: {}", e);
            process::exit(1)
        }
    }
}
