use std::path::PathBuf;
use std::process;

use event_calendar::Month;
use getopts::Options;

pub struct Args {
    pub file: Option<PathBuf>,
    pub cancel_months: Vec<Month>,
    pub cancel_day: u8,
    pub json: bool,
}

const DEFAULT_CANCEL_MONTHS: [Month; 4] = [Month::February, Month::March, Month::May, Month::June];

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "f",
        "file",
        "Event list to load, one `name; month; day; HH:MM; minutes` per line [Default: bundled sample]",
        "PATH",
    );
    opts.optopt(
        "m",
        "months",
        "Comma-separated months to cancel events in [Default: FEBRUARY,MARCH,MAY,JUNE]",
        "MONTHS",
    );
    opts.optopt(
        "d",
        "day",
        "Day of week to cancel, 1 (Monday) to 7 (Sunday) [Default: 6]",
        "DAY",
    );
    opts.optflag("j", "json", "Print calendars as JSON [Default: false]");
    opts
}

fn parse_months(raw: &str) -> Result<Vec<Month>, String> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.parse::<Month>().map_err(|err| err.to_string()))
        .collect()
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let file = matches.opt_str("file").map(PathBuf::from);

    let cancel_months = match matches.opt_str("months") {
        None => DEFAULT_CANCEL_MONTHS.to_vec(),
        Some(raw) => match parse_months(&raw) {
            Ok(months) => months,
            Err(err) => {
                eprintln!("Provided value for option 'months' is invalid: {err}");
                process::exit(1);
            }
        },
    };

    let cancel_day = match matches.opt_get_default("day", 6u8) {
        Ok(day) if (1..=7).contains(&day) => day,
        Ok(day) => {
            eprintln!("Provided value for option 'day' is invalid: {day} is not between 1 and 7");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Provided value for option 'day' is invalid: {err}");
            process::exit(1);
        }
    };

    Args {
        file,
        cancel_months,
        cancel_day,
        json: matches.opt_present("json"),
    }
}
