mod cli;

use std::env;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use event_calendar::{loader, Calendar, Month};
use log::info;

const SAMPLE_EVENTS: &str = include_str!("../../data/events.txt");

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "event_calendar=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

fn load(args: &cli::Args) -> Result<Calendar> {
    let mut calendar = Calendar::new();

    let added = match &args.file {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            loader::load_events(BufReader::new(file), &mut calendar)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => loader::load_str(SAMPLE_EVENTS, &mut calendar).context("loading bundled sample")?,
    };

    info!("loaded {added} events into {} months", calendar.months().count());
    Ok(calendar)
}

fn print_calendar(calendar: &Calendar, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(calendar)?);
    } else {
        println!("{calendar}");
    }

    Ok(())
}

fn format_months(months: impl IntoIterator<Item = Month>) -> String {
    let months = months.into_iter().map(|month| month.to_string()).collect::<Vec<_>>();
    format!("[{}]", months.join(", "))
}

fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());
    setup_logging();

    let mut calendar = load(&args)?;
    print_calendar(&calendar, args.json)?;
    println!();

    for month in [Month::February, Month::March] {
        println!("Events in {month} = {}", calendar.total_events_in_month(month));
    }
    println!(
        "Month(s) with most events {}",
        format_months(calendar.months_with_most_events())
    );

    println!();
    println!("Longest event: {}", calendar.longest_event());

    println!();
    println!("Cancelling events of {}", format_months(args.cancel_months.iter().copied()));
    let cancelled = calendar.cancel_events(&args.cancel_months, args.cancel_day);
    println!("Cancelled {cancelled} events");

    println!();
    println!("After cancelling events ...");
    print_calendar(&calendar, args.json)
}
