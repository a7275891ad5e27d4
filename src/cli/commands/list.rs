use crate::cli::commands::{load_schedule, report_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{CalendarEvent, CourseType};
use crate::ui::messages::header;
use crate::utils::colors::{color_for_event, colorize};
use crate::utils::days::DayCodeTable;
use crate::utils::formatting::{bold, or_dash};
use crate::utils::table::Table;
use crate::utils::time::format_short;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        source,
        term,
        dates,
    } = cmd
    {
        let (cfg, schedule) = load_schedule(source, term, cfg)?;
        let days = DayCodeTable::new(cfg.day_codes.clone());

        header(format!(
            "Term {} → {}",
            cfg.term.start.format("%Y-%m-%d"),
            cfg.term.end.format("%Y-%m-%d")
        ));

        let mut table = Table::new(&["TITLE", "KIND", "WHEN", "TIME", "LOCATION", "SKIPS"]);
        for ev in &schedule.events {
            table.add_row(event_row(ev, &days));
        }
        print!("{}", table.render());

        if *dates {
            println!();
            for ev in &schedule.events {
                print_dates(ev);
            }
        }

        println!(
            "\n{} event(s), {} row(s) ignored, {} skipped",
            schedule.events.len(),
            schedule.ignored,
            schedule.skipped.len()
        );
        report_skipped(&schedule);
    }
    Ok(())
}

fn print_dates(ev: &CalendarEvent) {
    match ev {
        CalendarEvent::Recurring(e) => {
            let list: Vec<String> = e
                .occurrences()
                .iter()
                .map(|d| d.format("%m/%d").to_string())
                .collect();
            println!(
                "{} ({}): {}",
                bold(&e.title),
                e.weekday,
                colorize(&list.join(" "), color_for_event(false))
            );
        }
        CalendarEvent::OneOff(e) => {
            println!(
                "{}: {}",
                bold(&e.title),
                colorize(&e.start.format("%m/%d").to_string(), color_for_event(true))
            );
        }
    }
}

fn event_row(ev: &CalendarEvent, days: &DayCodeTable) -> Vec<String> {
    match ev {
        CalendarEvent::Recurring(e) => {
            let kind = CourseType::from_code(&e.type_code);
            let skips: Vec<String> = e
                .excluded
                .iter()
                .map(|d| d.format("%m/%d").to_string())
                .collect();
            vec![
                e.title.clone(),
                kind.describe().to_string(),
                format!(
                    "{} weekly",
                    days.code_for(e.weekday)
                        .map(str::to_string)
                        .unwrap_or_else(|| e.weekday.to_string())
                ),
                format!("{}-{}", format_short(e.start), format_short(e.end)),
                or_dash(&e.location),
                or_dash(&skips.join(",")),
            ]
        }
        CalendarEvent::OneOff(e) => {
            let kind = CourseType::from_code(&e.type_code);
            vec![
                e.title.clone(),
                kind.describe().to_string(),
                e.start.format("%a %Y-%m-%d").to_string(),
                format!("{}-{}", format_short(e.start.time()), format_short(e.end.time())),
                or_dash(&e.location),
                "-".to_string(),
            ]
        }
    }
}
