use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ingest::read_records;
use crate::models::SourceRecord;
use crate::utils::formatting::or_dash;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Rows { source } = cmd {
        let records = read_records(&expand_tilde(&source.input), source.from)?;

        let mut table = Table::new(&[
            "COURSE", "TITLE", "SECTION", "TYPE", "DAYS", "TIME", "BLDG", "ROOM",
        ]);

        for record in &records {
            match record {
                SourceRecord::Header(course) => {
                    table.add_row(vec![course.clone(), "(header)".to_string()]);
                }
                SourceRecord::Row(row) => {
                    let (title, section) = row
                        .meta
                        .as_ref()
                        .map(|m| (m.title.as_str(), m.section.as_str()))
                        .unwrap_or(("", ""));
                    table.add_row(vec![
                        or_dash(&row.subject_course),
                        or_dash(title),
                        or_dash(section),
                        or_dash(row.course_type().code()),
                        or_dash(&row.days),
                        or_dash(&row.time),
                        or_dash(&row.building),
                        or_dash(&row.room),
                    ]);
                }
            }
        }

        print!("{}", table.render());
        println!("\n{} record(s)", records.len());
    }
    Ok(())
}
