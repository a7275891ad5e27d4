#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use webreg2ics::core::ScheduleRules;
use webreg2ics::models::ScheduleRow;

pub fn w2i() -> Command {
    cargo_bin_cmd!("webreg2ics")
}

/// Unique temp path for a test artifact; any leftover file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_webreg2ics.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the built-in defaults apply.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}

pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write fixture");
    p
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn at(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    d.and_time(time(h, m))
}

pub fn rules() -> ScheduleRules {
    ScheduleRules::default()
}

pub fn row(subject: &str, kind: &str, days: &str, time: &str, bldg: &str, room: &str) -> ScheduleRow {
    ScheduleRow::new(subject, kind, days, time, bldg, room)
}

/// Table as written by the PDF extractor: wrapped header, blank subject on
/// continuation rows.
pub const SCHEDULE_CSV: &str = "\
\"Subject
Course\",Title,Section Code,Type,Instructor,Grade Option,Units,Days,Time,BLDG,Room,Status / (Position)
CSE 100,Advanced Data Structures,A00,LE,\"Smith, Jane\",L,4.00,MWF,10:00a-10:50a,PETER,108,Enrolled
,,A01,DI,,,,Tu,5:00p-5:50p,CENTR,115,
,,,FI,,,,FINAL 03/13/2026,11:30a-2:30p,WLH,2001,
MATH 20C,Calculus and Analytic Geometry,B00,LE,\"Lee, Ann\",L,4.00,TuTh,2:00p-3:20p,YORK,2722,Enrolled
,,B01,DI,,,,W,TBA,TBA,TBA,
,,,MI,,,,Th 02/05/2026,7:00p-8:50p,CENTR,105,
";

/// OCR text of the same page (with typical recognition noise).
pub const SCHEDULE_TEXT: &str = "\
Winter Quarter 2026 Class Schedule

CSE   100 Advanced Data Structures  AOO LE Smith, Jane L 4.00 MWE 10:00a-10:50a PETER 108
  A01 DI Tu 5:00p-5:50p CENTR 115
FI Sa 03/14/2026 11:30a-2:30p WLH 2001
MATH 20C
B01 DI W 4:00p-4:50p APM B402A
";
