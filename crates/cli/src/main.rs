//! Interactive demo shell: type a message, see the annotated prompt that
//! would be sent to the LLM provider.

use anyhow::Context;
use chrono::NaiveDate;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use sentio_core::config::SentioCfg;
use sentio_core::holiday::{
    DomesticCalendar, InternationalCalendar, TableDomesticCalendar, TableInternationalCalendar,
};
use sentio_core::perception::Perceptor;
use sentio_core::types::{MessageEvent, MessageType, ProviderRequest};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            let value = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config file {path}"))?;
            SentioCfg::from_value(value)
        }
        None => SentioCfg::default(),
    };

    let (domestic, international) = demo_calendars();
    let perceptor = Perceptor::new(cfg, Some(domestic), Some(international));

    println!("sentio demo shell — /platform <name> to switch platform, /q to quit");
    let mut platform = String::from("telegram");
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                if matches!(text, "/q" | "/exit" | "/quit") {
                    break;
                }
                if let Some(name) = text.strip_prefix("/platform ") {
                    platform = name.trim().to_string();
                    println!("platform set to {platform}");
                    continue;
                }
                editor.add_history_entry(text)?;

                let event =
                    MessageEvent::text_message(&platform, Some(MessageType::FriendMessage), text);
                let mut req = ProviderRequest::new(text);
                perceptor.annotate_now(&event, &mut req);
                println!("{}", req.prompt);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }
    }

    Ok(())
}

/// Small built-in calendars so the demo shows holiday output without any
/// external data. The 2024 CN entries include one make-up weekend.
fn demo_calendars() -> (Box<dyn DomesticCalendar>, Box<dyn InternationalCalendar>) {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();

    let domestic = TableDomesticCalendar::new()
        .with_holiday(d(2024, 1, 1), "元旦")
        .with_holiday(d(2024, 2, 10), "春节")
        .with_holiday(d(2024, 2, 11), "春节")
        .with_holiday(d(2024, 2, 12), "春节")
        .with_holiday(d(2024, 4, 4), "清明节")
        .with_holiday(d(2024, 5, 1), "劳动节")
        .with_holiday(d(2024, 6, 10), "端午节")
        .with_holiday(d(2024, 9, 17), "中秋节")
        .with_holiday(d(2024, 10, 1), "国庆节")
        .with_makeup_workday(d(2024, 2, 4))
        .with_makeup_workday(d(2024, 2, 18))
        .with_makeup_workday(d(2024, 9, 29));

    let international = TableInternationalCalendar::new()
        .with_country("US")
        .with_country("GB")
        .with_holiday("JP", d(2024, 1, 1), "元日")
        .with_holiday("JP", d(2024, 5, 3), "憲法記念日")
        .with_holiday("US", d(2024, 12, 25), "Christmas Day")
        .with_holiday("GB", d(2024, 12, 25), "Christmas Day");

    (Box::new(domestic), Box::new(international))
}
