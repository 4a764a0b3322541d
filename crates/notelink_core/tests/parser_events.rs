use log::{Level, LevelFilter, Log, Metadata, Record};
use notelink_core::parse_content;
use std::sync::Mutex;

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = CAPTURED.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

fn tokenize_events() -> Vec<String> {
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.starts_with("event=tokenize "))
        .cloned()
        .collect()
}

#[test]
fn tokenize_event_is_logged_with_and_without_images() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    parse_content("plain [[Link]] text");
    let events = tokenize_events();
    assert_eq!(events.len(), 1);
    assert!(events[0].contains("images=0"));
    assert!(events[0].contains("segments=3"));

    parse_content("see ![a](a.png)");
    let events = tokenize_events();
    assert_eq!(events.len(), 2);
    assert!(events[1].contains("images=1"));

    parse_content("");
    assert_eq!(tokenize_events().len(), 2);
}
