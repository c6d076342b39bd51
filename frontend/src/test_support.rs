use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Installs the capturing logger and clears this thread's records.
pub fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already set");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

pub fn take_logs() -> Vec<(Level, String)> {
    RECORDS.with(|r| r.borrow_mut().drain(..).collect())
}

/// Text content of rendered markup, tags removed and the entities the
/// renderer emits decoded. Other numeric references are left as-is.
pub fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

mod tests {
    use super::*;

    #[test]
    fn text_content_strips_tags_and_decodes_entities() {
        assert_eq!(
            text_content("<div><button>Sign in &amp; go &lt;now&gt;</button></div>"),
            "Sign in & go <now>"
        );
        assert_eq!(text_content("<p>&amp;lt;</p>"), "&lt;");
    }
}
