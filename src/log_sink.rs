// Injectable destination for search progress messages
use log::Level;

/// Receives every message the search emits.
pub trait LogSink {
    fn log(&self, level: Level, message: &str);
}

/// Forwards to the `log` facade; the binary installs a timestamped stdout logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLogSink;

impl LogSink for DefaultLogSink {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "screen_locate", level, "{message}");
    }
}

impl<F> LogSink for F
where
    F: Fn(Level, &str),
{
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}

/// Keeps every line in memory, for assertions in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: std::sync::Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, line)| line.contains(needle))
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.lines().iter().filter(|(l, _)| *l == level).count()
    }
}

#[cfg(test)]
impl LogSink for RecordingSink {
    fn log(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}
