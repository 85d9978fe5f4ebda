/// Clipboard sinks for copied declarations.
use anyhow::{Context, Result};

/// Write-only clipboard capability. Writes may fail; callers must not
/// assume success.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("clipboard unavailable")?);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Ok(());
        };
        if let Err(err) = clipboard.set_text(text.to_owned()) {
            // Drop the handle so the next copy reconnects.
            self.inner = None;
            return Err(err).context("failed to write to clipboard");
        }
        Ok(())
    }
}

/// Keeps every write in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("clipboard rejected write");
        }
        self.writes.push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_records_writes() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.write_text("background: red;").unwrap();
        clipboard.write_text("background: blue;").unwrap();
        assert_eq!(clipboard.writes.len(), 2);
        assert_eq!(clipboard.last(), Some("background: blue;"));
    }

    #[test]
    fn failing_clipboard_reports_error() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(clipboard.write_text("x").is_err());
        assert!(clipboard.last().is_none());
    }
}
