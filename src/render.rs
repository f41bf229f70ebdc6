use crate::config::Config;
use crate::log_entry::LogEntry;

const PAGE_STYLE: &str = r#"    .box_log {
      margin: 5px;
      padding: 5px;
      border-color: #aaaaaa;
      border-radius: 5px;
      border-style: dotted;
      background: #cccccc;
    }
    .box_log summary {
      overflow: scroll;
      white-space: wrap;
    }
    .box_log pre {
      overflow-x: auto;
    }
"#;

/// Turns parsed entries into one HTML page with a collapsible block each.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    title: String,
    escape_html: bool,
}

impl PageRenderer {
    pub fn new(title: impl Into<String>, escape_html: bool) -> Self {
        Self {
            title: title.into(),
            escape_html,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.title.clone(), config.escape_html)
    }

    pub fn render_entry(&self, entry: &LogEntry) -> String {
        let summary = entry.summary();
        format!(
            concat!(
                "    <div class=\"box_log\">\n",
                "    <details>\n",
                "        <summary>{}</summary>\n",
                "        <pre>{}</pre>\n",
                "    </details>\n",
                "    </div>\n",
            ),
            self.text(&summary),
            self.text(&entry.body),
        )
    }

    /// Returns `None` when there is nothing to render.
    pub fn render_page(&self, entries: &[LogEntry]) -> Option<String> {
        if entries.is_empty() {
            return None;
        }

        let blocks: Vec<String> = entries.iter().map(|e| self.render_entry(e)).collect();

        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        page.push_str("  <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n");
        page.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        page.push_str(&format!("  <title>{}</title>\n", escape_html(&self.title)));
        page.push_str("  <style type=\"text/css\" media=\"screen\">\n");
        page.push_str(PAGE_STYLE);
        page.push_str("  </style>\n</head>\n<body>\n");
        page.push_str(&blocks.join("\n"));
        page.push_str("</body>\n</html>\n");
        Some(page)
    }

    fn text(&self, s: &str) -> String {
        if self.escape_html {
            escape_html(s)
        } else {
            s.to_string()
        }
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
