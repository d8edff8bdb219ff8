use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Stdout, Write};

use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use webui_core::{Page, RenderedTable};

use crate::table::TableFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

/// [`Page`] that prints to a terminal.
///
/// The avatar and each data-backed table render are written as they happen.
/// The placeholder render on mount, before any count label exists, is not
/// printed.
pub struct TerminalPage<W: Write = Stdout> {
    cookies: HashMap<String, String>,
    container: String,
    mode: OutputMode,
    count_label: RefCell<Option<String>>,
    out: RefCell<W>,
}

impl TerminalPage<Stdout> {
    pub fn stdout(cookies: HashMap<String, String>, container: &str, mode: OutputMode) -> Self {
        Self::with_writer(std::io::stdout(), cookies, container, mode)
    }
}

impl<W: Write> TerminalPage<W> {
    pub fn with_writer(
        out: W,
        cookies: HashMap<String, String>,
        container: &str,
        mode: OutputMode,
    ) -> Self {
        Self {
            cookies,
            container: container.to_string(),
            mode,
            count_label: RefCell::new(None),
            out: RefCell::new(out),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            warn!(event = "cli.page.write_failed", error = %e);
        }
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Page for TerminalPage<W> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn set_avatar_src(&self, src: &str) {
        match self.mode {
            OutputMode::Table => self.emit(&format!("Avatar: {src}")),
            OutputMode::Json => self.emit(&json!({ "avatar": src }).to_string()),
        }
    }

    fn set_instance_count(&self, label: &str) {
        *self.count_label.borrow_mut() = Some(label.to_string());
    }

    fn has_container(&self, id: &str) -> bool {
        self.container == id
    }

    fn render_table(&self, id: &str, table: &RenderedTable) {
        let Some(label) = self.count_label.borrow().clone() else {
            return;
        };

        let updated_at = Local::now();

        match self.mode {
            OutputMode::Table => {
                let formatted = TableFormatter::new(table).format(table);
                self.emit(&format!(
                    "{label}\n{formatted}\nUpdated at {}",
                    updated_at.format("%H:%M:%S")
                ));
            }
            OutputMode::Json => {
                #[derive(Serialize)]
                struct TableUpdate<'a> {
                    container: &'a str,
                    count_label: &'a str,
                    updated_at: String,
                    table: &'a RenderedTable,
                }

                let update = TableUpdate {
                    container: id,
                    count_label: &label,
                    updated_at: updated_at.to_rfc3339(),
                    table,
                };
                match serde_json::to_string(&update) {
                    Ok(line) => self.emit(&line),
                    Err(e) => warn!(event = "cli.page.serialize_failed", error = %e),
                }
            }
        }
    }
}
