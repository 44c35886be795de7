//! Common helpers for end-to-end tests.

use crate::config::ShellConfig;
use crate::shell::{Reply, Session};
use crate::types::EmployeeId;

/// A session with no prompt and default salary formatting.
pub struct TestShell {
    pub session: Session,
}

impl TestShell {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(ShellConfig {
                prompt: String::new(),
                ..ShellConfig::default()
            }),
        }
    }

    /// Send one line and return the reply, panicking on blank lines.
    #[allow(clippy::expect_used)]
    pub fn send(&mut self, line: &str) -> Reply {
        self.session
            .handle_line(line)
            .expect("non-blank line produces a reply")
    }

    /// Add `employee <id>` for each id, asserting success.
    pub fn add_all(&mut self, ids: &[i32]) {
        for id in ids {
            let reply = self.send(&format!("add {id}, Employee {id}, {id}00"));
            assert!(is_ok(&reply), "add {id}: {reply:?}");
        }
    }

    /// Ids in the store, ascending.
    pub fn ids(&self) -> Vec<i32> {
        self.session
            .employees()
            .iter()
            .map(|e| e.id().get())
            .collect()
    }

    pub fn root_id(&self) -> Option<EmployeeId> {
        self.session
            .employees()
            .root()
            .map(|node| node.record().id())
    }
}

pub const fn is_ok(reply: &Reply) -> bool {
    matches!(reply, Reply::Info(_))
}

pub fn text(reply: &Reply) -> &str {
    match reply {
        Reply::Info(text) | Reply::Error(text) => text,
        Reply::Exit => "",
    }
}
