//! Scripting transport: Reminders automation through `osascript`.
//!
//! The bridge script is JavaScript for Automation, run with the same
//! command and `--flag value` vector the native helper receives. Reminders
//! scripting has no way to set a repeat rule, so this transport refuses any
//! request carrying one.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{BridgeError, BridgeResult};
use crate::model::{DeletedItem, Scope, TaskFields, TaskItem};

use super::process::AdapterProcess;
use super::TaskStoreClient;

const REMINDERS_SCRIPT: &str = r#"
function run(argv) {
    var command = argv[0];
    var opts = {};
    for (var i = 1; i + 1 < argv.length; i += 2) {
        opts[argv[i].replace(/^--/, '')] = argv[i + 1];
    }
    var app = Application('Reminders');

    function pad(n) { return (n < 10 ? '0' : '') + n; }
    function stamp(d) {
        if (!d) return null;
        return d.getFullYear() + '-' + pad(d.getMonth() + 1) + '-' + pad(d.getDate()) +
            'T' + pad(d.getHours()) + ':' + pad(d.getMinutes()) + ':' + pad(d.getSeconds());
    }
    function parseLocal(text) {
        var m = /^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})$/.exec(text || '');
        if (!m) return null;
        return new Date(+m[1], +m[2] - 1, +m[3], +m[4], +m[5], +m[6]);
    }
    function describe(r) {
        return {
            id: r.id(),
            title: r.name(),
            due: stamp(r.dueDate()),
            note: r.body() || null,
            completed: r.completed(),
            completionDate: stamp(r.completionDate())
        };
    }
    function find(id) {
        var matches = app.reminders.whose({ id: id })();
        if (matches.length === 0) {
            throw { code: 'not_found', message: 'no reminder with id ' + id };
        }
        return matches[0];
    }
    function reply(fields) {
        var out = { ok: true };
        for (var key in fields) out[key] = fields[key];
        return JSON.stringify(out);
    }

    try {
        if (command === 'list') {
            return reply({ items: app.reminders.whose({ completed: false })().map(describe) });
        }
        if (command === 'add') {
            var props = { name: opts.title };
            if (opts.note !== undefined) props.body = opts.note;
            var due = parseLocal(opts.due);
            if (due) {
                props.dueDate = due;
                props.remindMeDate = due;
            }
            var created = app.Reminder(props);
            app.defaultList.reminders.push(created);
            return reply(describe(created));
        }
        if (command === 'edit') {
            var target = find(opts.id);
            if (opts.title !== undefined) target.name = opts.title;
            if (opts.note !== undefined) target.body = opts.note;
            var newDue = parseLocal(opts.due);
            if (newDue) {
                target.dueDate = newDue;
                target.remindMeDate = newDue;
            }
            return reply(describe(target));
        }
        if (command === 'delete') {
            var doomed = find(opts.id);
            var gone = { id: doomed.id(), title: doomed.name() };
            app.delete(doomed);
            return reply(gone);
        }
        if (command === 'complete') {
            var done = find(opts.id);
            done.completed = true;
            done.completionDate = new Date();
            return reply(describe(done));
        }
        return JSON.stringify({ ok: false, code: 'invalid', error: 'unknown command ' + command });
    } catch (e) {
        var text = e && e.message ? e.message : String(e);
        var code = e && e.code ? e.code : (/-1743|not authori[sz]ed/i.test(text) ? 'access_denied' : 'error');
        return JSON.stringify({ ok: false, code: code, error: text });
    }
}
"#;

/// Reminders through `osascript -l JavaScript`.
#[derive(Debug, Clone)]
pub struct SimpleTransport {
    process: AdapterProcess,
}

impl SimpleTransport {
    pub fn new(osascript: impl AsRef<Path>, timeout: Option<Duration>) -> Self {
        Self {
            process: AdapterProcess::new(osascript)
                .with_leading_args(script_args())
                .with_timeout(timeout),
        }
    }
}

fn script_args() -> Vec<String> {
    vec![
        "-l".to_string(),
        "JavaScript".to_string(),
        "-e".to_string(),
        REMINDERS_SCRIPT.to_string(),
    ]
}

fn reject_recurrence(fields: &TaskFields) -> BridgeResult<()> {
    if fields.recurrence.is_some() {
        return Err(BridgeError::Transport(
            "scripting transport cannot express repeat rules".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl TaskStoreClient for SimpleTransport {
    fn name(&self) -> &'static str {
        "scripting"
    }

    async fn list(&self, scope: Scope) -> BridgeResult<Vec<TaskItem>> {
        self.process.list(scope).await
    }

    async fn create(&self, fields: &TaskFields) -> BridgeResult<TaskItem> {
        reject_recurrence(fields)?;
        self.process.create(fields).await
    }

    async fn update(&self, id: &str, fields: &TaskFields) -> BridgeResult<TaskItem> {
        reject_recurrence(fields)?;
        self.process.update(id, fields).await
    }

    async fn delete(&self, id: &str) -> BridgeResult<DeletedItem> {
        self.process.delete(id).await
    }

    async fn complete(&self, id: &str) -> BridgeResult<TaskItem> {
        self.process.complete(id).await
    }
}
