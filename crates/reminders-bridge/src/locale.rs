//! Response templates and trigger phrases per language.
//!
//! The table is built once in `main` and passed by reference to whatever
//! renders user-facing text. Lookups fall back to English, and when English
//! is missing too, to the hard-coded defaults in [`default_template`].

mod bundles;

use std::collections::{BTreeMap, HashMap};

/// Supported response languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    En,
    Ko,
    Ja,
    Zh,
}

pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ko, Locale::Ja, Locale::Zh];

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }

    /// Case-insensitive, tolerant of region tags (`ko-KR`, `zh_Hans`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Locale::En),
            "ko" => Some(Locale::Ko),
            "ja" => Some(Locale::Ja),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// Unknown or missing codes resolve to English.
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some(raw) => Locale::parse(raw).unwrap_or_else(|| {
                tracing::warn!(locale = raw, "unsupported locale, falling back to en");
                Locale::En
            }),
            None => Locale::En,
        }
    }
}

/// Trigger phrases, templates and labels for one language.
#[derive(Debug, Clone, Default)]
pub struct LocaleBundle {
    triggers: Vec<&'static str>,
    templates: BTreeMap<&'static str, &'static str>,
    labels: BTreeMap<&'static str, &'static str>,
}

impl LocaleBundle {
    pub fn new(
        triggers: &[&'static str],
        templates: &[(&'static str, &'static str)],
        labels: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            triggers: triggers.to_vec(),
            templates: templates.iter().copied().collect(),
            labels: labels.iter().copied().collect(),
        }
    }

    pub fn triggers(&self) -> &[&'static str] {
        &self.triggers
    }

    pub fn template(&self, key: &str) -> Option<&'static str> {
        self.templates.get(key).copied()
    }

    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.labels.get(key).copied()
    }
}

/// Read-only table of every loaded bundle.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    bundles: HashMap<Locale, LocaleBundle>,
}

impl LocaleTable {
    /// The four bundles shipped with the binary.
    pub fn builtin() -> Self {
        Self::empty()
            .with_bundle(Locale::En, bundles::english())
            .with_bundle(Locale::Ko, bundles::korean())
            .with_bundle(Locale::Ja, bundles::japanese())
            .with_bundle(Locale::Zh, bundles::chinese())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_bundle(mut self, locale: Locale, bundle: LocaleBundle) -> Self {
        self.bundles.insert(locale, bundle);
        self
    }

    /// Bundle for `locale`, else English, else nothing.
    pub fn bundle(&self, locale: Locale) -> Option<&LocaleBundle> {
        self.bundles
            .get(&locale)
            .or_else(|| self.bundles.get(&Locale::En))
    }

    /// Renders the template for `key` with `vars` substituted.
    pub fn message(&self, locale: Locale, key: &str, vars: &[(&str, Option<&str>)]) -> String {
        let template = self
            .bundle(locale)
            .and_then(|bundle| bundle.template(key))
            .unwrap_or_else(|| default_template(key));
        render(template, vars)
    }

    pub fn label(&self, locale: Locale, key: &str) -> String {
        self.bundle(locale)
            .and_then(|bundle| bundle.label(key))
            .or_else(|| default_label(key))
            .unwrap_or(key)
            .to_string()
    }

    /// Every label of the resolved bundle, keyed by label name.
    pub fn labels(&self, locale: Locale) -> BTreeMap<String, String> {
        match self.bundle(locale) {
            Some(bundle) => bundle
                .labels
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
            None => DEFAULT_LABELS
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    pub fn triggers(&self, locale: Locale) -> &[&'static str] {
        self.bundle(locale)
            .map(LocaleBundle::triggers)
            .unwrap_or_default()
    }
}

/// Replaces every `{name}` in `template` with its variable in one pass, so
/// braces inside substituted values are never expanded. Absent values render
/// as empty text; placeholders with no supplied variable stay as they are.
pub fn render(template: &str, vars: &[(&str, Option<&str>)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };
        let name = &after[..close];
        match vars.iter().find(|(var, _)| *var == name) {
            Some((_, value)) => {
                rendered.push_str(value.unwrap_or(""));
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }
    rendered.push_str(rest);
    rendered
}

/// English fallbacks used when no bundle is available at all.
pub fn default_template(key: &str) -> &'static str {
    match key {
        "added" => "Added \"{title}\" to Reminders, due {due}.",
        "added_no_due" => "Added \"{title}\" to Reminders.",
        "repeats" => " Repeats {frequency} (interval {interval}).",
        "updated" => "Updated \"{title}\".",
        "deleted" => "Deleted \"{title}\".",
        "completed" => "Marked \"{title}\" as completed.",
        "listed" => "Found {count} reminders ({scope}).",
        "list_empty" => "No reminders found ({scope}).",
        "error_validation" => "Invalid request: {detail}",
        "error_title_required" => "Invalid request: --title is required.",
        "error_title_empty" => "Invalid request: --title cannot be empty.",
        "error_id_required" => "Invalid request: --id is required.",
        "error_repeat_invalid" => {
            "Invalid request: unsupported repeat \"{value}\" (use daily, weekly, monthly or yearly)."
        }
        "error_interval_invalid" => "Invalid request: --interval must be at least 1.",
        "error_not_found" => "Could not find a reminder with id {id}.",
        "error_access" => "There was a problem accessing the Reminders app.",
        "error_timeout" => "The Reminders app did not respond within {seconds} seconds.",
        _ => "Could not reach the Reminders app. Please try again.",
    }
}

const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("title", "Title"),
    ("due", "Due"),
    ("note", "Note"),
    ("completed", "Completed"),
    ("repeat", "Repeat"),
    ("no_due", "No due date"),
    ("scope", "Scope"),
    ("scope_today", "today"),
    ("scope_week", "this week"),
    ("scope_all", "all"),
    ("daily", "daily"),
    ("weekly", "weekly"),
    ("monthly", "monthly"),
    ("yearly", "yearly"),
];

fn default_label(key: &str) -> Option<&'static str> {
    DEFAULT_LABELS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}
