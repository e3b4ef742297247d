use super::{Direction, DocumentState, Language, catalog};
use parking_lot::RwLock;

/// Durable storage for the preferred language. The file-backed implementation
/// lives in [`crate::prefs`]; tests substitute an in-memory one.
pub trait PrefsBackend {
    fn load(&self) -> Option<Language>;
    fn store(&self, lang: Language) -> Result<(), crate::prefs::PrefsError>;
}

type Subscriber = Box<dyn Fn(DocumentState) + Send + Sync>;

/// Single source of truth for the active language, its direction, and string
/// lookup. One instance is shared by the whole page tree; consumers hold it
/// behind an `Arc`.
///
/// Document-level side effects (dir attribute, body class, title) are not
/// applied here. Hosts register a callback via [`LocaleStore::on_change`] and
/// receive a [`DocumentState`] snapshot after every language change.
pub struct LocaleStore<P> {
    language: RwLock<Language>,
    subscribers: RwLock<Vec<Subscriber>>,
    prefs: P,
}

impl<P: PrefsBackend> LocaleStore<P> {
    /// Restores the persisted language choice, defaulting to English when
    /// nothing valid is stored.
    pub fn new(prefs: P) -> Self {
        let language = prefs.load().unwrap_or_default();

        let missing = catalog::missing_keys();
        if !missing.is_empty() {
            log::warn!(
                "translation catalog is asymmetric: {} key(s) missing, e.g. {} has no {} entry",
                missing.len(),
                missing[0].0,
                missing[0].1,
            );
        }

        Self {
            language: RwLock::new(language),
            subscribers: RwLock::new(Vec::new()),
            prefs,
        }
    }

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    pub fn direction(&self) -> Direction {
        self.language().direction()
    }

    /// Looks up `key` in the active language's table. Unknown keys come back
    /// verbatim so a mistranslation shows up on the page instead of panicking.
    pub fn translate(&self, key: &str) -> String {
        catalog::lookup(self.language(), key)
            .map(str::to_owned)
            .unwrap_or_else(|| key.to_owned())
    }

    /// Switches the active language, persists the choice, and notifies
    /// subscribers. The in-memory change applies even when persistence fails;
    /// the failure is only logged.
    pub fn set_language(&self, lang: Language) {
        *self.language.write() = lang;

        if let Err(e) = self.prefs.store(lang) {
            log::warn!("failed to persist language choice: {e}");
        }

        self.notify();
    }

    /// Registers a document-effect callback and fires it immediately so the
    /// host can apply the initial direction and title.
    pub fn on_change(&self, subscriber: impl Fn(DocumentState) + Send + Sync + 'static) {
        subscriber(self.document_state());
        self.subscribers.write().push(Box::new(subscriber));
    }

    pub fn document_state(&self) -> DocumentState {
        DocumentState::for_language(self.language())
    }

    fn notify(&self) {
        let state = self.document_state();
        for subscriber in self.subscribers.read().iter() {
            subscriber(state);
        }
    }
}
