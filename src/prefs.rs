//! Theme preference: one durable boolean.
//!
//! The dark/light choice survives across sessions. Resolution order:
//! 1. The stored value, if a previous session wrote one.
//! 2. Otherwise the terminal's ambient color scheme (COLORFGBG).
//!
//! A manual toggle writes the new value immediately and from then on
//! overrides the ambient signal until the slot is cleared. Storage
//! problems are never surfaced: a missing or unreadable slot just means
//! the ambient default wins.
//!
//! Both capabilities are trait-injected so tests can swap in in-memory
//! fakes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Durable storage for the theme flag.
pub trait PreferenceStore {
    /// Read the stored value. `Ok(None)` means nothing was ever stored;
    /// `Err` means the slot exists but could not be read or parsed.
    fn load(&self) -> io::Result<Option<bool>>;

    /// Persist the value, overwriting any previous one.
    fn store(&self, dark: bool) -> io::Result<()>;
}

/// Read-only ambient color-scheme signal from the host environment.
pub trait AmbientScheme {
    /// True when the environment prefers a dark scheme.
    fn prefers_dark(&self) -> bool;
}

// ============================================================================
// THEME STORE
// ============================================================================

/// Resolves and persists the dark-mode flag.
#[derive(Debug)]
pub struct ThemeStore<P, A> {
    prefs: P,
    ambient: A,
}

impl<P: PreferenceStore, A: AmbientScheme> ThemeStore<P, A> {
    pub fn new(prefs: P, ambient: A) -> Self {
        ThemeStore { prefs, ambient }
    }

    /// Resolve the session's starting value. Reads only: a fresh install
    /// stays on the ambient default without writing it back, so the
    /// ambient signal keeps deciding until the user toggles explicitly.
    pub fn initialize(&self) -> bool {
        match self.prefs.load() {
            Ok(Some(dark)) => dark,
            Ok(None) | Err(_) => self.ambient.prefers_dark(),
        }
    }

    /// Flip the flag and persist the result. Persistence is best-effort:
    /// a failed write still returns the flipped value.
    pub fn toggle(&self, current: bool) -> bool {
        let next = !current;
        let _ = self.prefs.store(next);
        next
    }
}

// ============================================================================
// FILE-BACKED STORE
// ============================================================================

/// Default location of the theme slot: `<config_dir>/termfolio/theme`.
pub fn default_preference_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio")
        .join("theme")
}

/// The durable slot as a small text file containing `true` or `false`.
#[derive(Debug, Clone)]
pub struct FilePreference {
    path: PathBuf,
}

impl FilePreference {
    pub fn new(path: PathBuf) -> Self {
        FilePreference { path }
    }

    pub fn at_default_location() -> Self {
        FilePreference::new(default_preference_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the slot, restoring the ambient default for future
    /// sessions. A missing slot is already clear.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl PreferenceStore for FilePreference {
    fn load(&self) -> io::Result<Option<bool>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        match contents.trim() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid theme value: {:?}", other),
            )),
        }
    }

    fn store(&self, dark: bool) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, if dark { "true" } else { "false" })
    }
}

// ============================================================================
// TERMINAL AMBIENT SCHEME
// ============================================================================

/// Ambient scheme from the COLORFGBG convention.
///
/// Terminals that set COLORFGBG use `<fg>;<bg>` (sometimes with a middle
/// field). A background of 7 or 15 is a light palette; everything else,
/// including an absent or unparseable variable, counts as dark, which is
/// the safer default for terminals.
#[derive(Debug, Clone)]
pub struct TerminalScheme {
    colorfgbg: Option<String>,
}

impl TerminalScheme {
    /// Capture the signal from the process environment.
    pub fn from_env() -> Self {
        TerminalScheme {
            colorfgbg: std::env::var("COLORFGBG").ok(),
        }
    }

    #[cfg(test)]
    fn with_value(value: Option<&str>) -> Self {
        TerminalScheme {
            colorfgbg: value.map(str::to_string),
        }
    }
}

impl AmbientScheme for TerminalScheme {
    fn prefers_dark(&self) -> bool {
        let Some(raw) = &self.colorfgbg else {
            return true;
        };
        match raw.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
            Some(7) | Some(15) => false,
            _ => true,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// In-memory fake: a slot plus switches to simulate failures.
    struct MemoryPrefs {
        value: Cell<Option<bool>>,
        fail_load: bool,
        fail_store: bool,
    }

    impl MemoryPrefs {
        fn empty() -> Self {
            MemoryPrefs { value: Cell::new(None), fail_load: false, fail_store: false }
        }

        fn holding(dark: bool) -> Self {
            let prefs = MemoryPrefs::empty();
            prefs.value.set(Some(dark));
            prefs
        }
    }

    impl PreferenceStore for MemoryPrefs {
        fn load(&self) -> io::Result<Option<bool>> {
            if self.fail_load {
                return Err(io::Error::other("storage unavailable"));
            }
            Ok(self.value.get())
        }

        fn store(&self, dark: bool) -> io::Result<()> {
            if self.fail_store {
                return Err(io::Error::other("storage unavailable"));
            }
            self.value.set(Some(dark));
            Ok(())
        }
    }

    struct FixedAmbient(bool);

    impl AmbientScheme for FixedAmbient {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    // -- Resolution --

    #[test]
    fn stored_value_wins_over_ambient() {
        let store = ThemeStore::new(MemoryPrefs::holding(false), FixedAmbient(true));
        assert!(!store.initialize());
    }

    #[test]
    fn empty_storage_falls_back_to_ambient() {
        let store = ThemeStore::new(MemoryPrefs::empty(), FixedAmbient(true));
        assert!(store.initialize());
        let store = ThemeStore::new(MemoryPrefs::empty(), FixedAmbient(false));
        assert!(!store.initialize());
    }

    #[test]
    fn load_failure_falls_back_to_ambient() {
        let mut prefs = MemoryPrefs::holding(false);
        prefs.fail_load = true;
        let store = ThemeStore::new(prefs, FixedAmbient(true));
        assert!(store.initialize());
    }

    #[test]
    fn initialize_does_not_write_back() {
        let store = ThemeStore::new(MemoryPrefs::empty(), FixedAmbient(true));
        let _ = store.initialize();
        assert_eq!(store.prefs.value.get(), None);
    }

    // -- Toggle --

    #[test]
    fn toggle_negates_and_persists() {
        let store = ThemeStore::new(MemoryPrefs::empty(), FixedAmbient(false));
        assert!(store.toggle(false));
        assert_eq!(store.prefs.value.get(), Some(true));
        assert!(!store.toggle(true));
        assert_eq!(store.prefs.value.get(), Some(false));
    }

    #[test]
    fn toggle_survives_store_failure() {
        let mut prefs = MemoryPrefs::empty();
        prefs.fail_store = true;
        let store = ThemeStore::new(prefs, FixedAmbient(false));
        // The flip still happens; only persistence is lost.
        assert!(store.toggle(false));
        assert_eq!(store.prefs.value.get(), None);
    }

    #[test]
    fn toggle_round_trips_into_a_fresh_session() {
        let prefs = MemoryPrefs::empty();
        let toggled = {
            let store = ThemeStore::new(&prefs, FixedAmbient(false));
            store.toggle(false)
        };
        // A "new session" over the same storage sees the toggled value,
        // even when the ambient signal disagrees.
        let store = ThemeStore::new(&prefs, FixedAmbient(false));
        assert_eq!(store.initialize(), toggled);
    }

    impl PreferenceStore for &MemoryPrefs {
        fn load(&self) -> io::Result<Option<bool>> {
            (*self).load()
        }

        fn store(&self, dark: bool) -> io::Result<()> {
            (*self).store(dark)
        }
    }

    // -- File-backed slot --

    #[test]
    fn file_preference_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = FilePreference::new(dir.path().join("nested").join("theme"));

        assert_eq!(prefs.load().unwrap(), None);
        prefs.store(true).unwrap();
        assert_eq!(prefs.load().unwrap(), Some(true));
        prefs.store(false).unwrap();
        assert_eq!(prefs.load().unwrap(), Some(false));
    }

    #[test]
    fn file_preference_serializes_as_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = FilePreference::new(dir.path().join("theme"));
        prefs.store(true).unwrap();
        assert_eq!(fs::read_to_string(prefs.path()).unwrap(), "true");
    }

    #[test]
    fn corrupt_slot_reads_as_error_and_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = FilePreference::new(dir.path().join("theme"));
        fs::write(prefs.path(), "maybe").unwrap();

        assert!(prefs.load().is_err());
        let store = ThemeStore::new(prefs, FixedAmbient(true));
        assert!(store.initialize());
    }

    #[test]
    fn clear_removes_the_slot_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = FilePreference::new(dir.path().join("theme"));
        prefs.store(true).unwrap();
        prefs.clear().unwrap();
        assert_eq!(prefs.load().unwrap(), None);
        prefs.clear().unwrap();
    }

    // -- Ambient signal --

    #[test]
    fn missing_colorfgbg_defaults_to_dark() {
        assert!(TerminalScheme::with_value(None).prefers_dark());
    }

    #[test]
    fn light_backgrounds_are_detected() {
        assert!(!TerminalScheme::with_value(Some("0;15")).prefers_dark());
        assert!(!TerminalScheme::with_value(Some("0;default;7")).prefers_dark());
    }

    #[test]
    fn dark_backgrounds_are_detected() {
        assert!(TerminalScheme::with_value(Some("15;0")).prefers_dark());
        assert!(TerminalScheme::with_value(Some("7;default;0")).prefers_dark());
    }

    #[test]
    fn garbage_colorfgbg_defaults_to_dark() {
        assert!(TerminalScheme::with_value(Some("not;a;color")).prefers_dark());
        assert!(TerminalScheme::with_value(Some("")).prefers_dark());
    }
}
