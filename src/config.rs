//! User configuration: reel defaults, language preferences, backend access,
//! and keybindings.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/lexireel/config.toml` (default `~/.config/lexireel/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::language::{self, LanguagePrefs, LanguageTag};
use crate::core::layout::{Justify, SizeVariant};
use crate::core::reel::{Direction, DEFAULT_REEL_SPINS};

/// Environment variable that overrides `api_token`.
pub const TOKEN_ENV: &str = "LEXIREEL_API_TOKEN";

const MAX_REEL_SPINS: u32 = 200;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Respin,
    ToggleDirection,
    CycleSize,
    ToggleFast,
    ShowMetrics,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the settings menu and config file).
    pub const ALL: &[Action] = &[
        Action::Respin,
        Action::ToggleDirection,
        Action::CycleSize,
        Action::ToggleFast,
        Action::ShowMetrics,
        Action::OpenSettings,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::Respin => "respin",
            Action::ToggleDirection => "toggle_direction",
            Action::CycleSize => "cycle_size",
            Action::ToggleFast => "toggle_fast",
            Action::ShowMetrics => "show_metrics",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    const MASK: KeyModifiers = KeyModifiers::CONTROL
        .union(KeyModifiers::ALT)
        .union(KeyModifiers::SHIFT);

    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && (self.modifiers & Self::MASK) == (event.modifiers & Self::MASK)
    }

    /// Short form for the status bar (`"Ctrl+r"`, `"↓"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    fn render(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(name);
            }
        }
        let key = match (self.code, pretty) {
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&key);
        s
    }

    /// Parse a key string like `"Ctrl+r"`, `"Alt+Up"`, `"m"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ => {
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub active_languages: Vec<LanguageTag>,
    pub primary_language: Option<LanguageTag>,
    pub size_variant: SizeVariant,
    pub direction: Direction,
    pub justify: Justify,
    pub fast_display: bool,
    pub reel_spins: u32,
    pub api_base_url: String,
    pub api_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            active_languages: ["en", "es", "fr", "de"]
                .iter()
                .filter_map(|t| t.parse().ok())
                .collect(),
            primary_language: None,
            size_variant: SizeVariant::default(),
            direction: Direction::default(),
            justify: Justify::default(),
            fast_display: false,
            reel_spins: DEFAULT_REEL_SPINS,
            api_base_url: "http://localhost:5000".into(),
            api_token: None,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(Respin, vec![KeyBind::new(Char(' '), n), KeyBind::new(Char('r'), n)]);
        m.insert(ToggleDirection, vec![KeyBind::new(Char('d'), n)]);
        m.insert(CycleSize, vec![KeyBind::new(Char('s'), n)]);
        m.insert(ToggleFast, vec![KeyBind::new(Char('f'), n)]);
        m.insert(ShowMetrics, vec![KeyBind::new(Char('m'), n)]);
        m.insert(OpenSettings, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action bound to a key event.  The binding with the most
    /// modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: spin | {}: direction | {}: size | {}: metrics | {}: settings",
            self.short_binding(Action::Respin),
            self.short_binding(Action::ToggleDirection),
            self.short_binding(Action::CycleSize),
            self.short_binding(Action::ShowMetrics),
            self.short_binding(Action::OpenSettings),
        )
    }

    /// Language preferences derived from this config.
    pub fn language_prefs(&self) -> LanguagePrefs {
        LanguagePrefs {
            active: self.active_languages.clone(),
            primary: self.primary_language.clone(),
            fallback: LanguageTag::english(),
        }
    }

    /// The token from the environment, falling back to the config file.
    pub fn resolved_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.api_token.clone())
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut cfg = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            let ok = match key {
                "active_languages" => language::parse_tag_list(value)
                    .map(|tags| cfg.active_languages = tags)
                    .is_ok(),
                "primary_language" => {
                    if value.is_empty() {
                        cfg.primary_language = None;
                        true
                    } else {
                        value.parse().map(|t| cfg.primary_language = Some(t)).is_ok()
                    }
                }
                "size_variant" => value.parse().map(|v| cfg.size_variant = v).is_ok(),
                "direction" => value.parse().map(|d| cfg.direction = d).is_ok(),
                "justify" => value.parse().map(|j| cfg.justify = j).is_ok(),
                "fast_display" => {
                    cfg.fast_display = value == "true";
                    true
                }
                "reel_spins" => value
                    .parse::<u32>()
                    .map(|n| cfg.reel_spins = n.min(MAX_REEL_SPINS))
                    .is_ok(),
                "api_base_url" => {
                    cfg.api_base_url = value.to_string();
                    true
                }
                "api_token" => {
                    cfg.api_token = (!value.is_empty()).then(|| value.to_string());
                    true
                }
                _ => match Action::from_config_key(key) {
                    Some(action) => {
                        let parsed: Vec<KeyBind> = value
                            .split(',')
                            .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                            .collect();
                        if !parsed.is_empty() {
                            cfg.bindings.insert(action, parsed);
                        }
                        true
                    }
                    None => false,
                },
            };
            if !ok {
                tracing::warn!(key, value, "ignoring unrecognised config line");
            }
        }

        cfg
    }

    fn serialise(&self) -> String {
        let tags: Vec<&str> = self.active_languages.iter().map(|t| t.as_str()).collect();
        let mut lines = vec![
            "# lexireel configuration".to_string(),
            String::new(),
            "# Languages".to_string(),
            format!("active_languages = {}", tags.join(", ")),
            format!(
                "primary_language = {}",
                self.primary_language.as_ref().map(|t| t.as_str()).unwrap_or("")
            ),
            String::new(),
            "# Reel".to_string(),
            format!("size_variant = {}", self.size_variant),
            format!("direction = {}", self.direction),
            format!("justify = {}", justify_key(self.justify)),
            format!("fast_display = {}", self.fast_display),
            format!("reel_spins = {}", self.reel_spins),
            String::new(),
            "# Backend".to_string(),
            format!("api_base_url = {}", self.api_base_url),
            format!("api_token = {}", self.api_token.as_deref().unwrap_or("")),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.render(false)).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

fn justify_key(j: Justify) -> &'static str {
    match j {
        Justify::Left => "left",
        Justify::Center => "center",
        Justify::Right => "right",
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/lexireel/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("lexireel").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut ev = KeyEvent::new(code, modifiers);
        ev.kind = KeyEventKind::Press;
        ev
    }

    #[test]
    fn defaults_match_expected_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.match_key(key(KeyCode::Char('r'), KeyModifiers::NONE)), Some(Action::Respin));
        assert_eq!(cfg.match_key(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Quit));
        assert_eq!(cfg.match_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn parses_values_and_ignores_garbage() {
        let cfg = AppConfig::parse(
            "# comment\n\
             active_languages = en, es, fr\n\
             primary_language = es\n\
             size_variant = body1\n\
             direction = down\n\
             justify = center\n\
             fast_display = true\n\
             reel_spins = 9999\n\
             api_token = \"secret\"\n\
             respin = Ctrl+n, x\n\
             size_variant = gigantic\n\
             nonsense line\n",
        );
        assert_eq!(cfg.active_languages.len(), 3);
        assert_eq!(cfg.primary_language, Some("es".parse().unwrap()));
        assert_eq!(cfg.size_variant, SizeVariant::Body1);
        assert_eq!(cfg.direction, Direction::Down);
        assert_eq!(cfg.justify, Justify::Center);
        assert!(cfg.fast_display);
        assert_eq!(cfg.reel_spins, MAX_REEL_SPINS);
        assert_eq!(cfg.api_token.as_deref(), Some("secret"));
        assert_eq!(
            cfg.match_key(key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::Respin)
        );
        assert_eq!(cfg.match_key(key(KeyCode::Char(' '), KeyModifiers::NONE)), None);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.active_languages = vec!["en".parse().unwrap(), "pt".parse().unwrap()];
        cfg.size_variant = SizeVariant::Caption;
        cfg.direction = Direction::Down;
        cfg.justify = Justify::Right;
        cfg.reel_spins = 14;
        cfg.bindings
            .insert(Action::ShowMetrics, vec![KeyBind::new(KeyCode::Up, KeyModifiers::ALT)]);
        cfg.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path), cfg);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load_from(&dir.path().join("absent.toml")), AppConfig::default());
    }

    #[test]
    fn key_strings_round_trip() {
        let bind = KeyBind::parse("Ctrl+Shift+F5").unwrap();
        assert_eq!(bind.code, KeyCode::F(5));
        assert_eq!(bind.render(false), "Ctrl+Shift+F5");
        assert_eq!(KeyBind::parse("Alt+Up").unwrap().display(), "Alt+↑");
        assert!(KeyBind::parse("Hyper+x").is_none());
        assert!(KeyBind::parse("xy").is_none());
    }
}
