use greeter_domain::config::{ApiConfig, GreetingConfig};

/// Subject used when no usable name is supplied.
pub const DEFAULT_SUBJECT: &str = "World";

/// Stateless greeting computation over a resolved configuration.
///
/// Cloning is cheap (the configuration is behind an `Arc`) and every method is a pure
/// read, so one instance can be shared by any number of request tasks.
#[derive(Debug, Clone, Default)]
pub struct GreetingService {
    config: ApiConfig,
}

impl GreetingService {
    #[must_use]
    pub const fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Formats `prefix + ", " + subject + suffix`.
    ///
    /// The subject is `name` verbatim, or [`DEFAULT_SUBJECT`] when `name` is absent
    /// or [blank](is_blank).
    #[must_use]
    pub fn greet(&self, name: Option<&str>) -> String {
        compose(&self.config.app.greeting, name)
    }

    #[must_use]
    pub fn environment(&self) -> &str {
        &self.config.app.environment
    }

    #[must_use]
    pub fn is_feature_enabled(&self) -> bool {
        self.config.app.feature.enabled
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Builds a greeting from explicit template parts.
#[must_use]
pub fn compose(greeting: &GreetingConfig, name: Option<&str>) -> String {
    let subject = name.filter(|n| !is_blank(n)).unwrap_or(DEFAULT_SUBJECT);
    format!("{}, {subject}{}", greeting.prefix, greeting.suffix)
}

/// `true` when every character of `name` is a blank character (vacuously for `""`).
///
/// Blank characters are the Unicode space, line and paragraph separators except the
/// no-break spaces (`U+00A0`, `U+2007`, `U+202F`), plus `\t`..`\r` and `U+001C`..`U+001F`.
/// `U+0085` is not blank.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.chars().all(is_blank_char)
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter_domain::config::AppConfig;

    fn service(prefix: &str, suffix: &str) -> GreetingService {
        let mut config = ApiConfig::default();
        config.app.environment = "test".to_owned();
        config.app.greeting = GreetingConfig { prefix: prefix.to_owned(), suffix: suffix.to_owned() };
        GreetingService::new(config)
    }

    #[test]
    fn greets_by_name() {
        assert_eq!(service("Hello", "!").greet(Some("John")), "Hello, John!");
    }

    #[test]
    fn absent_empty_and_blank_names_greet_the_world() {
        let svc = service("Hello", "!");
        assert_eq!(svc.greet(None), "Hello, World!");
        assert_eq!(svc.greet(Some("")), "Hello, World!");
        assert_eq!(svc.greet(Some("   ")), "Hello, World!");
        assert_eq!(svc.greet(Some("\t\n")), "Hello, World!");
    }

    #[test]
    fn no_break_spaces_are_names() {
        let svc = service("Hello", "!");
        assert_eq!(svc.greet(Some("\u{A0}")), "Hello, \u{A0}!");
        assert_eq!(svc.greet(Some("\u{2007}\u{202F}")), "Hello, \u{2007}\u{202F}!");
        assert_eq!(svc.greet(Some("\u{85}")), "Hello, \u{85}!");
    }

    #[test]
    fn separator_controls_are_blank() {
        let svc = service("Hello", "!");
        assert_eq!(svc.greet(Some("\u{1F}")), "Hello, World!");
        assert_eq!(svc.greet(Some("\u{1C} \u{2003}\u{3000}\u{0B}")), "Hello, World!");
        assert!(is_blank(""));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn custom_prefix_and_suffix_are_used() {
        assert_eq!(service("Hi", "!!!").greet(Some("Alice")), "Hi, Alice!!!");
    }

    #[test]
    fn name_is_kept_verbatim() {
        let svc = service("Hello", "!");
        assert_eq!(svc.greet(Some("  bob ")), "Hello,   bob !");
        assert_eq!(svc.greet(Some("ÉLODIE")), "Hello, ÉLODIE!");
    }

    #[test]
    fn reports_environment_and_feature_flag() {
        let mut config = ApiConfig::default();
        assert_eq!(GreetingService::new(config.clone()).environment(), "default");
        assert!(GreetingService::new(config.clone()).is_feature_enabled());

        config.app = AppConfig { environment: "production".to_owned(), ..AppConfig::default() };
        config.app.feature.enabled = false;
        let svc = GreetingService::new(config);
        assert_eq!(svc.environment(), "production");
        assert!(!svc.is_feature_enabled());
    }
}
