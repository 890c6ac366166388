use nu_ansi_term::{Color, Style};
use serde::{Deserialize, Serialize};

/// Visual elements of a formatted line that can carry their own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Timestamp,
    LevelTrace,
    LevelDebug,
    LevelInfo,
    LevelWarn,
    LevelWarning,
    LevelError,
    LevelFatal,
    LevelPanic,
    Message,
    Arrow,
    CallerFunction,
    CallerLine,
    AttrKey,
    AttrValue,
}

impl Element {
    /// Built-in palette used when no override is configured.
    pub fn default_spec(self) -> ColorSpec {
        let fg = match self {
            Element::Timestamp => Color::DarkGray,
            Element::LevelTrace => Color::LightPurple,
            Element::LevelDebug => Color::LightCyan,
            Element::LevelInfo => Color::LightGreen,
            Element::LevelWarn | Element::LevelWarning => Color::LightYellow,
            Element::LevelError => Color::Red,
            Element::LevelFatal => Color::LightRed,
            Element::LevelPanic => Color::White,
            Element::Message => Color::Green,
            Element::Arrow => Color::Cyan,
            Element::CallerFunction => Color::LightYellow,
            Element::CallerLine => Color::Yellow,
            Element::AttrKey => Color::Yellow,
            Element::AttrValue => Color::Green,
        };
        ColorSpec::fg(fg)
    }
}

/// Foreground and background pair applied to one element.
///
/// `None` on a side means "reset" for that side; [`ColorSpec::RESET`]
/// (both sides reset) renders the element uncolored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorSpec {
    #[serde(default)]
    pub fg: Option<Color>,
    #[serde(default)]
    pub bg: Option<Color>,
}

impl ColorSpec {
    /// Explicit "no color" sentinel.
    pub const RESET: ColorSpec = ColorSpec { fg: None, bg: None };

    pub const fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        ColorSpec { fg, bg }
    }

    pub const fn fg(fg: Color) -> Self {
        ColorSpec { fg: Some(fg), bg: None }
    }

    pub fn is_reset(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }

    fn style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.on(bg);
        }
        style
    }

    /// Wrap `text` in this spec's escape sequences.
    pub fn apply(&self, text: &str) -> String {
        if self.is_reset() {
            return text.to_string();
        }
        self.style().paint(text).to_string()
    }
}

/// Resolve the color of one element and render `text` with it.
///
/// Global disable wins over any override; a missing override falls back
/// to [`Element::default_spec`]; the [`ColorSpec::RESET`] override leaves
/// the text untouched.
pub fn resolve(element: Element, spec: Option<ColorSpec>, enabled: bool, text: &str) -> String {
    if !enabled {
        return text.to_string();
    }
    match spec {
        None => element.default_spec().apply(text),
        Some(spec) => spec.apply(text),
    }
}

/// Per-element color overrides. Unset fields use the built-in palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub timestamp: Option<ColorSpec>,
    pub level_trace: Option<ColorSpec>,
    pub level_debug: Option<ColorSpec>,
    pub level_info: Option<ColorSpec>,
    pub level_warn: Option<ColorSpec>,
    pub level_warning: Option<ColorSpec>,
    pub level_error: Option<ColorSpec>,
    pub level_fatal: Option<ColorSpec>,
    pub level_panic: Option<ColorSpec>,
    pub message: Option<ColorSpec>,
    pub arrow: Option<ColorSpec>,
    pub caller_function: Option<ColorSpec>,
    pub caller_line: Option<ColorSpec>,
    pub attr_key: Option<ColorSpec>,
    pub attr_value: Option<ColorSpec>,
}

impl Colors {
    /// Override configured for `element`, if any.
    pub fn get(&self, element: Element) -> Option<ColorSpec> {
        match element {
            Element::Timestamp => self.timestamp,
            Element::LevelTrace => self.level_trace,
            Element::LevelDebug => self.level_debug,
            Element::LevelInfo => self.level_info,
            Element::LevelWarn => self.level_warn,
            Element::LevelWarning => self.level_warning,
            Element::LevelError => self.level_error,
            Element::LevelFatal => self.level_fatal,
            Element::LevelPanic => self.level_panic,
            Element::Message => self.message,
            Element::Arrow => self.arrow,
            Element::CallerFunction => self.caller_function,
            Element::CallerLine => self.caller_line,
            Element::AttrKey => self.attr_key,
            Element::AttrValue => self.attr_value,
        }
    }

    /// Returns a copy with `element` overridden by `spec`.
    pub fn with(mut self, element: Element, spec: ColorSpec) -> Self {
        let slot = match element {
            Element::Timestamp => &mut self.timestamp,
            Element::LevelTrace => &mut self.level_trace,
            Element::LevelDebug => &mut self.level_debug,
            Element::LevelInfo => &mut self.level_info,
            Element::LevelWarn => &mut self.level_warn,
            Element::LevelWarning => &mut self.level_warning,
            Element::LevelError => &mut self.level_error,
            Element::LevelFatal => &mut self.level_fatal,
            Element::LevelPanic => &mut self.level_panic,
            Element::Message => &mut self.message,
            Element::Arrow => &mut self.arrow,
            Element::CallerFunction => &mut self.caller_function,
            Element::CallerLine => &mut self.caller_line,
            Element::AttrKey => &mut self.attr_key,
            Element::AttrValue => &mut self.attr_value,
        };
        *slot = Some(spec);
        self
    }

    pub fn paint(&self, element: Element, enabled: bool, text: &str) -> String {
        resolve(element, self.get(element), enabled, text)
    }
}
