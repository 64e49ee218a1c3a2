use std::sync::{Arc, Mutex};

use crate::error::{Error, FenceResult};
use crate::highlight::{HighlightEngine, HighlightRequest, Highlighter};
use crate::languages::Language;
use crate::logger::Logger;
use crate::renderers::LINE_CLASS;
use crate::themes::ThemePair;
use crate::tree::{Element, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behaviour {
    Ok,
    FailOn(Language),
    Panic,
}

/// Deterministic engine: one token per non-empty line, fixed colors.
///
/// Records every call so tests can check what was highlighted and in which order.
#[derive(Debug)]
pub(crate) struct FakeEngine {
    behaviour: Behaviour,
    calls: Mutex<Vec<(Language, String)>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self {
            behaviour: Behaviour::Ok,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(language: Language) -> Self {
        Self {
            behaviour: Behaviour::FailOn(language),
            ..Self::new()
        }
    }

    pub fn panicking() -> Self {
        Self {
            behaviour: Behaviour::Panic,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<(Language, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl HighlightEngine for FakeEngine {
    fn highlight(&self, request: &HighlightRequest<'_>) -> FenceResult<Element> {
        self.calls
            .lock()
            .unwrap()
            .push((request.language, request.code.to_string()));

        match self.behaviour {
            Behaviour::Panic => panic!("engine blew up"),
            Behaviour::FailOn(lang) if lang == request.language => {
                return Err(Error::HighlightEngine(format!(
                    "grammar '{}' not supported",
                    request.language
                )));
            }
            _ => {}
        }

        let prefix = request.css_variable_prefix;
        let [dark, light] = request.themes.names();
        let mut code = Element::new("code");
        for (idx, line) in request.code.split('\n').enumerate() {
            if idx > 0 {
                code.children.push(Node::Text("\n".to_string()));
            }
            let mut line_el = Element::new("span").with_property("class", LINE_CLASS);
            if !line.is_empty() {
                line_el.children.push(Node::Element(
                    Element::new("span")
                        .with_property(
                            "style",
                            format!("{prefix}{dark}:#AAAAAA;{prefix}{light}:#555555"),
                        )
                        .with_child(Node::Text(line.to_string())),
                ));
            }
            code.children.push(Node::Element(line_el));
        }

        Ok(Element::new("pre")
            .with_property("class", "fake")
            .with_property(
                "style",
                format!(
                    "{prefix}{dark}:#000000;{prefix}{light}:#FFFFFF;{prefix}{dark}-bg:#111111;{prefix}{light}-bg:#EEEEEE"
                ),
            )
            .with_property("tabindex", "0")
            .with_child(Node::Element(code)))
    }
}

pub(crate) fn fake_highlighter() -> Highlighter {
    Highlighter::new(Arc::new(FakeEngine::new())).with_themes(ThemePair::new("dark", "light"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Error,
    Warn,
    Debug,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingLogger {
    messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Level::Error, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Level::Warn, message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Level::Debug, message.to_string()));
    }
}
