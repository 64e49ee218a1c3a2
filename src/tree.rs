//! The themed syntax tree a highlighting engine hands back.
//!
//! It is a very small HTML element tree: enough for the engine to describe a
//! highlighted block and for us to rework it before serialising.

/// The value of an element property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    Str(String),
    Int(usize),
    /// Boolean attribute, rendered as a bare name
    Flag,
}

impl From<&str> for Property {
    fn from(value: &str) -> Self {
        Property::Str(value.to_string())
    }
}

impl From<String> for Property {
    fn from(value: String) -> Self {
        Property::Str(value)
    }
}

impl From<usize> for Property {
    fn from(value: usize) -> Self {
        Property::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Kept in insertion order so the output is stable
    pub properties: Vec<(String, Property)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder flavour of [`Element::set_property`]
    pub fn with_property(mut self, name: &str, value: impl Into<Property>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Replaces the value if the property already exists.
    pub fn set_property(&mut self, name: &str, value: impl Into<Property>) {
        let value = value.into();
        match self.properties.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.properties.push((name.to_string(), value)),
        }
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Property> {
        let idx = self.properties.iter().position(|(key, _)| key == name)?;
        Some(self.properties.remove(idx).1)
    }

    /// Whether the space-separated `class` property contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        match self.property("class") {
            Some(Property::Str(classes)) => classes.split_whitespace().any(|c| c == class),
            _ => false,
        }
    }

    /// Calls `f` on every element below this one, in document order.
    pub fn visit_descendants_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        for child in &mut self.children {
            if let Node::Element(el) = child {
                f(el);
                el.visit_descendants_mut(f);
            }
        }
    }
}
