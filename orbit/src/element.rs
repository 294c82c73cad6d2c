// Element Model
// Framework-neutral output of the component wrappers, renderable to HTML

use crate::error::PropsError;
use crate::resolve::ClassString;
use indexmap::IndexMap;
use std::fmt::Write;
use std::str::FromStr;

/// Host tags the design system renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    P,
    Section,
    Article,
    Header,
    Footer,
    Main,
    Nav,
    Aside,
    Ul,
    Ol,
    Li,
    Label,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Strong,
    Em,
    Small,
    Code,
    Pre,
    A,
    Button,
}

impl Tag {
    pub const ALL: [Tag; 27] = [
        Tag::Div,
        Tag::Span,
        Tag::P,
        Tag::Section,
        Tag::Article,
        Tag::Header,
        Tag::Footer,
        Tag::Main,
        Tag::Nav,
        Tag::Aside,
        Tag::Ul,
        Tag::Ol,
        Tag::Li,
        Tag::Label,
        Tag::H1,
        Tag::H2,
        Tag::H3,
        Tag::H4,
        Tag::H5,
        Tag::H6,
        Tag::Strong,
        Tag::Em,
        Tag::Small,
        Tag::Code,
        Tag::Pre,
        Tag::A,
        Tag::Button,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::P => "p",
            Tag::Section => "section",
            Tag::Article => "article",
            Tag::Header => "header",
            Tag::Footer => "footer",
            Tag::Main => "main",
            Tag::Nav => "nav",
            Tag::Aside => "aside",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
            Tag::Label => "label",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::Small => "small",
            Tag::Code => "code",
            Tag::Pre => "pre",
            Tag::A => "a",
            Tag::Button => "button",
        }
    }
}

impl FromStr for Tag {
    type Err = PropsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == name)
            .ok_or_else(|| PropsError::UnknownTag(name.to_string()))
    }
}

/// Anything that accepts a class, native attributes and children.
pub trait ClassHost: Sized {
    fn create(tag: Tag) -> Self;
    fn class(self, class: &str) -> Self;
    fn attr(self, name: &str, value: &str) -> Self;
    fn child(self, child: Node) -> Self;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    class: ClassString,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            class: ClassString::new(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn class_name(&self) -> &ClassString {
        &self.class
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        let tag = self.tag.as_str();
        let _ = write!(html, "<{}", tag);
        if !self.class.is_empty() {
            let _ = write!(
                html,
                " class=\"{}\"",
                html_escape::encode_double_quoted_attribute(self.class.as_str())
            );
        }
        for (name, value) in &self.attributes {
            let _ = write!(
                html,
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        html.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(html),
                Node::Text(text) => html.push_str(&html_escape::encode_text(text)),
            }
        }
        let _ = write!(html, "</{}>", tag);
    }
}

/// Attribute names that are safe to write unquoted into markup.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

impl ClassHost for Element {
    fn create(tag: Tag) -> Self {
        Element::new(tag)
    }

    fn class(mut self, class: &str) -> Self {
        self.class.push(class);
        self
    }

    fn attr(mut self, name: &str, value: &str) -> Self {
        if name == "class" {
            return self.class(value);
        }
        if is_valid_attribute_name(name) {
            self.attributes.insert(name.to_string(), value.to_string());
        } else {
            log::warn!("Dropping attribute with invalid name '{}' on <{}>", name, self.tag.as_str());
        }
        self
    }

    fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}
