use roxmltree::{Document, Node};

use crate::prelude::*;

/// Extract every `<HardwareAddress>` anywhere in the document, in document order.
///
/// Addresses are hexadecimal EUI-64 strings, so surrounding whitespace is never part
/// of one: it only comes from pretty-printed responses and would break the query body.
pub fn parse_hardware_addresses(body: &str) -> Result<Vec<String>> {
    Ok(Document::parse(body)?
        .descendants()
        .filter(|node| node.has_tag_name("HardwareAddress"))
        .map(|node| node.text().unwrap_or_default().trim().to_owned())
        .collect())
}

/// Child elements of a single `<Variable>` as `(tag, text)` pairs, in document order.
///
/// Typically `Name`, `Value`, `Units`, and `Description`.
#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq, derive_more::From, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
pub struct Variable(pub Vec<(String, String)>);

impl Variable {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self(
            node.children()
                .filter(Node::is_element)
                .map(|child| {
                    let text = child.text().unwrap_or_default();
                    (child.tag_name().name().to_owned(), text.to_owned())
                })
                .collect(),
        )
    }

    /// Text of the first child element with the tag. Blank elements yield an empty string.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.iter().find(|(name, _)| name == tag).map(|(_, text)| text.as_str())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("Name")
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.get("Value")
    }

    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.get("Units")
    }
}

/// All the `<Variable>` elements of a device query response.
#[must_use]
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    derive_more::Deref,
    derive_more::From,
    derive_more::Index,
    derive_more::IntoIterator,
)]
#[into_iterator(owned, ref)]
pub struct Attributes(pub Vec<Variable>);

impl Attributes {
    /// Fails only when the body is not well-formed XML.
    pub fn parse(body: &str) -> Result<Self> {
        let document = Document::parse(body)?;
        let variables: Vec<_> = document
            .descendants()
            .filter(|node| node.has_tag_name("Variable"))
            .map(Variable::from_node)
            .collect();
        debug!(n_variables = variables.len(), "parsed");
        Ok(Self(variables))
    }

    /// Value of the first variable with the exact name.
    ///
    /// Later duplicates are ignored, even when the first match has no value.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|variable| variable.name() == Some(name)).and_then(Variable::value)
    }
}
