//! Content tree node and element vocabulary.

use std::collections::HashMap;

macro_rules! node_kinds {
    ($($(#[$meta:meta])* $variant:ident => $tag:literal,)+) => {
        /// Element kind, one variant per recognised OU-XML tag.
        ///
        /// Tags outside the vocabulary are kept verbatim in [`NodeKind::Other`].
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($(#[$meta])* $variant,)+
            /// Unrecognised tag.
            Other(String),
        }

        impl NodeKind {
            /// Map an element tag to its kind.
            #[must_use]
            pub fn from_tag(tag: &str) -> Self {
                match tag {
                    $($tag => Self::$variant,)+
                    other => Self::Other(other.to_owned()),
                }
            }

            /// Element tag for this kind.
            #[must_use]
            pub fn tag(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(tag) => tag,
                }
            }
        }
    };
}

node_kinds! {
    /// Document wrapper around one or more units.
    Item => "Item",
    Unit => "Unit",
    Session => "Session",
    Section => "Section",
    SubSection => "SubSection",
    SubSubSection => "SubSubSection",
    InternalSection => "InternalSection",
    Title => "Title",
    Heading => "Heading",
    Paragraph => "Paragraph",
    Box => "Box",
    StudyNote => "StudyNote",
    Quote => "Quote",
    Reading => "Reading",
    SourceReference => "SourceReference",
    Reference => "Reference",
    Activity => "Activity",
    Question => "Question",
    Answer => "Answer",
    Discussion => "Discussion",
    Description => "Description",
    Transcript => "Transcript",
    BulletedList => "BulletedList",
    BulletedSubsidiaryList => "BulletedSubsidiaryList",
    UnNumberedList => "UnNumberedList",
    NumberedList => "NumberedList",
    NumberedSubsidiaryList => "NumberedSubsidiaryList",
    ListItem => "ListItem",
    SubListItem => "SubListItem",
    Image => "Image",
    Figure => "Figure",
    Caption => "Caption",
    MediaContent => "MediaContent",
    InlineFigure => "InlineFigure",
    Table => "Table",
    /// Table title.
    TableHead => "TableHead",
    TableBody => "tbody",
    TableHeader => "thead",
    TableFooter => "tfoot",
    TableRow => "tr",
    HeaderCell => "th",
    DataCell => "td",
    Equation => "Equation",
    /// Wrapper around a Presentation-MathML `math` element.
    MathMl => "MathML",
    ComputerCode => "ComputerCode",
    Italic => "i",
    Bold => "b",
    Link => "a",
    /// Cross-reference to another unit of the course.
    OLink => "olink",
    Superscript => "sup",
    Subscript => "sub",
    GlossaryTerm => "GlossaryTerm",
    LineBreak => "br",
    Font => "font",
}

impl NodeKind {
    /// Inline formatting kinds that flow inside a line of text.
    ///
    /// `ComputerCode` is not listed: it is inline or block depending on its text.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Italic
                | Self::Bold
                | Self::Link
                | Self::OLink
                | Self::Superscript
                | Self::Subscript
                | Self::GlossaryTerm
                | Self::LineBreak
                | Self::Font
                | Self::InlineFigure
        )
    }

    /// Any list container.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Self::BulletedList
                | Self::BulletedSubsidiaryList
                | Self::UnNumberedList
                | Self::NumberedList
                | Self::NumberedSubsidiaryList
        )
    }

    /// List containers whose items are numbered.
    #[must_use]
    pub fn is_ordered_list(&self) -> bool {
        matches!(self, Self::NumberedList | Self::NumberedSubsidiaryList)
    }

    #[must_use]
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::ListItem | Self::SubListItem)
    }
}

/// Node in a parsed courseware tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    /// Element kind.
    pub kind: NodeKind,
    /// Text before the first child (empty when absent).
    pub text: String,
    /// Text after this element, inside its parent (XML tail).
    pub tail: String,
    /// Element attributes.
    pub attrs: HashMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create an empty node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            tail: String::new(),
            attrs: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set tail content.
    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    /// Add one attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append one child.
    #[must_use]
    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// First direct child of the given kind.
    #[must_use]
    pub fn child(&self, kind: &NodeKind) -> Option<&ContentNode> {
        self.children.iter().find(|child| &child.kind == kind)
    }

    /// Direct children of the given kind.
    pub fn children_of<'a>(
        &'a self,
        kind: &NodeKind,
    ) -> impl Iterator<Item = &'a ContentNode> + use<'a> {
        let kind = kind.clone();
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Text of this node and all descendants, without tails of this node.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.plain_text());
            out.push_str(&child.tail);
        }
        out
    }
}
