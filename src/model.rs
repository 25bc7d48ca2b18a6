//! Data model for the curriculum document.
//!
//! The types in this module describe the logical content of the rendered PDF
//! without referencing the rendering crate.  Section and entry order is the
//! rendering order and carries meaning (chronological curriculum
//! progression), so the model stores plain vectors and never reorders them.

use std::fmt;

/// One labelled recommendation (course, textbook, reference or lab) within a
/// section, optionally linked to an external resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    label: String,
    text: String,
    link: Option<String>,
}

impl Entry {
    /// Creates an entry without a link target.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            link: None,
        }
    }

    /// Sets the link target and returns the updated entry.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Returns the short category label, e.g. `"Course:"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the descriptive text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the link target, if any.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

/// One time-boxed topic block with a heading and an ordered list of entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    period: String,
    title: String,
    entries: Vec<Entry>,
}

impl Section {
    /// Creates an empty section for the given time range and title.
    pub fn new(period: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry and returns the updated section.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Returns the time-range label, e.g. `"Months 1-2"`.
    pub fn period(&self) -> &str {
        &self.period
    }

    /// Returns the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entries in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the heading text rendered above the entries.
    pub fn heading(&self) -> String {
        format!("{}: {}", self.period, self.title)
    }
}

/// The static ordered dataset of sections driving the document's content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curriculum {
    title: String,
    intro: Option<String>,
    sections: Vec<Section>,
}

impl Curriculum {
    /// Creates an empty curriculum with the given document title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            intro: None,
            sections: Vec::new(),
        }
    }

    /// Sets the introductory paragraph and returns the updated curriculum.
    pub fn with_intro(mut self, intro: impl Into<Option<String>>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Appends a section and returns the updated curriculum.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Extends the curriculum with multiple sections.
    pub fn with_sections<I>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        self.sections.extend(sections);
        self
    }

    /// Returns the document title shown in the running header.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the introductory paragraph, if any.
    pub fn intro(&self) -> Option<&str> {
        self.intro.as_deref()
    }

    /// Returns the sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Checks the dataset invariants: every entry label is non-empty and
    /// every link is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), InvalidCurriculum> {
        for (section_index, section) in self.sections.iter().enumerate() {
            for (entry_index, entry) in section.entries.iter().enumerate() {
                if entry.label.is_empty() {
                    return Err(InvalidCurriculum::EmptyLabel {
                        section: section_index,
                        entry: entry_index,
                    });
                }
                if let Some(link) = &entry.link {
                    if !is_absolute_url(link) {
                        return Err(InvalidCurriculum::InvalidLink {
                            section: section_index,
                            entry: entry_index,
                            link: link.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn is_absolute_url(link: &str) -> bool {
    let rest = link
        .strip_prefix("http://")
        .or_else(|| link.strip_prefix("https://"));
    matches!(rest, Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace))
}

/// Violations of the curriculum dataset invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidCurriculum {
    /// An entry has an empty category label.
    EmptyLabel {
        /// Index of the offending section.
        section: usize,
        /// Index of the offending entry within its section.
        entry: usize,
    },
    /// An entry link is not an absolute http(s) URL.
    InvalidLink {
        /// Index of the offending section.
        section: usize,
        /// Index of the offending entry within its section.
        entry: usize,
        /// The rejected link value.
        link: String,
    },
}

impl fmt::Display for InvalidCurriculum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel { section, entry } => write!(
                f,
                "entry {} in section {} has an empty label",
                entry, section
            ),
            Self::InvalidLink {
                section,
                entry,
                link,
            } => write!(
                f,
                "entry {} in section {} has a link that is not an absolute http(s) URL: {}",
                entry, section, link
            ),
        }
    }
}

impl std::error::Error for InvalidCurriculum {}
