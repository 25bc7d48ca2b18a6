//! Hyperlink annotation injection built on top of `lopdf`.
//!
//! The layout engine used by this crate lays out the text but cannot emit
//! PDF link annotations, so the assembler records the rectangle of every
//! linked line while it places content and this module patches the rendered
//! bytes afterwards: each link becomes a `/Subtype /Link` annotation with a
//! `/URI` action attached to its page's `/Annots` array.

use lopdf::{Dictionary, Document, Object, ObjectId};

const PT_PER_MM: f64 = 72.0 / 25.4;

/// Rectangle of a linked line, in millimetres, with `top` measured from the
/// top edge of the page (the assembler's coordinate system).
#[derive(Clone, Debug, PartialEq)]
pub struct LinkRect {
    /// 1-based page number.
    pub page: usize,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LinkRect {
    /// Converts to a PDF `/Rect` array `[x1, y1, x2, y2]` in points, with the
    /// origin at the bottom-left corner of a page of `page_height`
    /// millimetres.
    pub fn to_pdf_rect(&self, page_height: f64) -> [f32; 4] {
        let x1 = self.left * PT_PER_MM;
        let x2 = (self.left + self.width) * PT_PER_MM;
        let y1 = (page_height - self.top - self.height) * PT_PER_MM;
        let y2 = (page_height - self.top) * PT_PER_MM;
        [x1 as f32, y1 as f32, x2 as f32, y2 as f32]
    }
}

/// A clickable region pointing at an external URL.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkAnnotation {
    pub rect: LinkRect,
    pub url: String,
}

/// Errors that can occur while embedding link annotations into a rendered
/// PDF document.
#[derive(Debug)]
pub enum LinkError {
    /// The PDF bytes could not be parsed or rewritten by `lopdf`.
    Parse(lopdf::Error),
    /// An annotation referenced a page that does not exist in the document.
    MissingPage {
        /// The requested (1-based) page number.
        page_number: usize,
    },
    /// A page's `/Annots` entry referenced an object that is not present.
    DanglingAnnots {
        /// The (1-based) page number with the broken reference.
        page_number: usize,
    },
}

impl From<lopdf::Error> for LinkError {
    fn from(err: lopdf::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<std::io::Error> for LinkError {
    fn from(err: std::io::Error) -> Self {
        Self::Parse(err.into())
    }
}

impl std::fmt::Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Failed to rewrite PDF bytes: {err}"),
            Self::MissingPage { page_number } => write!(
                f,
                "Link annotation refers to missing page {}",
                page_number
            ),
            Self::DanglingAnnots { page_number } => write!(
                f,
                "Page {} has an /Annots reference to a missing object",
                page_number
            ),
        }
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::MissingPage { .. } | Self::DanglingAnnots { .. } => None,
        }
    }
}

/// Attaches one URI link annotation per entry of `annotations` to the pages
/// of the provided PDF and returns the rewritten bytes.
///
/// `page_height` is the page height in millimetres, used to flip the
/// top-based rectangles into PDF coordinates.  With no annotations the input
/// bytes are returned unchanged.
pub fn apply_link_annotations(
    pdf_bytes: &[u8],
    annotations: &[LinkAnnotation],
    page_height: f64,
) -> Result<Vec<u8>, LinkError> {
    if annotations.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let mut document = Document::load_mem(pdf_bytes)?;
    let pages = document.get_pages();

    for annotation in annotations {
        let page_number = annotation.rect.page;
        let page_ref = pages
            .get(&(page_number as u32))
            .copied()
            .ok_or(LinkError::MissingPage { page_number })?;

        let annotation_id = document.add_object(link_dictionary(annotation, page_height));
        attach_to_page(&mut document, page_ref, page_number, annotation_id)?;
    }

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

fn link_dictionary(annotation: &LinkAnnotation, page_height: f64) -> Object {
    let [x1, y1, x2, y2] = annotation.rect.to_pdf_rect(page_height);

    let mut action = Dictionary::new();
    action.set("Type", Object::Name("Action".into()));
    action.set("S", Object::Name("URI".into()));
    action.set("URI", Object::string_literal(annotation.url.as_str()));

    let mut dictionary = Dictionary::new();
    dictionary.set("Type", Object::Name("Annot".into()));
    dictionary.set("Subtype", Object::Name("Link".into()));
    dictionary.set(
        "Rect",
        Object::Array(vec![
            Object::Real(x1),
            Object::Real(y1),
            Object::Real(x2),
            Object::Real(y2),
        ]),
    );
    dictionary.set(
        "Border",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(0),
        ]),
    );
    dictionary.set("A", Object::Dictionary(action));

    Object::Dictionary(dictionary)
}

fn attach_to_page(
    document: &mut Document,
    page_ref: ObjectId,
    page_number: usize,
    annotation_id: ObjectId,
) -> Result<(), LinkError> {
    // An existing /Annots entry may be a direct array or a reference to one.
    let indirect_array = {
        let page_dict = page_dictionary(document, page_ref, page_number)?;
        match page_dict.get(b"Annots") {
            Ok(Object::Reference(id)) => Some(*id),
            _ => None,
        }
    };

    match indirect_array {
        Some(array_id) => {
            let object = document
                .objects
                .get_mut(&array_id)
                .ok_or(LinkError::DanglingAnnots { page_number })?;
            let array = object.as_array_mut().map_err(LinkError::Parse)?;
            array.push(Object::Reference(annotation_id));
        }
        None => {
            let page_dict = page_dictionary_mut(document, page_ref, page_number)?;
            match page_dict.get_mut(b"Annots") {
                Ok(Object::Array(array)) => array.push(Object::Reference(annotation_id)),
                _ => page_dict.set(
                    "Annots",
                    Object::Array(vec![Object::Reference(annotation_id)]),
                ),
            }
        }
    }

    Ok(())
}

fn page_dictionary<'a>(
    document: &'a Document,
    page_ref: ObjectId,
    page_number: usize,
) -> Result<&'a Dictionary, LinkError> {
    document
        .objects
        .get(&page_ref)
        .ok_or(LinkError::MissingPage { page_number })?
        .as_dict()
        .map_err(LinkError::Parse)
}

fn page_dictionary_mut<'a>(
    document: &'a mut Document,
    page_ref: ObjectId,
    page_number: usize,
) -> Result<&'a mut Dictionary, LinkError> {
    document
        .objects
        .get_mut(&page_ref)
        .ok_or(LinkError::MissingPage { page_number })?
        .as_dict_mut()
        .map_err(LinkError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    fn annotation(page: usize, url: &str) -> LinkAnnotation {
        LinkAnnotation {
            rect: LinkRect {
                page,
                left: 32.0,
                top: 50.0,
                width: 80.0,
                height: 7.0,
            },
            url: url.to_string(),
        }
    }

    fn single_page_pdf() -> Vec<u8> {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages));
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        document.save_to(&mut buffer).expect("save minimal pdf");
        buffer
    }

    #[test]
    fn pdf_rect_flips_vertical_axis() {
        let rect = LinkRect {
            page: 1,
            left: 10.0,
            top: 20.0,
            width: 50.0,
            height: 7.0,
        };
        let [x1, y1, x2, y2] = rect.to_pdf_rect(297.0);
        let k = 72.0 / 25.4;
        assert!((x1 as f64 - 10.0 * k).abs() < 1e-3);
        assert!((x2 as f64 - 60.0 * k).abs() < 1e-3);
        assert!((y1 as f64 - 270.0 * k).abs() < 1e-3);
        assert!((y2 as f64 - 277.0 * k).abs() < 1e-3);
    }

    #[test]
    fn injects_uri_annotation_into_page() {
        let bytes = single_page_pdf();
        let annotated =
            apply_link_annotations(&bytes, &[annotation(1, "https://example.com/a")], 297.0)
                .expect("apply annotations");

        let document = Document::load_mem(&annotated).expect("reload pdf");
        let pages = document.get_pages();
        let page_id = pages[&1];
        let page_dict = document
            .get_object(page_id)
            .and_then(Object::as_dict)
            .expect("page dictionary");

        let annots = page_dict.get(b"Annots").expect("annots entry");
        let Object::Array(refs) = annots else {
            panic!("expected /Annots array, got {annots:?}");
        };
        assert_eq!(refs.len(), 1);

        let Object::Reference(annot_id) = &refs[0] else {
            panic!("expected annotation reference");
        };
        let annot = document
            .get_object(*annot_id)
            .and_then(Object::as_dict)
            .expect("annotation dictionary");

        let Object::Name(subtype) = annot.get(b"Subtype").expect("subtype") else {
            panic!("expected name subtype");
        };
        assert_eq!(subtype, b"Link");

        let action = annot
            .get(b"A")
            .and_then(Object::as_dict)
            .expect("action dictionary");
        let Object::String(uri, _) = action.get(b"URI").expect("uri entry") else {
            panic!("expected string uri");
        };
        assert_eq!(uri, b"https://example.com/a");
    }

    #[test]
    fn appends_to_existing_annotations() {
        let bytes = single_page_pdf();
        let first = apply_link_annotations(&bytes, &[annotation(1, "https://example.com/a")], 297.0)
            .expect("first pass");
        let second =
            apply_link_annotations(&first, &[annotation(1, "https://example.com/b")], 297.0)
                .expect("second pass");

        let document = Document::load_mem(&second).expect("reload pdf");
        let page_id = document.get_pages()[&1];
        let page_dict = document
            .get_object(page_id)
            .and_then(Object::as_dict)
            .expect("page dictionary");
        let Object::Array(refs) = page_dict.get(b"Annots").expect("annots entry") else {
            panic!("expected /Annots array");
        };
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn missing_page_is_reported() {
        let bytes = single_page_pdf();
        let result = apply_link_annotations(&bytes, &[annotation(3, "https://example.com")], 297.0);
        assert!(matches!(
            result,
            Err(LinkError::MissingPage { page_number: 3 })
        ));
    }

    #[test]
    fn no_annotations_returns_input_unchanged() {
        let bytes = single_page_pdf();
        let unchanged = apply_link_annotations(&bytes, &[], 297.0).expect("no-op");
        assert_eq!(unchanged, bytes);
    }
}
