use curriculum_pdf::assembler::{self, RenderedDocument};
use curriculum_pdf::error::Error;
use curriculum_pdf::model::{Curriculum, Entry, Section};
use curriculum_pdf::{data, fonts};
use lopdf::{Document, Object};
use sha2::{Digest, Sha256};

fn render_standard() -> Option<RenderedDocument> {
    if !fonts::default_fonts_available() {
        return None;
    }
    Some(assembler::render(&data::standard_curriculum()).expect("render standard curriculum"))
}

fn skip(test: &str) {
    eprintln!(
        "Skipping {test}: bundled fonts missing. Set CURRICULUM_PDF_FONTS_DIR or copy the Roboto \
         family into assets/fonts."
    );
}

/// Collects the URI of every link annotation, walking pages in order and each
/// page's /Annots array in insertion order.
fn annotation_uris(bytes: &[u8]) -> Vec<String> {
    let document = Document::load_mem(bytes).expect("parse rendered pdf");
    let mut uris = Vec::new();
    for (_, page_id) in document.get_pages() {
        let page_dict = document
            .get_object(page_id)
            .and_then(Object::as_dict)
            .expect("page dictionary");
        let Ok(Object::Array(refs)) = page_dict.get(b"Annots") else {
            continue;
        };
        for annot_ref in refs {
            let Object::Reference(annot_id) = annot_ref else {
                continue;
            };
            let annot = document
                .get_object(*annot_id)
                .and_then(Object::as_dict)
                .expect("annotation dictionary");
            let action = annot
                .get(b"A")
                .and_then(Object::as_dict)
                .expect("action dictionary");
            let Object::String(uri, _) = action.get(b"URI").expect("uri entry") else {
                panic!("expected string uri");
            };
            uris.push(String::from_utf8(uri.clone()).expect("ascii uri"));
        }
    }
    uris
}

#[test]
fn renders_non_empty_pdf() {
    let Some(rendered) = render_standard() else {
        skip("renders_non_empty_pdf");
        return;
    };
    assert!(rendered.bytes.starts_with(b"%PDF-"));
    assert!(rendered.bytes.len() > 1024);
}

#[test]
fn page_count_matches_parsed_document() {
    let Some(rendered) = render_standard() else {
        skip("page_count_matches_parsed_document");
        return;
    };
    let document = Document::load_mem(&rendered.bytes).expect("parse rendered pdf");
    assert_eq!(document.get_pages().len(), rendered.page_count);
    assert!(rendered.page_count >= 2, "ten sections span multiple pages");
}

#[test]
fn every_linked_entry_gets_a_uri_annotation() {
    let Some(rendered) = render_standard() else {
        skip("every_linked_entry_gets_a_uri_annotation");
        return;
    };

    let expected: Vec<String> = data::standard_curriculum()
        .sections()
        .iter()
        .flat_map(|section| section.entries().to_vec())
        .filter_map(|entry| entry.link().map(str::to_owned))
        .collect();

    // Entries are placed top-to-bottom, so page order equals content order.
    assert_eq!(annotation_uris(&rendered.bytes), expected);

    let recorded: Vec<&str> = rendered.links.iter().map(|link| link.url.as_str()).collect();
    let expected_refs: Vec<&str> = expected.iter().map(String::as_str).collect();
    assert_eq!(recorded, expected_refs);
}

#[test]
fn single_linked_entry_scenario() {
    if !fonts::default_fonts_available() {
        skip("single_linked_entry_scenario");
        return;
    }

    let curriculum = Curriculum::new("Test Curriculum").with_section(
        Section::new("Month 1", "Only Topic").with_entry(
            Entry::new("Course:", "The only course").with_link("https://example.com/course"),
        ),
    );

    let rendered = assembler::render(&curriculum).expect("render single-entry curriculum");
    assert_eq!(rendered.page_count, 1);
    assert_eq!(rendered.links.len(), 1);
    assert_eq!(
        annotation_uris(&rendered.bytes),
        vec!["https://example.com/course".to_string()]
    );
}

#[test]
fn plain_entries_produce_no_annotations() {
    if !fonts::default_fonts_available() {
        skip("plain_entries_produce_no_annotations");
        return;
    }

    let curriculum = Curriculum::new("Test Curriculum").with_section(
        Section::new("Month 1", "Reading")
            .with_entry(Entry::new("Textbook:", "A book without a link")),
    );

    let rendered = assembler::render(&curriculum).expect("render plain curriculum");
    assert!(rendered.links.is_empty());
    assert!(annotation_uris(&rendered.bytes).is_empty());
}

#[test]
fn rendering_is_deterministic_after_metadata_scrub() {
    let Some(first) = render_standard() else {
        skip("rendering_is_deterministic_after_metadata_scrub");
        return;
    };
    let Some(second) = render_standard() else {
        skip("rendering_is_deterministic_after_metadata_scrub");
        return;
    };

    assert_eq!(
        first.bytes.len(),
        second.bytes.len(),
        "PDF sizes should match"
    );
    assert_eq!(first.page_count, second.page_count);
    assert_eq!(
        Sha256::digest(scrub_pdf(&first.bytes)),
        Sha256::digest(scrub_pdf(&second.bytes)),
        "PDF renders must match after metadata normalization"
    );
}

#[test]
fn write_error_for_missing_directory() {
    if !fonts::default_fonts_available() {
        skip("write_error_for_missing_directory");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("does-not-exist").join("out.pdf");

    let result = assembler::generate(&data::standard_curriculum(), &path);
    assert!(matches!(result, Err(Error::Write { .. })));
    assert!(!path.exists(), "no partial file may be left behind");
}

#[test]
fn generate_writes_file_and_returns_path() {
    if !fonts::default_fonts_available() {
        skip("generate_writes_file_and_returns_path");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("curriculum.pdf");

    let written = assembler::generate(&data::standard_curriculum(), &path).expect("generate pdf");
    assert_eq!(written, path);
    let bytes = std::fs::read(&path).expect("read generated pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

/// Blanks out the timestamps and identifiers the PDF writer embeds on every
/// run so that two renders of the same input can be compared.
fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            else {
                break;
            };
            let start_index = offset + start_pos + start.len();
            let Some(end_pos) = data[start_index..]
                .windows(end.len())
                .position(|window| window == end)
            else {
                break;
            };
            for byte in &mut data[start_index..start_index + end_pos] {
                if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                    *byte = b'0';
                }
            }
            offset = start_index + end_pos + end.len();
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(
        &mut normalized,
        b"<xmp:MetadataDate>",
        b"</xmp:MetadataDate>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:DocumentID>",
        b"</xmpMM:DocumentID>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:InstanceID>",
        b"</xmpMM:InstanceID>",
    );
    scrub_xml(&mut normalized, b"<xmpMM:VersionID>", b"</xmpMM:VersionID>");
    normalized
}
