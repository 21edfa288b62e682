//! Integration tests for check rendering

use amount_words::Amount;
use check::{CheckError, CheckForm, CheckLayout, CheckRecord, CheckRenderer};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

fn sample_record() -> CheckRecord {
    let amount: Amount = "1234.50".parse().unwrap();
    CheckRecord::new("15/08/2025", "Acme Traders", amount)
        .with_memo("Office rent")
        .with_bank("City Bank")
        .with_numbers("021000021", "123456789", "1001")
}

fn write_signature(dir: &Path) -> PathBuf {
    let img = image::GrayImage::from_fn(120, 40, |x, _| image::Luma([(x * 2) as u8]));
    let path = dir.join("signature.png");
    img.save(&path).unwrap();
    path
}

fn reopen(bytes: &[u8]) -> (lopdf::Document, String) {
    let doc = lopdf::Document::load_mem(bytes).expect("Failed to re-open PDF");
    let page_id = doc.get_pages()[&1];
    let content = doc.get_page_content(page_id).expect("Missing content");
    let content = String::from_utf8_lossy(&content).into_owned();
    (doc, content)
}

fn hex(text: &str) -> String {
    pdf_core::encode_win_ansi_hex(text)
}

#[test]
fn test_render_writes_one_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("check.pdf");

    CheckRenderer::default()
        .render(&sample_record(), &path)
        .expect("Failed to render check");

    let bytes = std::fs::read(&path).unwrap();
    let (doc, content) = reopen(&bytes);
    assert_eq!(doc.get_pages().len(), 1);

    assert!(content.contains(&hex("Pay to the order of: Acme Traders")));
    assert!(content.contains(&hex("Rupees: 1234.50")));
    assert!(content.contains(&hex(
        "One thousand, two hundred and thirty four rupees and 50 paisa"
    )));
    assert!(content.contains(&hex("City Bank")));
    assert!(content.contains(&hex("021000021  123456789  1001")));
}

#[test]
fn test_render_keeps_typographic_punctuation() {
    let amount: Amount = "75".parse().unwrap();
    let record = CheckRecord::new("01/10/2025", "O\u{2019}Brien Caf\u{e9}", amount)
        .with_memo("\u{201C}Catering\u{201D} \u{2013} \u{20AC}75");

    let bytes = CheckRenderer::default().render_to_bytes(&record).unwrap();
    let (_, content) = reopen(&bytes);

    let payee = hex("Pay to the order of: O\u{2019}Brien Caf\u{e9}");
    assert!(payee.contains("4F92427269656E20436166E9"));
    assert!(content.contains(&payee));
    assert!(content.contains(&hex("Memo: \u{201C}Catering\u{201D} \u{2013} \u{20AC}75")));
}

#[test]
fn test_render_without_signature_draws_line() {
    let bytes = CheckRenderer::default()
        .render_to_bytes(&sample_record())
        .unwrap();
    let (_, content) = reopen(&bytes);

    assert!(content.contains(" l\nS"));
    assert!(!content.contains(" Do\n"));
}

#[test]
fn test_render_with_missing_signature_draws_line() {
    let record = sample_record().with_signature("/no/such/dir/signature.png");
    let bytes = CheckRenderer::default().render_to_bytes(&record).unwrap();
    let (_, content) = reopen(&bytes);

    assert!(content.contains(" l\nS"));
    assert!(!content.contains(" Do\n"));
}

#[test]
fn test_render_with_corrupt_signature_draws_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signature.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G', 0, 0, 0, 0]).unwrap();

    let record = sample_record().with_signature(&path);
    let bytes = CheckRenderer::default().render_to_bytes(&record).unwrap();
    let (_, content) = reopen(&bytes);

    assert!(content.contains(" l\nS"));
    assert!(!content.contains(" Do\n"));
}

#[test]
fn test_render_with_signature_draws_image_only() {
    let dir = tempfile::tempdir().unwrap();
    let signature = write_signature(dir.path());

    let record = sample_record().with_signature(&signature);
    let bytes = CheckRenderer::default().render_to_bytes(&record).unwrap();
    let (doc, content) = reopen(&bytes);

    assert!(content.contains("/Im1 Do"));
    assert!(!content.contains(" l\nS"));

    let page_id = doc.get_pages()[&1];
    let (resources, _) = doc.get_page_resources(page_id);
    let xobjects = resources
        .expect("Missing resources")
        .get(b"XObject")
        .and_then(|obj| obj.as_dict())
        .expect("Missing XObject dictionary");
    assert_eq!(xobjects.len(), 1);
}

#[test]
fn test_render_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("check.pdf");

    let result = CheckRenderer::default().render(&sample_record(), &path);

    assert!(matches!(result, Err(CheckError::Pdf(_))));
    assert!(!path.exists());
}

#[test]
fn test_render_over_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("check.pdf");
    std::fs::create_dir(&target).unwrap();

    let result = CheckRenderer::default().render(&sample_record(), &target);
    assert!(result.is_err());

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(target.is_dir());
}

#[test]
fn test_render_is_repeatable() {
    let renderer = CheckRenderer::default();
    let dir = tempfile::tempdir().unwrap();

    for name in ["first.pdf", "second.pdf"] {
        renderer
            .render(&sample_record(), dir.path().join(name))
            .unwrap();
    }

    let first = reopen(&std::fs::read(dir.path().join("first.pdf")).unwrap()).1;
    let second = reopen(&std::fs::read(dir.path().join("second.pdf")).unwrap()).1;
    assert_eq!(first, second);
}

#[test]
fn test_form_to_pdf() {
    let form = CheckForm::from_json(
        r#"{
            "date": "01/09/2025",
            "payee": "Ravi Kumar",
            "amount": "0.5",
            "signaturePath": "  "
        }"#,
    )
    .unwrap();

    let record = form.into_record().unwrap();
    let bytes = CheckRenderer::default().render_to_bytes(&record).unwrap();
    let (_, content) = reopen(&bytes);

    assert!(content.contains(&hex("Zero rupees and 50 paisa")));
    assert!(content.contains(&hex("Your Bank Name")));
    assert!(content.contains(" l\nS"));
}

#[test]
fn test_custom_layout_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let layout_path = dir.path().join("layout.json");
    std::fs::write(
        &layout_path,
        r#"{ "labels": { "amount": "Rs. " }, "bankPlaceholder": "Unknown Bank" }"#,
    )
    .unwrap();

    let layout = CheckLayout::from_file(&layout_path).unwrap();
    let amount: Amount = "10".parse().unwrap();
    let record = CheckRecord::new("today", "Bob", amount);

    let bytes = CheckRenderer::new(layout).render_to_bytes(&record).unwrap();
    let (_, content) = reopen(&bytes);

    assert!(content.contains(&hex("Rs. 10.00")));
    assert!(content.contains(&hex("Unknown Bank")));
}
