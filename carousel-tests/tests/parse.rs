use carousel_io::{RandomAccessBuffer, ScratchFile};
use carousel_syntax::keys::{PAGES, TYPE};
use carousel_syntax::{
    DiagnosticKind, Error, Name, ObjRef, Object, ObjectPool, Parser, RandomAccessSource, Resolver,
};
use std::sync::Arc;

fn parse(data: &[u8]) -> Object {
    Parser::from_bytes(data).parse_object().unwrap().unwrap()
}

#[test]
fn catalog_with_reference() {
    let pool = ObjectPool::new();
    pool.insert(ObjRef::new(3, 0), Name::from("Resolved"));

    let object = Parser::from_bytes(b"<< /Type /Catalog /Pages 3 0 R >>")
        .with_pool(pool.clone() as Arc<dyn Resolver>)
        .parse_object()
        .unwrap()
        .unwrap();
    let dict = object.as_dict().unwrap();

    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get_name(TYPE).unwrap(), b"Catalog");
    assert_eq!(dict.get_name(PAGES).unwrap(), b"Resolved");
}

#[test]
fn catalog_with_kids() {
    let pool = ObjectPool::new();
    let object = Parser::from_bytes(b"<< /Type /Catalog /Count 3 /Kids [1 0 R 2 0 R] >>")
        .with_pool(pool.clone() as Arc<dyn Resolver>)
        .parse_object()
        .unwrap()
        .unwrap();
    let dict = object.as_dict().unwrap();

    assert_eq!(dict.get_name(TYPE).unwrap(), b"Catalog");
    assert_eq!(dict.get_raw(b"Count"), Some(&Object::from(3)));

    let kids = dict.get_array(b"Kids").unwrap();
    let ids: Vec<_> = kids
        .iter()
        .map(|kid| kid.as_reference().unwrap().id())
        .collect();
    assert_eq!(ids, vec![ObjRef::new(1, 0), ObjRef::new(2, 0)]);
}

#[test]
fn same_result_from_buffer_source() {
    let data = b"[ /A#20B (lit\\)eral) <414243> -12 +.5 true null << /K [ ] >> ]";

    let from_slice = parse(data);
    let from_buffer = Parser::new(RandomAccessSource::new(RandomAccessBuffer::from(
        data.to_vec(),
    )))
    .parse_object()
    .unwrap()
    .unwrap();

    assert_eq!(from_slice, from_buffer);
    assert_eq!(from_slice.as_array().unwrap().len(), 8);
}

#[test]
fn missing_close_paren() {
    let object = parse(b"<< /Title ( (5)\r\n/Creator (x) >>");
    let dict = object.as_dict().unwrap();

    assert_eq!(dict.get_string(b"Title").unwrap().as_bytes(), b" (5");
    assert_eq!(dict.get_string(b"Creator").unwrap().as_bytes(), b"x");
}

#[test]
fn hex_strings() {
    assert_eq!(parse(b"<4E6F2074>").as_string().unwrap().as_bytes(), b"No t");
    assert_eq!(parse(b"<4E6>").as_string().unwrap().as_bytes(), b"N");
}

#[test]
fn utf16_text_string() {
    let object = parse(b"<FEFF00480069>");
    assert_eq!(object.as_string().unwrap().to_text(), "Hi");
}

#[test]
fn numbers() {
    assert_eq!(parse(b"0").as_i64(), Some(0));
    assert_eq!(parse(b"-0.75").as_f64(), Some(-0.75));
    assert_eq!(parse(b"4.").as_f64(), Some(4.0));
    assert_eq!(parse(b"99999999999999999999").as_i64(), Some(i64::MAX));
}

#[test]
fn names_are_interned() {
    let first = parse(b"/SomeUnusualName");
    let second = parse(b"/SomeUnusualName");

    assert!(first.as_name().unwrap().ptr_eq(second.as_name().unwrap()));
}

#[test]
fn recovery_is_reported() {
    let mut parser = Parser::from_bytes(b"<< /A [/X 2 R] /B 3 ] /C 4 >>");
    let object = parser.parse_object().unwrap().unwrap();
    let dict = object.as_dict().unwrap();

    assert_eq!(dict.get_array(b"A").unwrap().len(), 1);
    assert_eq!(dict.get_int(b"B", 0), 3);
    assert_eq!(dict.get_int(b"C", 0), 4);

    let kinds: Vec<_> = parser.diagnostics().iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::CorruptReference,
            DiagnosticKind::InvalidDictionaryKey
        ]
    );
}

#[test]
fn reference_requires_pool() {
    assert!(matches!(
        Parser::from_bytes(b"[1 0 R]").parse_object(),
        Err(Error::ReferenceWithoutPool { offset: 5 })
    ));
}

#[test]
fn stream_into_scratch_file() {
    let scratch = Arc::new(ScratchFile::main_memory_only());
    let data = b"7 0 obj << /Length 10 >>\nstream\r\n0123456789\r\nendstream\nendobj";

    let mut parser = Parser::from_bytes(data).with_scratch(scratch.clone());
    let (id, object) = parser.parse_indirect_object().unwrap();

    assert_eq!(id, ObjRef::new(7, 0));
    assert_eq!(object.as_stream().unwrap().raw_data().unwrap(), b"0123456789");
    assert_eq!(scratch.page_count() - scratch.free_page_count(), 1);

    drop(object);
    assert_eq!(scratch.page_count(), scratch.free_page_count());
}
