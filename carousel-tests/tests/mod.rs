use carousel_syntax::keys::{CATALOG, COUNT, FLATE_DECODE, KIDS, MEDIA_BOX, PAGE, PAGES, PARENT, TYPE};
use carousel_syntax::{Array, Dict, Name, ObjRef, Object, ObjectPool, Reference, Resolver};
use carousel_tests::{object_stream, write_body};
use once_cell::sync::Lazy;
use std::sync::Arc;

mod document;
mod parse;

/// A small document body: a catalog and a page tree whose page lives in a
/// Flate-encoded object stream.
pub(crate) static SAMPLE_BODY: Lazy<Vec<u8>> = Lazy::new(|| {
    let resolver = ObjectPool::new() as Arc<dyn Resolver>;
    let reference = |number| Object::from(Reference::new(ObjRef::new(number, 0), &resolver));

    let mut catalog = Dict::new();
    catalog.set_name(TYPE, CATALOG);
    catalog.set(PAGES, reference(2));

    let mut pages = Dict::new();
    pages.set_name(TYPE, PAGES);
    pages.set(KIDS, Array::from_iter([reference(4)]));
    pages.set_int(COUNT, 1);

    let mut page = Dict::new();
    page.set_name(TYPE, PAGE);
    page.set(PARENT, reference(2));
    page.set(MEDIA_BOX, Array::from_f64_slice(&[0.0, 0.0, 612.0, 792.0]));

    let stream = object_stream(
        &[(4, Object::from(page))],
        Some(Object::from(Name::from(FLATE_DECODE))),
    )
    .unwrap();

    write_body(&[
        (ObjRef::new(1, 0), Object::from(catalog)),
        (ObjRef::new(2, 0), Object::from(pages)),
        (ObjRef::new(3, 0), Object::from(stream)),
    ])
    .unwrap()
});
