use crate::SAMPLE_BODY;
use carousel_syntax::keys::{CATALOG, COUNT, KIDS, PAGE, PAGES, PARENT, TYPE};
use carousel_syntax::{ObjRef, Object, ObjectPool};
use carousel_tests::load_body;

fn load_sample() -> std::sync::Arc<ObjectPool> {
    let pool = ObjectPool::new();
    let diagnostics = load_body(&SAMPLE_BODY, &pool).unwrap();
    assert!(diagnostics.is_empty(), "{diagnostics:?}");

    pool
}

#[test]
fn sample_loads_all_objects() {
    let pool = load_sample();

    assert_eq!(pool.len(), 4);
    assert!(pool.get(ObjRef::new(3, 0)).unwrap().as_stream().is_some());
    assert!(pool.get(ObjRef::new(4, 0)).unwrap().as_dict().is_some());
}

#[test]
fn walk_page_tree() {
    let pool = load_sample();
    let catalog = pool.get(ObjRef::new(1, 0)).unwrap();
    let catalog = catalog.as_dict().unwrap();

    assert_eq!(catalog.get_name(TYPE).unwrap(), CATALOG);

    let pages = catalog.get_dict(PAGES).unwrap();
    assert_eq!(pages.get_int(COUNT, 0), 1);

    let page = pages.get_array(KIDS).unwrap().get_object(0).unwrap();
    let page = page.as_dict().unwrap();
    assert_eq!(page.get_name(TYPE).unwrap(), PAGE);
    assert_eq!(page.get_dict(PARENT).unwrap(), pages);
}

#[test]
fn object_from_path() {
    let pool = load_sample();
    let catalog = pool.get(ObjRef::new(1, 0)).unwrap();
    let catalog = catalog.as_dict().unwrap();

    assert_eq!(
        catalog.get_object_from_path("Pages/Kids/[0]/MediaBox/[3]"),
        Some(Object::from(792.0))
    );
    assert_eq!(catalog.get_object_from_path("Pages/Kids/[1]"), None);
    assert_eq!(catalog.get_object_from_path("Pages/Missing"), None);
}

#[test]
fn references_see_later_changes() {
    let pool = load_sample();
    let catalog = pool.get(ObjRef::new(1, 0)).unwrap();
    let catalog = catalog.as_dict().unwrap().clone();

    pool.insert(ObjRef::new(2, 0), Object::Null);
    assert!(catalog.get(PAGES).is_none());
    assert!(catalog.get_raw(PAGES).unwrap().as_reference().is_some());
}

#[test]
fn damaged_body() {
    let data = b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R junk >>\nendobj\n\
        2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\n\
        3 0 obj\n<< /Type /Page /Parent 2 0 R /Contents 4 0 R >>\nendobj\n\
        4 0 obj\n<< /Length 999 >>\nstream\nBT /F1 12 Tf (Hi) Tj ET\nendstream\nendobj\n";

    let pool = ObjectPool::new();
    let diagnostics = load_body(data, &pool).unwrap();
    assert_eq!(diagnostics.len(), 3);

    let contents = pool.get(ObjRef::new(4, 0)).unwrap();
    assert_eq!(
        contents.as_stream().unwrap().decoded().unwrap().as_ref(),
        b"BT /F1 12 Tf (Hi) Tj ET"
    );

    let page = pool.get(ObjRef::new(3, 0)).unwrap();
    assert_eq!(
        page.as_dict().unwrap().get_dict(PARENT).unwrap().get_int(COUNT, 0),
        1
    );
}
