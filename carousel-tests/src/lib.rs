//! Fixtures shared by the integration tests.

use carousel_syntax::keys::{FIRST, N, OBJ_STM, TYPE};
use carousel_syntax::{
    Diagnostic, ObjRef, Object, ObjectPool, ObjectStreamParser, Parser, Resolver, Result, Stream,
    Writer,
};
use std::sync::Arc;

/// Serialize `objects` as a sequence of indirect objects.
pub fn write_body(objects: &[(ObjRef, Object)]) -> Result<Vec<u8>> {
    let mut writer = Writer::new();

    for (id, object) in objects {
        writer.write_indirect(*id, object)?;
    }

    Ok(writer.finish())
}

/// Pack `objects` into an object stream encoded with `filter`.
pub fn object_stream(objects: &[(u64, Object)], filter: Option<Object>) -> Result<Stream> {
    let mut header = String::new();
    let mut body = Vec::new();

    for (number, object) in objects {
        header.push_str(&format!("{} {} ", number, body.len()));
        body.extend_from_slice(&carousel_syntax::write_object(object)?);
        body.push(b' ');
    }

    let mut data = header.clone().into_bytes();
    data.extend_from_slice(&body);

    let mut stream = Stream::new();
    stream.set_name(TYPE, OBJ_STM);
    stream.set_int(N, objects.len() as i64);
    stream.set_int(FIRST, header.len() as i64);
    stream.set_data(&data, filter)?;

    Ok(stream)
}

/// Parse all indirect objects in `data` into `pool`, unpacking object
/// streams along the way.
///
/// Returns the anomalies the parsers recovered from.
pub fn load_body(data: &[u8], pool: &Arc<ObjectPool>) -> Result<Vec<Diagnostic>> {
    let resolver = pool.clone() as Arc<dyn Resolver>;
    let mut parser = Parser::from_bytes(data).with_pool(resolver.clone());
    let mut diagnostics = vec![];
    let mut object_streams = vec![];

    loop {
        parser.skip_spaces()?;

        if parser.is_eof()? {
            break;
        }

        let (id, object) = parser.parse_indirect_object()?;

        if let Object::Stream(stream) = &object
            && stream.get_name(TYPE).is_some_and(|t| t == OBJ_STM)
        {
            object_streams.push(stream.clone());
        }

        // References are resolved lazily, so objects may refer to ones that
        // are defined later on.
        pool.insert(id, object);
    }

    diagnostics.extend(parser.take_diagnostics());

    for stream in object_streams {
        let mut object_stream = ObjectStreamParser::new(&stream)?.with_pool(resolver.clone());

        for (id, object) in object_stream.parse()? {
            pool.insert(id, object);
        }

        diagnostics.extend_from_slice(object_stream.diagnostics());
    }

    Ok(diagnostics)
}
