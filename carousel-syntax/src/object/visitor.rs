//! Double dispatch over the variants of the object model.

use crate::object::{Array, Dict, Name, Number, PdfString, Reference, Stream};

/// An operation that handles each kind of object separately.
///
/// Objects hand themselves to the matching `visit_*` method through their
/// `accept` method. The [`Writer`](crate::write::Writer) is the canonical
/// implementation.
pub trait Visitor {
    /// The result of visiting a single object.
    type Output;

    /// Visit the null object.
    fn visit_null(&mut self) -> Self::Output;
    /// Visit a boolean.
    fn visit_boolean(&mut self, value: bool) -> Self::Output;
    /// Visit a number.
    fn visit_number(&mut self, number: &Number) -> Self::Output;
    /// Visit a name.
    fn visit_name(&mut self, name: &Name) -> Self::Output;
    /// Visit a string.
    fn visit_string(&mut self, string: &PdfString) -> Self::Output;
    /// Visit an array.
    fn visit_array(&mut self, array: &Array) -> Self::Output;
    /// Visit a dictionary.
    fn visit_dict(&mut self, dict: &Dict) -> Self::Output;
    /// Visit a stream.
    fn visit_stream(&mut self, stream: &Stream) -> Self::Output;
    /// Visit an indirect reference.
    fn visit_reference(&mut self, reference: &Reference) -> Self::Output;
}
