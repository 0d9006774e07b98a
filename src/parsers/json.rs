//! JSON row parser: shape classification over a fully decoded document.

use serde_json::Value;

use crate::encoding::decode_utf8;
use crate::error::{ParseError, Result};
use crate::format::FileFormat;

/// Key whose array value is lifted to the row sequence when the document is
/// a top-level object.
const TRANSACTIONS_KEY: &str = "transactions";

/// Parse JSON bytes into rows by document shape.
///
/// A top-level array contributes its elements verbatim, even elements that
/// are not objects. An object with a `"transactions"` array contributes that
/// array's elements; any other object becomes the sole row. A bare scalar at
/// the top level is rejected.
pub(crate) fn parse_rows(data: &[u8]) -> Result<Vec<Value>> {
    let text = decode_utf8(data).map_err(|e| ParseError::failure(FileFormat::Json, e))?;
    let document: Value =
        serde_json::from_str(text).map_err(|e| ParseError::failure(FileFormat::Json, e))?;

    match document {
        Value::Array(elements) => Ok(elements),
        Value::Object(object) => {
            let transactions = object
                .get(TRANSACTIONS_KEY)
                .and_then(|value| value.as_array().cloned());

            Ok(match transactions {
                Some(elements) => elements,
                None => vec![Value::Object(object)],
            })
        }
        _ => Err(ParseError::UnexpectedStructure),
    }
}
