use crate::error::{GgeError, Result};
use crate::gomod::Module;
use serde_json::Deserializer;

/// Decodes the stream of concatenated JSON objects printed by `go list -m -json`.
///
/// Records without a path are dropped. The first malformed record aborts decoding;
/// the reported offset is the end of the last record that decoded cleanly.
pub fn decode_modules(output: &[u8]) -> Result<Vec<Module>> {
    let mut stream = Deserializer::from_slice(output).into_iter::<Module>();
    let mut modules = Vec::new();

    while let Some(next) = stream.next() {
        let module = next.map_err(|source| GgeError::Decode {
            offset: stream.byte_offset(),
            source,
        })?;
        if !module.path.is_empty() {
            modules.push(module);
        }
    }

    Ok(modules)
}
