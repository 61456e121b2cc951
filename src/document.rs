//! Assembly of the combined instruction document.
//!
//! Layout: header, then the base document and a separator when present, then
//! each module's raw contents followed by a separator, in the order given.
//! Nothing here varies between runs, so identical inputs give identical bytes.

/// Fixed block that opens every combined document.
pub const HEADER: &str = "# AI Assistant Instructions\n\n<!-- Generated by combine. Edit the source modules, not this file. -->\n\n";

/// Delimiter appended after the base document and after every module.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// Build the document from already-loaded contents.
///
/// Contents are raw bytes appended verbatim, so files in any encoding pass
/// through untouched. Duplicates in `modules` are kept.
pub fn build_document<B: AsRef<[u8]>>(base: Option<&[u8]>, modules: &[B]) -> Vec<u8> {
    let body_len: usize = modules
        .iter()
        .map(|m| m.as_ref().len() + SEPARATOR.len())
        .sum();
    let base_len = base.map(|b| b.len() + SEPARATOR.len()).unwrap_or(0);
    let mut out = Vec::with_capacity(HEADER.len() + base_len + body_len);

    out.extend_from_slice(HEADER.as_bytes());
    if let Some(base) = base {
        out.extend_from_slice(base);
        out.extend_from_slice(SEPARATOR.as_bytes());
    }
    for module in modules {
        out.extend_from_slice(module.as_ref());
        out.extend_from_slice(SEPARATOR.as_bytes());
    }
    out
}

/// Line count as reported after a successful write: the number of `\n` bytes.
pub fn count_lines(document: &[u8]) -> usize {
    document.iter().filter(|&&b| b == b'\n').count()
}
