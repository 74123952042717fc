use crate::types::PAGE_BREAK;

/// Join documents with [`PAGE_BREAK`] on its own line between consecutive
/// documents. No separator before the first or after the last.
pub fn combine_documents<S: AsRef<str>>(documents: &[S]) -> String {
    let separator = format!("\n{}\n", PAGE_BREAK);
    let capacity = documents.iter().map(|d| d.as_ref().len()).sum::<usize>()
        + separator.len() * documents.len().saturating_sub(1);

    let mut out = String::with_capacity(capacity);
    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            out.push_str(&separator);
        }
        out.push_str(doc.as_ref());
    }
    out
}
