pub mod resolve;
pub mod stamp;
pub mod validate;

/// `1 file`, `2 files`.
pub(crate) fn counted(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Summary line shared by every command's human output.
pub(crate) fn summary(error_count: usize, file_count: usize) -> String {
    format!(
        "{} in {}.",
        counted(error_count, "error"),
        counted(file_count, "file")
    )
}
