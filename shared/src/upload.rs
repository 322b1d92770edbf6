use thiserror::Error;

pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Value for the file picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = "image/jpeg,.jpg,.jpeg,image/png,.png";

/// What the drop target knows about a candidate file before reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("no file provided")]
    Empty,
    #[error("only one file can be analysed at a time, got {0}")]
    TooManyFiles(usize),
    #[error("unsupported file type for {name} ({mime_type})")]
    UnsupportedType { name: String, mime_type: String },
    #[error("{name} is {size} bytes, over the 16 MiB limit")]
    TooLarge { name: String, size: u64 },
}

impl FileMeta {
    pub fn has_accepted_type(&self) -> bool {
        let mime = self.mime_type.to_ascii_lowercase();
        if ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
            return true;
        }

        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }

    pub fn check(&self) -> Result<(), Rejection> {
        if !self.has_accepted_type() {
            return Err(Rejection::UnsupportedType {
                name: self.name.clone(),
                mime_type: self.mime_type.clone(),
            });
        }
        if self.size > MAX_UPLOAD_BYTES {
            return Err(Rejection::TooLarge {
                name: self.name.clone(),
                size: self.size,
            });
        }
        Ok(())
    }
}

/// Picks the single acceptable file out of a drop, paste or picker selection.
///
/// A selection holding more than one file is rejected as a whole, the same way
/// a wrong type or an oversized file is. Returns the index of the accepted file.
pub fn select_single(files: &[FileMeta]) -> Result<usize, Rejection> {
    match files {
        [] => Err(Rejection::Empty),
        [file] => file.check().map(|_| 0),
        many => Err(Rejection::TooManyFiles(many.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn meta(name: &str, mime_type: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    #[rstest]
    #[case("face.jpg", "image/jpeg")]
    #[case("face.jpeg", "image/jpeg")]
    #[case("face.png", "image/png")]
    #[case("FACE.PNG", "")]
    #[case("portrait", "image/jpeg")]
    fn accepts_jpeg_and_png(#[case] name: &str, #[case] mime: &str) {
        assert_eq!(select_single(&[meta(name, mime, 1024)]), Ok(0));
    }

    #[rstest]
    #[case("clip.gif", "image/gif")]
    #[case("photo.webp", "image/webp")]
    #[case("notes.txt", "text/plain")]
    #[case("noextension", "")]
    fn rejects_other_types(#[case] name: &str, #[case] mime: &str) {
        assert!(matches!(
            select_single(&[meta(name, mime, 1024)]),
            Err(Rejection::UnsupportedType { .. })
        ));
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert_eq!(
            select_single(&[meta("big.png", "image/png", MAX_UPLOAD_BYTES)]),
            Ok(0)
        );
        assert_eq!(
            select_single(&[meta("big.png", "image/png", MAX_UPLOAD_BYTES + 1)]),
            Err(Rejection::TooLarge {
                name: "big.png".into(),
                size: MAX_UPLOAD_BYTES + 1
            })
        );
    }

    #[test]
    fn rejects_empty_and_multiple_selections() {
        assert_eq!(select_single(&[]), Err(Rejection::Empty));

        let two = [meta("a.png", "image/png", 10), meta("b.png", "image/png", 10)];
        assert_eq!(select_single(&two), Err(Rejection::TooManyFiles(2)));
    }
}
