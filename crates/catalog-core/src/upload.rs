//! Upload Rules
//!
//! Accept-type allowlist and the upload targets of a course.

pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MIME: &str = "application/msword";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp"];

/// MIME allowlist. Entries may use a `type/*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptList(Vec<String>);

impl Default for AcceptList {
    fn default() -> Self {
        Self::new(["image/*", DOCX_MIME, DOC_MIME])
    }
}

impl AcceptList {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(types.into_iter().map(Into::into).collect())
    }

    pub fn images() -> Self {
        Self::new(["image/*"])
    }

    pub fn documents() -> Self {
        Self::new([DOCX_MIME, DOC_MIME])
    }

    /// Value for an `<input accept=...>` attribute
    pub fn as_attr(&self) -> String {
        self.0.join(",")
    }

    /// Check a file by MIME type, falling back to its extension when the
    /// browser reports none.
    pub fn accepts(&self, mime: &str, file_name: &str) -> bool {
        let mime = if mime.trim().is_empty() {
            match mime_from_extension(file_name) {
                Some(m) => m.to_string(),
                None => return false,
            }
        } else {
            mime.trim().to_ascii_lowercase()
        };
        self.0.iter().any(|allowed| {
            let allowed = allowed.to_ascii_lowercase();
            match allowed.strip_suffix("/*") {
                Some(major) => mime.split('/').next() == Some(major),
                None => allowed == mime,
            }
        })
    }
}

fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "docx" => Some(DOCX_MIME),
        "doc" => Some(DOC_MIME),
        e if IMAGE_EXTENSIONS.contains(&e) => Some("image/unknown"),
        _ => None,
    }
}

/// Which course asset an upload replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    MainImage,
    MenuImage,
    Template,
}

impl UploadKind {
    pub fn is_document(&self) -> bool {
        matches!(self, UploadKind::Template)
    }

    pub fn accept_list(&self) -> AcceptList {
        if self.is_document() {
            AcceptList::documents()
        } else {
            AcceptList::images()
        }
    }

    /// Endpoint path relative to the API base
    pub fn endpoint(&self, course_id: &str) -> String {
        let id = crate::config::encode_segment(course_id);
        match self {
            UploadKind::MainImage => format!("/courses/{}/images/main", id),
            UploadKind::MenuImage => format!("/courses/{}/images/menu", id),
            UploadKind::Template => format!("/courses/{}/template", id),
        }
    }

    pub fn loading_message(&self) -> &'static str {
        if self.is_document() { "Uploading document..." } else { "Uploading image..." }
    }

    pub fn success_message(&self) -> &'static str {
        if self.is_document() { "Document uploaded" } else { "Image uploaded" }
    }

    pub fn failure_message(&self) -> &'static str {
        if self.is_document() { "Document upload failed" } else { "Image upload failed" }
    }

    pub fn formats_hint(&self) -> &'static str {
        if self.is_document() { "Supported formats: DOC, DOCX" } else { "Supported formats: JPG, PNG, GIF" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allowlist() {
        let accept = AcceptList::default();
        assert!(accept.accepts("image/png", "a.png"));
        assert!(accept.accepts(DOCX_MIME, "a.docx"));
        assert!(accept.accepts(DOC_MIME, "a.doc"));
        assert!(!accept.accepts("application/pdf", "a.pdf"));
        assert!(!accept.accepts("text/plain", "a.txt"));
    }

    #[test]
    fn test_extension_fallback() {
        let accept = AcceptList::default();
        assert!(accept.accepts("", "Protocol.DOCX"));
        assert!(accept.accepts("", "photo.JPG"));
        assert!(!accept.accepts("", "archive.zip"));
        assert!(!accept.accepts("", "no-extension"));
    }

    #[test]
    fn test_mime_case_is_ignored() {
        let accept = AcceptList::default();
        assert!(accept.accepts("Image/PNG", "a.png"));
        assert!(accept.accepts("APPLICATION/MSWORD", "a.doc"));
        assert!(AcceptList::new(["IMAGE/*"]).accepts("image/gif", "a.gif"));
        assert!(!accept.accepts("Application/PDF", "a.pdf"));
    }

    #[test]
    fn test_per_kind_lists() {
        assert!(!UploadKind::Template.accept_list().accepts("image/png", "a.png"));
        assert!(!UploadKind::MainImage.accept_list().accepts(DOC_MIME, "a.doc"));
        assert_eq!(AcceptList::images().as_attr(), "image/*");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(UploadKind::MainImage.endpoint("c1"), "/courses/c1/images/main");
        assert_eq!(UploadKind::MenuImage.endpoint("c1"), "/courses/c1/images/menu");
        assert_eq!(UploadKind::Template.endpoint("c 1"), "/courses/c%201/template");
    }
}
