/// A chapter as listed by the site's chapter selector.
///
/// `id` goes into urls verbatim, `name` is only ever used (sanitized) as the
/// chapter's directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: String,
    pub name: String,
}

impl Chapter {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
