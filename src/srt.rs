/// One subtitle block. `time` and `sub` are absent when the block
/// has fewer lines than expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub(crate) id: String,
    pub(crate) time: Option<String>,
    pub(crate) sub: Option<String>,
}

impl SubtitleEntry {
    pub fn new<I, T, S>(id: I, time: T, sub: S) -> Self
    where
        I: Into<String>,
        T: Into<String>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            time: Some(time.into()),
            sub: Some(sub.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    pub fn with_sub<S: Into<String>>(&self, sub: S) -> Self {
        Self {
            id: self.id.clone(),
            time: self.time.clone(),
            sub: Some(sub.into()),
        }
    }
}
