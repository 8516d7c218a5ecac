#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Per-page-session submission state.
///
/// `analyzing` gates intake: while a run is active no new submission is
/// accepted, so at most one sequence instance ever exists. `uploaded_image`
/// holds the current photo as a data URL, overwritten by each accepted
/// submission and never cleared independently.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub analyzing: bool,
    pub uploaded_image: Option<String>,
}

impl SessionState {
    /// Try to start a run for a freshly decoded image.
    ///
    /// Returns `false` without touching any state while a run is active;
    /// otherwise stores the image, raises the analyzing flag, and returns
    /// `true`.
    pub fn begin(&mut self, image_url: String) -> bool {
        if self.analyzing {
            return false;
        }
        self.analyzing = true;
        self.uploaded_image = Some(image_url);
        true
    }

    /// Mark the active run as finished. The image stays visible until the
    /// next accepted submission replaces it.
    pub fn finish(&mut self) {
        self.analyzing = false;
    }
}
