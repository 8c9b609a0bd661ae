use crate::Document;

/// The documents a host makes available to code running inside it.
///
/// Builders never look up ambient state themselves. Instead, the entry point of
/// an application describes its host once and hands the result to
/// [crate::ElementBuilder::with_environment]:
///
/// - a browser-like host installs its live document as the *window* document,
/// - a server-side host that polyfills a document installs it as the *global*
///   document,
/// - a test harness usually installs nothing and passes a document explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostEnvironment<'bump> {
    window: Option<Document<'bump>>,
    global: Option<Document<'bump>>,
}
impl<'bump> HostEnvironment<'bump> {
    /// Create an environment with no documents installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the window document, which takes precedence over everything else.
    pub fn with_window(mut self, document: Document<'bump>) -> Self {
        self.window = Some(document);
        self
    }

    /// Install the process-global document, used when nothing else is available.
    pub fn with_global(mut self, document: Document<'bump>) -> Self {
        self.global = Some(document);
        self
    }

    /// The installed window document, if any.
    pub fn window(&self) -> Option<Document<'bump>> {
        self.window
    }

    /// The installed process-global document, if any.
    pub fn global(&self) -> Option<Document<'bump>> {
        self.global
    }

    /// Pick the document to build elements in.
    ///
    /// The window document wins, then `explicit`, then the global document.
    /// Returns `None` if none of them are available.
    pub fn resolve_document(&self, explicit: Option<Document<'bump>>) -> Option<Document<'bump>> {
        self.window.or(explicit).or(self.global)
    }
}
