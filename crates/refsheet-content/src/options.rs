//! Parser options.

/// Caller-supplied options for a parse run.
///
/// All options default to `true`; the CLI's `--no-*` flags turn them off.
/// These affect formatting and attachment only, never document structure.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Keep extracted code fenced as ```` ```lang\ncode\n``` ```` in card
    /// bodies. When off, the bare code text is stored instead.
    pub preserve_code_blocks: bool,
    /// Attach decoded front matter to the document. When off, metadata is
    /// an empty mapping (the block is still removed from the body).
    pub include_metadata: bool,
    /// Attach span-config layout hints to cards. When off, `spanConfig`
    /// is empty; annotations are still parsed for titles and shortcut
    /// detection.
    pub include_span_config: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            preserve_code_blocks: true,
            include_metadata: true,
            include_span_config: true,
        }
    }
}

impl ParseOptions {
    /// Set whether card bodies keep their code fences.
    pub fn with_preserve_code_blocks(mut self, preserve: bool) -> Self {
        self.preserve_code_blocks = preserve;
        self
    }

    /// Set whether front matter is attached to the document.
    pub fn with_include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Set whether span-config hints are attached to cards.
    pub fn with_include_span_config(mut self, include: bool) -> Self {
        self.include_span_config = include;
        self
    }
}
