#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Page skeletons that frame a rendered step block.
//!
//! Each skeleton is static markup holding one [`BLOCK_PLACEHOLDER`] token.
//! The only dynamic behaviour lives client-side: a `blockComplete` DOM event
//! navigates to the next step.

use tracing::debug;

/// Token substituted with the block markup.
pub const BLOCK_PLACEHOLDER: &str = "{{BLOCK_CONTENT}}";

const SIMPLE_CENTER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Loading...</title>
  <style>
    body {
      font-family: Arial, sans-serif;
      background: #ffffff;
      margin: 0;
      padding: 20px;
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
    }
    .block-container { max-width: 600px; width: 100%; min-height: 500px; }
    .block-wrapper { margin: 15px 0; padding: 10px; }
  </style>
  <script>
    document.addEventListener('blockComplete', function () {
      const parts = window.location.pathname.split('/');
      const currentStep = parseInt(parts[parts.length - 1]) || 0;
      const baseUrl = parts.slice(0, -1).join('/');
      window.location.href = baseUrl + '/' + (currentStep + 1);
    });
  </script>
</head>
<body>
  <div class="block-container" id="blockContainer">
    {{BLOCK_CONTENT}}
  </div>
</body>
</html>
"#;

const FAKE_DOWNLOAD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Download - Please Wait</title>
  <style>
    body { font-family: Arial, sans-serif; background: #f5f5f5; margin: 0; padding: 20px; }
    .header { background: #2c3e50; color: white; padding: 15px; margin-bottom: 20px; }
    .content { max-width: 800px; margin: 0 auto; background: white; padding: 20px; border-radius: 5px; }
  </style>
</head>
<body>
  <div class="header">
    <h1>Download Center</h1>
  </div>
  <div class="content">
    <h2>Preparing your download...</h2>
    <p>Your file is being prepared. Please wait while we process your request.</p>
    {{BLOCK_CONTENT}}
  </div>
</body>
</html>
"#;

/// Named page markup with a single block placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSkeleton {
    id: &'static str,
    html: &'static str,
}

impl PageSkeleton {
    /// Identifier used to request the skeleton.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Raw markup including the placeholder.
    #[must_use]
    pub const fn html(&self) -> &'static str {
        self.html
    }
}

const STANDARD_SKELETONS: [PageSkeleton; 2] = [
    PageSkeleton {
        id: "simple_center",
        html: SIMPLE_CENTER_HTML,
    },
    PageSkeleton {
        id: "fake_download",
        html: FAKE_DOWNLOAD_HTML,
    },
];

/// Registry of page skeletons.
#[derive(Clone, Debug, Default)]
pub struct PageRenderer;

impl PageRenderer {
    /// Looks up the skeleton registered under `id`.
    #[must_use]
    pub fn skeleton(&self, id: &str) -> Option<&'static PageSkeleton> {
        STANDARD_SKELETONS.iter().find(|skeleton| skeleton.id == id)
    }

    /// Registered skeletons in declaration order.
    pub fn skeletons(&self) -> impl Iterator<Item = &'static PageSkeleton> {
        STANDARD_SKELETONS.iter()
    }

    /// Wraps `block_html` in the named skeleton.
    ///
    /// Unknown page identifiers return the block unchanged.
    #[must_use]
    pub fn render(&self, page_id: &str, block_html: &str) -> String {
        match self.skeleton(page_id) {
            Some(skeleton) => skeleton.html().replacen(BLOCK_PLACEHOLDER, block_html, 1),
            None => {
                debug!(page = page_id, "unknown page template; returning bare block");
                block_html.to_owned()
            }
        }
    }
}

/// Wraps `block_html` in the named skeleton, passing it through when unknown.
#[must_use]
pub fn render_template(page_id: &str, block_html: &str) -> String {
    PageRenderer.render(page_id, block_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skeleton_has_exactly_one_placeholder() {
        for skeleton in PageRenderer.skeletons() {
            assert_eq!(
                skeleton.html().matches(BLOCK_PLACEHOLDER).count(),
                1,
                "{} must hold a single placeholder",
                skeleton.id()
            );
        }
    }

    #[test]
    fn render_substitutes_block() {
        let html = render_template("simple_center", "<p>wait</p>");
        assert!(html.contains("<div class=\"block-container\" id=\"blockContainer\">"));
        assert!(html.contains("<p>wait</p>"));
        assert!(!html.contains(BLOCK_PLACEHOLDER));
        assert!(html.contains("blockComplete"));
    }

    #[test]
    fn unknown_page_passes_block_through() {
        assert_eq!(render_template("missing", "<p>wait</p>"), "<p>wait</p>");
    }

    #[test]
    fn block_content_is_not_rescanned() {
        let html = render_template("fake_download", "{{BLOCK_CONTENT}}");
        assert_eq!(html.matches(BLOCK_PLACEHOLDER).count(), 1);
        assert!(html.contains("Preparing your download..."));
    }
}
