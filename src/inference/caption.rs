use super::types::Caption;
use crate::error::CaptionError;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait ImageCaptioner: Send + Sync {
    /// Describes a base64-encoded image. Candidates come back best first.
    async fn caption(&self, image_base64: &str) -> Result<Vec<Caption>, CaptionError>;
}

/// Captioner that never looks at the image and always answers with the same text.
///
/// Stands in for the vision model until image decoding is wired up.
pub struct PlaceholderCaptioner {
    text: String,
}

impl PlaceholderCaptioner {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl ImageCaptioner for PlaceholderCaptioner {
    async fn caption(&self, image_base64: &str) -> Result<Vec<Caption>, CaptionError> {
        debug!(
            "Placeholder caption requested for {} bytes of image data",
            image_base64.len()
        );
        Ok(vec![Caption::new(self.text.clone())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_placeholder_ignores_input() {
        let captioner = PlaceholderCaptioner::new("a person sitting in front of a computer");

        for input in ["", "not base64 at all!!", "iVBORw0KGgoAAAANSUhEUgAAAAEAAAAB"] {
            let captions = captioner.caption(input).await.unwrap();
            assert_eq!(
                captions,
                vec![Caption::new("a person sitting in front of a computer")]
            );
        }
    }
}
