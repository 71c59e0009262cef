use super::{run, IngredientReport};
use crate::images_to_text::{ImageSource, ImageText, VisionClient};
use crate::reference::ReferenceList;
use crate::FinderError;

/// Recognizes text in `images` and finds the known ingredients in it.
///
/// Texts from all images are combined before word extraction, so the
/// report lists words in image order.
pub async fn process(
    images: &[ImageSource],
    client: &VisionClient,
    reference: &ReferenceList,
) -> Result<IngredientReport, FinderError> {
    let source = ImageText::new(client.clone(), images.to_vec());
    run(&source, reference).await
}
