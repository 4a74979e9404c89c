//! Background photo selection service.

use std::sync::Arc;

use crate::domain::entities::ImageResult;
use crate::domain::selection::{IndexPicker, select_photo};
use crate::domain::sources::ImageSource;
use crate::error::AppError;

/// Service picking one background photo for a query.
///
/// Fetches a single page of search results and selects one photo from it
/// with the two-stage draw described in [`crate::domain::selection`].
pub struct BackgroundService<S: ImageSource, P: IndexPicker> {
    source: Arc<S>,
    picker: P,
    per_page: u32,
}

impl<S: ImageSource, P: IndexPicker> BackgroundService<S, P> {
    /// Creates a new background service.
    pub fn new(source: Arc<S>, picker: P, per_page: u32) -> Self {
        Self {
            source,
            picker,
            per_page,
        }
    }

    /// Picks one photo matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyImageResult`] if the search matched nothing.
    /// Upstream failures from the source are propagated unchanged.
    pub async fn pick(&self, query: &str) -> Result<ImageResult, AppError> {
        let page = self.source.search(query, self.per_page).await?;

        if page.is_empty() {
            return Err(AppError::empty_images(query));
        }

        let pick = select_photo(
            page.total,
            page.total_pages,
            u64::from(self.per_page),
            page.results.len(),
            &self.picker,
        )
        .ok_or_else(|| AppError::empty_images(query))?;

        tracing::debug!(
            query,
            total = page.total,
            total_pages = page.total_pages,
            page = pick.page,
            index = pick.index,
            "Selected background photo"
        );

        page.results
            .into_iter()
            .nth(pick.index)
            .ok_or_else(|| AppError::empty_images(query))
    }

    /// Picks a photo for `query`, retrying with `fallback` if nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyImageResult`] only when the fallback topic is
    /// empty too. Upstream failures are not retried.
    pub async fn pick_or_fallback(
        &self,
        query: &str,
        fallback: &str,
    ) -> Result<ImageResult, AppError> {
        match self.pick(query).await {
            Err(AppError::EmptyImageResult { .. }) if query != fallback => {
                tracing::info!(query, fallback, "No photos for query, using fallback topic");
                self.pick(fallback).await
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SearchPage;
    use crate::domain::selection::MockIndexPicker;
    use crate::domain::sources::MockImageSource;

    fn photo(n: usize) -> ImageResult {
        ImageResult {
            url: format!("https://images.example.com/photo-{n}?w=400"),
            color: "#0c2626".to_string(),
            author_name: format!("Author {n}"),
            author_profile_url: format!("https://api.example.com/users/author{n}"),
        }
    }

    fn page(total: u64, total_pages: u64, fetched: usize) -> SearchPage {
        SearchPage {
            total,
            total_pages,
            results: (0..fetched).map(photo).collect(),
        }
    }

    fn picker_returning(values: Vec<u64>) -> MockIndexPicker {
        let mut picker = MockIndexPicker::new();
        let mut values = values.into_iter();
        picker
            .expect_pick_below()
            .returning(move |_| values.next().unwrap_or(0));
        picker
    }

    #[tokio::test]
    async fn test_pick_returns_selected_photo() {
        let mut mock_source = MockImageSource::new();
        mock_source
            .expect_search()
            .withf(|query, per_page| query == "nature" && *per_page == 30)
            .times(1)
            .returning(|_, _| Ok(page(1000, 34, 30)));

        let service = BackgroundService::new(Arc::new(mock_source), picker_returning(vec![7, 12]), 30);

        let image = service.pick("nature").await.unwrap();

        assert_eq!(image, photo(12));
    }

    #[tokio::test]
    async fn test_pick_last_page_bounds_index() {
        let mut mock_source = MockImageSource::new();
        mock_source
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(page(5, 1, 5)));

        let mut picker = MockIndexPicker::new();
        picker
            .expect_pick_below()
            .withf(|upper| *upper == 1)
            .times(1)
            .return_const(0u64);
        picker
            .expect_pick_below()
            .withf(|upper| *upper == 5)
            .times(1)
            .return_const(4u64);

        let service = BackgroundService::new(Arc::new(mock_source), picker, 30);

        let image = service.pick("Reykjavik").await.unwrap();

        assert_eq!(image, photo(4));
    }

    #[tokio::test]
    async fn test_pick_empty_results() {
        let mut mock_source = MockImageSource::new();
        mock_source
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(SearchPage::default()));

        let service = BackgroundService::new(Arc::new(mock_source), MockIndexPicker::new(), 30);

        let err = service.pick("qwxyzabc123").await.unwrap_err();

        assert!(matches!(err, AppError::EmptyImageResult { ref query } if query == "qwxyzabc123"));
    }

    #[tokio::test]
    async fn test_pick_or_fallback_uses_fallback_topic() {
        let mut mock_source = MockImageSource::new();
        mock_source
            .expect_search()
            .withf(|query, _| query == "Qwxyzabc123")
            .times(1)
            .returning(|_, _| Ok(SearchPage::default()));
        mock_source
            .expect_search()
            .withf(|query, _| query == "nature")
            .times(1)
            .returning(|_, _| Ok(page(1, 1, 1)));

        let service = BackgroundService::new(Arc::new(mock_source), picker_returning(vec![]), 30);

        let image = service.pick_or_fallback("Qwxyzabc123", "nature").await.unwrap();

        assert_eq!(image, photo(0));
    }

    #[tokio::test]
    async fn test_pick_or_fallback_both_empty() {
        let mut mock_source = MockImageSource::new();
        mock_source
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(SearchPage::default()));

        let service = BackgroundService::new(Arc::new(mock_source), MockIndexPicker::new(), 30);

        let err = service.pick_or_fallback("nature", "nature").await.unwrap_err();

        assert!(matches!(err, AppError::EmptyImageResult { .. }));
    }

    #[tokio::test]
    async fn test_pick_or_fallback_does_not_retry_upstream_errors() {
        let mut mock_source = MockImageSource::new();
        mock_source
            .expect_search()
            .times(1)
            .returning(|_, _| Err(AppError::upstream("Image API", "timeout")));

        let service = BackgroundService::new(Arc::new(mock_source), MockIndexPicker::new(), 30);

        let err = service.pick_or_fallback("Paris", "nature").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable { .. }));
    }
}
