//! Gallery reconciliation for multi-image products.
//!
//! The admin UI curates a product's gallery client-side: it sends the list
//! of already-uploaded URLs to keep (in its chosen order) plus freshly
//! selected files. The server never reorders anything; it only concatenates
//! retained URLs with the URLs of the new uploads, existing-before-new.

/// The reconciliation plan for one create/update request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryPlan {
    /// URLs of previously uploaded images to keep, in caller order.
    pub retained: Vec<String>,
    /// Public URLs of newly uploaded images, in upload-key order
    /// (`gallery_0`, `gallery_1`, ...). Images whose upload failed are
    /// absent; the rest keep their relative order.
    pub uploaded: Vec<String>,
}

impl GalleryPlan {
    /// Creates a plan from the retained list.
    #[must_use]
    pub fn retaining(retained: Vec<String>) -> Self {
        Self {
            retained,
            uploaded: Vec::new(),
        }
    }

    /// Records a successful upload.
    pub fn push_uploaded(&mut self, url: String) {
        self.uploaded.push(url);
    }

    /// Produces the final persisted gallery: retained URLs followed by
    /// uploaded URLs, both verbatim.
    #[must_use]
    pub fn merge(self) -> Vec<String> {
        let mut gallery = self.retained;
        gallery.extend(self.uploaded);
        gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_precede_new() {
        let mut plan = GalleryPlan::retaining(vec!["b".to_string()]);
        plan.push_uploaded("new-url".to_string());

        assert_eq!(plan.merge(), vec!["b".to_string(), "new-url".to_string()]);
    }

    #[test]
    fn test_empty_plan() {
        assert!(GalleryPlan::default().merge().is_empty());
    }

    #[test]
    fn test_retained_order_is_verbatim() {
        // Caller reordered: "b" now before "a".
        let plan = GalleryPlan::retaining(vec!["b".into(), "a".into()]);
        assert_eq!(plan.merge(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_uploads_only() {
        let mut plan = GalleryPlan::default();
        plan.push_uploaded("u0".into());
        plan.push_uploaded("u1".into());
        assert_eq!(plan.merge(), vec!["u0".to_string(), "u1".to_string()]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // For any retained list and upload sequence, the merged gallery is the
    // exact concatenation: retained first, uploads after, order preserved.
    proptest! {
        #[test]
        fn prop_merge_is_concatenation(
            retained in proptest::collection::vec("[a-z0-9/.-]{1,20}", 0..8),
            uploads in proptest::collection::vec("[a-z0-9/.-]{1,20}", 0..8),
        ) {
            let mut plan = GalleryPlan::retaining(retained.clone());
            for u in &uploads {
                plan.push_uploaded(u.clone());
            }

            let merged = plan.merge();
            prop_assert_eq!(&merged[..retained.len()], &retained[..]);
            prop_assert_eq!(&merged[retained.len()..], &uploads[..]);
        }
    }
}
